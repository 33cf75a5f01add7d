use crate::catalog::TypeCatalog;
use crate::classify::ConnectionDetection;
use crate::introspection::TypeKind;
use crate::introspection::TypeRef;
use crate::selection::Selection;
use crate::selection::SelectionTree;
use crate::synthesis::SelectionSetSynthesizer;
use crate::synthesis::SynthesizerConfig;
use crate::test::fixtures;

fn object(name: &str) -> TypeRef {
    TypeRef::named(TypeKind::Object, name)
}

fn tree(field_names: &[&str]) -> SelectionTree {
    field_names.iter().copied().map(Selection::new).collect()
}

fn assert_parses(selection_set: &str) {
    let document = format!("query {{ root {{ {selection_set} }} }}");
    if let Err(e) = graphql_parser::parse_query::<String>(&document) {
        panic!("`{document}` failed to parse: {e}");
    }
}

/// ```graphql
/// type Query { head: Link }
/// type Link { next: Link }
/// ```
fn linked_list_catalog() -> TypeCatalog {
    use fixtures::*;

    catalog_from(schema_json("Query", None, vec![
        object_type("Query", vec![field("head", object_ref("Link"))]),
        object_type("Link", vec![field("next", object_ref("Link"))]),
    ]))
}

#[test]
fn nothing_selected_selects_typename() {
    let catalog = fixtures::block_explorer_catalog();
    let synthesizer = SelectionSetSynthesizer::new(&catalog);

    assert_eq!(synthesizer.synthesize(&object("Block"), &SelectionTree::new()), "__typename");
}

#[test]
fn leaves_render_in_selection_order() {
    let catalog = fixtures::block_explorer_catalog();
    let synthesizer = SelectionSetSynthesizer::new(&catalog);

    assert_eq!(
        synthesizer.synthesize(&object("Block"), &tree(&["number", "hash"])),
        "number hash",
    );
}

#[test]
fn wrapped_return_type_resolves_to_named_type() {
    let catalog = fixtures::block_explorer_catalog();
    let synthesizer = SelectionSetSynthesizer::new(&catalog);
    let block_list = TypeRef::list(TypeRef::non_null(object("Block")));

    assert_eq!(synthesizer.synthesize(&block_list, &tree(&["hash"])), "hash");
}

#[test]
fn stale_selections_are_skipped() {
    let catalog = fixtures::block_explorer_catalog();
    let synthesizer = SelectionSetSynthesizer::new(&catalog);

    assert_eq!(
        synthesizer.synthesize(&object("Block"), &tree(&["value", "hash", "cursor"])),
        "hash",
    );
    assert_eq!(
        synthesizer.synthesize(&object("Block"), &tree(&["value"])),
        "__typename",
    );
}

#[test]
fn connection_without_subfields() {
    let catalog = fixtures::block_explorer_catalog();
    let synthesizer = SelectionSetSynthesizer::new(&catalog);

    let rendered = synthesizer.synthesize(&object("Block"), &tree(&["transactions"]));
    assert_eq!(
        rendered,
        "transactions { edges { node { __typename } } pageInfo { endCursor hasNextPage } }",
    );
    assert_parses(&rendered);
}

#[test]
fn connection_with_arguments_and_subfields() {
    let catalog = fixtures::block_explorer_catalog();
    let synthesizer = SelectionSetSynthesizer::new(&catalog);
    let selections = [
        Selection::new("hash"),
        Selection::new("transactions")
            .with_argument("first", "10")
            .with_subfields(["hash", "status"]),
    ];

    let rendered = synthesizer.synthesize(&object("Block"), &selections);
    assert_eq!(
        rendered,
        "hash transactions(first: 10) { edges { node { hash status } } \
        pageInfo { endCursor hasNextPage } }",
    );
    assert_parses(&rendered);
}

#[test]
fn object_field_expands_to_default_leaves() {
    let catalog = fixtures::block_explorer_catalog();
    let synthesizer = SelectionSetSynthesizer::new(&catalog);

    assert_eq!(
        synthesizer.synthesize(&object("Block"), &tree(&["miner"])),
        "miner { hash balance }",
    );
}

#[test]
fn object_without_leaves_expands_its_objects() {
    let catalog = fixtures::block_explorer_catalog();
    let synthesizer = SelectionSetSynthesizer::new(&catalog);

    let rendered = synthesizer.synthesize(&object("Query"), &tree(&["wrapper"]));
    assert_eq!(
        rendered,
        "wrapper { block { hash number } address { hash balance } }",
    );
    assert_parses(&rendered);
}

#[test]
fn object_expansion_respects_max_object_fields() {
    let catalog = fixtures::block_explorer_catalog();
    let synthesizer = SelectionSetSynthesizer::with_config(&catalog, SynthesizerConfig {
        max_object_fields: 1,
        ..SynthesizerConfig::default()
    });

    assert_eq!(
        synthesizer.synthesize(&object("Block"), &tree(&["miner", "parent"])),
        "miner { hash } parent { hash }",
    );
}

#[test]
fn cyclic_types_stop_at_max_depth() {
    let catalog = linked_list_catalog();
    let synthesizer = SelectionSetSynthesizer::new(&catalog);

    let rendered = synthesizer.synthesize(&object("Query"), &tree(&["head"]));
    assert_eq!(rendered, "head { next { next { __typename } } }");
    assert_parses(&rendered);
}

#[test]
fn shallower_max_depth() {
    let catalog = linked_list_catalog();
    let synthesizer = SelectionSetSynthesizer::with_config(&catalog, SynthesizerConfig {
        max_depth: 1,
        ..SynthesizerConfig::default()
    });

    assert_eq!(
        synthesizer.synthesize(&object("Query"), &tree(&["head"])),
        "head { __typename }",
    );
}

#[test]
fn union_selects_typename() {
    let catalog = fixtures::block_explorer_catalog();
    let synthesizer = SelectionSetSynthesizer::new(&catalog);
    let selections = [Selection::new("search").with_argument("term", "eth")];

    let rendered = synthesizer.synthesize(&object("Query"), &selections);
    assert_eq!(rendered, r#"search(term: "eth") { __typename }"#);
    assert_parses(&rendered);
}

#[test]
fn undefined_type_renders_bare_name() {
    let catalog = fixtures::block_explorer_catalog();
    let synthesizer = SelectionSetSynthesizer::new(&catalog);

    assert_eq!(
        synthesizer.synthesize(&object("Query"), &tree(&["mystery", "status"])),
        "mystery status",
    );
}

#[test]
fn blank_arguments_are_omitted() {
    let catalog = fixtures::block_explorer_catalog();
    let synthesizer = SelectionSetSynthesizer::new(&catalog);
    let selections = [
        Selection::new("transactions")
            .with_argument("first", " ")
            .with_subfields(["hash"]),
    ];

    assert_eq!(
        synthesizer.synthesize(&object("Block"), &selections),
        "transactions { edges { node { hash } } pageInfo { endCursor hasNextPage } }",
    );
}

#[test]
fn nodes_detection_keeps_edges_envelope() {
    use fixtures::*;

    let catalog = catalog_from(schema_json("Query", None, vec![
        object_type("Query", vec![field("feed", object_ref("Feed"))]),
        object_type("Feed", vec![
            field("nodes", list(object_ref("Post"))),
            field("total", scalar("Int")),
        ]),
        object_type("Post", vec![field("title", scalar("String"))]),
        scalar_type("Int"),
        scalar_type("String"),
    ]));
    let synthesizer = SelectionSetSynthesizer::with_config(&catalog, SynthesizerConfig {
        connection_detection: ConnectionDetection::EdgesOrNodes,
        ..SynthesizerConfig::default()
    });

    assert_eq!(
        synthesizer.synthesize(&object("Query"), &tree(&["feed"])),
        "feed { edges { node { __typename } } pageInfo { endCursor hasNextPage } }",
    );
}
