use crate::catalog::TypeCatalog;
use crate::document::DocumentShape;
use crate::document::OperationKind;
use crate::document::QueryDocumentBuilder;
use crate::introspection::Field;
use crate::test::fixtures;
use indexmap::IndexMap;
use serde_json::json;

fn args(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs.iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

fn root_field<'a>(catalog: &'a TypeCatalog, kind: OperationKind, name: &str) -> &'a Field {
    catalog.operation_field(kind, name).unwrap()
}

fn assert_parses(document: &str) {
    if let Err(e) = graphql_parser::parse_query::<String>(document) {
        panic!("`{document}` failed to parse: {e}");
    }
}

#[test]
fn inline_query_with_argument() {
    let catalog = fixtures::block_explorer_catalog();
    let built =
        QueryDocumentBuilder::new(&catalog)
            .with_shape(DocumentShape::InlineLiterals)
            .build(
                OperationKind::Query,
                root_field(&catalog, OperationKind::Query, "blocks"),
                &args(&[("limit", "5")]),
                "hash number",
            );

    assert_eq!(built.document(), "query { blocks(limit: 5) { hash number } }");
    assert_eq!(built.variables(), None);
    assert_parses(built.document());
}

#[test]
fn variables_query_with_argument() {
    let catalog = fixtures::block_explorer_catalog();
    let built =
        QueryDocumentBuilder::new(&catalog).build(
            OperationKind::Query,
            root_field(&catalog, OperationKind::Query, "blocks"),
            &args(&[("limit", "5")]),
            "hash number",
        );

    assert_eq!(
        built.document(),
        "query($limit: Int) { blocks(limit: $limit) { hash number } }",
    );
    assert_eq!(
        built.variables().map(|variables| json!(variables)),
        Some(json!({ "limit": 5 })),
    );
    assert_parses(built.document());
}

#[test]
fn default_shape_is_variables() {
    let catalog = fixtures::block_explorer_catalog();
    assert_eq!(QueryDocumentBuilder::new(&catalog).shape(), DocumentShape::Variables);
}

#[test]
fn arguments_follow_declared_order() {
    let catalog = fixtures::block_explorer_catalog();
    let create_note = root_field(&catalog, OperationKind::Mutation, "createNote");
    let edited = args(&[
        ("kind", "RICH"),
        ("weight", "1.5"),
        ("text", "hi"),
        ("pinned", "true"),
    ]);

    let inline =
        QueryDocumentBuilder::new(&catalog)
            .with_shape(DocumentShape::InlineLiterals)
            .build(OperationKind::Mutation, create_note, &edited, "id text");
    assert_eq!(
        inline.document(),
        r#"mutation { createNote(text: "hi", pinned: true, weight: 1.5, kind: "RICH") { id text } }"#,
    );

    let with_variables =
        QueryDocumentBuilder::new(&catalog)
            .build(OperationKind::Mutation, create_note, &edited, "id text");
    assert_eq!(
        with_variables.document(),
        "mutation($text: String!, $pinned: Boolean, $weight: Float, $kind: NoteKind) \
        { createNote(text: $text, pinned: $pinned, weight: $weight, kind: $kind) { id text } }",
    );
    assert_eq!(
        with_variables.variables()
            .map(|variables| variables.keys().map(String::as_str).collect::<Vec<_>>()),
        Some(vec!["text", "pinned", "weight", "kind"]),
    );
    assert_parses(with_variables.document());
}

#[test]
fn blank_arguments_are_omitted() {
    let catalog = fixtures::block_explorer_catalog();
    let block = root_field(&catalog, OperationKind::Query, "block");
    let edited = args(&[("number", "12"), ("hash", "  ")]);

    let inline =
        QueryDocumentBuilder::new(&catalog)
            .with_shape(DocumentShape::InlineLiterals)
            .build(OperationKind::Query, block, &edited, "hash");
    assert_eq!(inline.document(), "query { block(number: 12) { hash } }");

    let with_variables =
        QueryDocumentBuilder::new(&catalog)
            .build(OperationKind::Query, block, &edited, "hash");
    assert_eq!(
        with_variables.document(),
        "query($number: Int!) { block(number: $number) { hash } }",
    );
    assert_eq!(
        with_variables.variables().map(|variables| json!(variables)),
        Some(json!({ "number": 12 })),
    );
}

#[test]
fn leaf_operation_has_no_selection_block() {
    let catalog = fixtures::block_explorer_catalog();
    let built =
        QueryDocumentBuilder::new(&catalog)
            .with_shape(DocumentShape::InlineLiterals)
            .build(
                OperationKind::Mutation,
                root_field(&catalog, OperationKind::Mutation, "deleteBlock"),
                &args(&[("id", "0x1")]),
                "__typename",
            );

    assert_eq!(built.document(), r#"mutation { deleteBlock(id: "0x1") }"#);
    assert_parses(built.document());
}

#[test]
fn no_arguments_no_parentheses() {
    let catalog = fixtures::block_explorer_catalog();
    let built =
        QueryDocumentBuilder::new(&catalog).build(
            OperationKind::Query,
            root_field(&catalog, OperationKind::Query, "status"),
            &IndexMap::new(),
            "",
        );

    assert_eq!(built.document(), "query { status }");
    assert_eq!(built.variables(), Some(&serde_json::Map::new()));
}

#[test]
fn unparseable_numbers_become_null() {
    let catalog = fixtures::block_explorer_catalog();
    let blocks = root_field(&catalog, OperationKind::Query, "blocks");
    let edited = args(&[("limit", "five")]);

    let inline =
        QueryDocumentBuilder::new(&catalog)
            .with_shape(DocumentShape::InlineLiterals)
            .build(OperationKind::Query, blocks, &edited, "hash");
    assert_eq!(inline.document(), "query { blocks(limit: null) { hash } }");

    let with_variables =
        QueryDocumentBuilder::new(&catalog)
            .build(OperationKind::Query, blocks, &edited, "hash");
    assert_eq!(
        with_variables.variables().map(|variables| json!(variables)),
        Some(json!({ "limit": null })),
    );
}

#[test]
fn request_body_carries_variables_only_when_present() {
    let catalog = fixtures::block_explorer_catalog();
    let blocks = root_field(&catalog, OperationKind::Query, "blocks");
    let edited = args(&[("limit", "2")]);

    let inline =
        QueryDocumentBuilder::new(&catalog)
            .with_shape(DocumentShape::InlineLiterals)
            .build(OperationKind::Query, blocks, &edited, "hash");
    assert_eq!(
        serde_json::to_value(inline.to_request()).unwrap(),
        json!({ "query": "query { blocks(limit: 2) { hash } }" }),
    );

    let with_variables =
        QueryDocumentBuilder::new(&catalog)
            .build(OperationKind::Query, blocks, &edited, "hash");
    assert_eq!(
        serde_json::to_value(with_variables.to_request()).unwrap(),
        json!({
            "query": "query($limit: Int) { blocks(limit: $limit) { hash } }",
            "variables": { "limit": 2 },
        }),
    );
    assert_eq!(with_variables.to_string(), with_variables.document());
}
