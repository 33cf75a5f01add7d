use crate::ExplorerError;
use crate::introspection::IntrospectionSchema;
use crate::introspection::TypeKind;
use crate::test::fixtures;
use serde_json::json;

#[test]
fn decodes_bare_schema_object() {
    let json = fixtures::block_explorer_schema().to_string();
    let schema = IntrospectionSchema::from_json_str(&json).unwrap();

    assert_eq!(schema.query_type_name(), Some("Query"));
    assert_eq!(schema.mutation_type_name(), Some("Mutation"));
    assert_eq!(schema.subscription_type_name(), None);
    assert_eq!(schema.types()[0].name(), "Query");
}

#[test]
fn decodes_schema_envelopes() {
    let bare = fixtures::block_explorer_schema();
    let expected = IntrospectionSchema::from_json_value(bare.clone()).unwrap();

    let schema_envelope = json!({ "__schema": bare.clone() });
    let data_envelope = json!({ "data": { "__schema": bare } });

    assert_eq!(
        IntrospectionSchema::from_json_value(schema_envelope).unwrap(),
        expected,
    );
    assert_eq!(
        IntrospectionSchema::from_json_str(&data_envelope.to_string()).unwrap(),
        expected,
    );
}

#[test]
fn null_lists_read_as_empty() {
    let schema = IntrospectionSchema::from_json_value(
        fixtures::block_explorer_schema(),
    ).unwrap();
    let status =
        schema.types().iter()
            .find(|schema_type| schema_type.name() == "TxStatus")
            .unwrap();

    assert_eq!(status.kind(), TypeKind::Enum);
    assert!(status.is_leaf());
    assert!(status.fields().is_empty());
    assert!(status.input_fields().is_empty());
    assert_eq!(
        status.enum_values().iter().map(|value| value.name()).collect::<Vec<_>>(),
        vec!["OK", "FAILED"],
    );
}

#[test]
fn field_and_argument_metadata() {
    let schema = IntrospectionSchema::from_json_value(
        fixtures::block_explorer_schema(),
    ).unwrap();
    let block = schema.types()[0].field("block").unwrap();

    assert_eq!(block.type_ref().to_string(), "Block");
    assert_eq!(
        block.args().iter().map(|arg| arg.name()).collect::<Vec<_>>(),
        vec!["number", "hash"],
    );
    assert!(block.arg("number").unwrap().is_required());
    assert!(!block.arg("hash").unwrap().is_required());
    assert!(!block.is_deprecated());
}

#[test]
fn invalid_json_is_a_decode_error() {
    let result = IntrospectionSchema::from_json_str("{ not json");
    assert!(matches!(result, Err(ExplorerError::SchemaDecode { .. })));
}

#[test]
fn unknown_type_kind_is_a_decode_error() {
    let result = IntrospectionSchema::from_json_value(json!({
        "queryType": { "name": "Query" },
        "types": [{ "kind": "NOT_A_KIND", "name": "Query" }],
    }));
    assert!(matches!(result, Err(ExplorerError::SchemaDecode { .. })));
}
