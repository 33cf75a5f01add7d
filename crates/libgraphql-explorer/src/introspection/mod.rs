//! Serde model of a GraphQL introspection result, plus the fixed
//! introspection query used to obtain one.

mod directive;
mod enum_value;
mod field;
mod input_value;
mod introspection_query;
mod introspection_schema;
mod schema_type;
mod type_kind;
mod type_ref;

pub use directive::Directive;
pub use enum_value::EnumValue;
pub use field::Field;
pub use input_value::InputValue;
pub use introspection_query::INTROSPECTION_QUERY;
pub use introspection_query::TYPE_REF_DEPTH;
pub use introspection_schema::IntrospectionSchema;
pub use introspection_schema::RootTypeName;
pub use schema_type::SchemaType;
pub use type_kind::TypeKind;
pub use type_ref::TypeRef;

#[cfg(test)]
mod tests;
