use crate::introspection::EnumValue;
use crate::introspection::Field;
use crate::introspection::InputValue;
use crate::introspection::TypeKind;
use crate::introspection::TypeRef;

/// One entry of the introspected `__schema.types` list.
///
/// Only `OBJECT` and `INTERFACE` types carry `fields`, only `INPUT_OBJECT`
/// types carry `inputFields` and only `ENUM` types carry `enumValues`; the
/// accessors below return an empty slice wherever the schema omitted (or
/// nulled) the list.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaType {
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) enum_values: Option<Vec<EnumValue>>,
    #[serde(default)]
    pub(crate) fields: Option<Vec<Field>>,
    #[serde(default)]
    pub(crate) input_fields: Option<Vec<InputValue>>,
    #[serde(default)]
    pub(crate) interfaces: Option<Vec<TypeRef>>,
    pub(crate) kind: TypeKind,
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) possible_types: Option<Vec<TypeRef>>,
}
impl SchemaType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn enum_values(&self) -> &[EnumValue] {
        self.enum_values.as_deref().unwrap_or_default()
    }

    /// Look up one of this type's output fields by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields().iter().find(|field| field.name() == name)
    }

    /// This type's output fields, in schema-declared order.
    pub fn fields(&self) -> &[Field] {
        self.fields.as_deref().unwrap_or_default()
    }

    pub fn input_fields(&self) -> &[InputValue] {
        self.input_fields.as_deref().unwrap_or_default()
    }

    pub fn interfaces(&self) -> &[TypeRef] {
        self.interfaces.as_deref().unwrap_or_default()
    }

    /// Introspection meta-types (`__Schema`, `__Type`, ...) are prefixed
    /// with `__`.
    pub fn is_introspection_type(&self) -> bool {
        self.name().starts_with("__")
    }

    pub fn is_leaf(&self) -> bool {
        self.kind.is_leaf()
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// The name of this type, or the empty string for a malformed entry
    /// that carried none.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn possible_types(&self) -> &[TypeRef] {
        self.possible_types.as_deref().unwrap_or_default()
    }
}
