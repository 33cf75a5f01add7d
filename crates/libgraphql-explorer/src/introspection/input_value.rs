use crate::introspection::TypeRef;

/// An introspected `__InputValue`: a field argument, a directive argument,
/// or an input object's field.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValue {
    #[serde(default)]
    pub(crate) default_value: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    #[serde(rename = "type")]
    pub(crate) type_ref: TypeRef,
}
impl InputValue {
    /// The schema-declared default, already in GraphQL literal syntax
    /// (e.g. `10` or `"DESC"`).
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Whether a value must be supplied: the type is `NON_NULL` and there is
    /// no schema default to fall back on.
    pub fn is_required(&self) -> bool {
        self.type_ref.is_non_null() && self.default_value.is_none()
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }
}
