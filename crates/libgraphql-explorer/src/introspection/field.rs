use crate::introspection::InputValue;
use crate::introspection::TypeRef;

/// An introspected `__Field` belonging to an object or interface type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    #[serde(default)]
    pub(crate) args: Vec<InputValue>,
    #[serde(default)]
    pub(crate) deprecation_reason: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) is_deprecated: bool,
    pub(crate) name: String,
    #[serde(rename = "type")]
    pub(crate) type_ref: TypeRef,
}
impl Field {
    /// Look up one of this field's arguments by name.
    pub fn arg(&self, name: &str) -> Option<&InputValue> {
        self.args.iter().find(|arg| arg.name() == name)
    }

    /// This field's arguments, in schema-declared order.
    pub fn args(&self) -> &[InputValue] {
        self.args.as_slice()
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_deprecated(&self) -> bool {
        self.is_deprecated
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }
}
