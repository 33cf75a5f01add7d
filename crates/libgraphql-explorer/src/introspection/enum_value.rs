#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    #[serde(default)]
    pub(crate) deprecation_reason: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) is_deprecated: bool,
    pub(crate) name: String,
}
impl EnumValue {
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
}
