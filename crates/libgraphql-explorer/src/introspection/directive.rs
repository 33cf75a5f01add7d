use crate::introspection::InputValue;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Directive {
    #[serde(default)]
    pub(crate) args: Vec<InputValue>,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) locations: Vec<String>,
    pub(crate) name: String,
}
impl Directive {
    pub fn args(&self) -> &[InputValue] {
        self.args.as_slice()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn locations(&self) -> &[String] {
        self.locations.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
