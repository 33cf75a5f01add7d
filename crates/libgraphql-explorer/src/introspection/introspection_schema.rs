use crate::ExplorerError;
use crate::introspection::Directive;
use crate::introspection::SchemaType;

type Result<T> = std::result::Result<T, ExplorerError>;

/// `{ name }` as found on `__schema.queryType` and friends.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct RootTypeName {
    pub(crate) name: String,
}
impl RootTypeName {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// The `__schema` object of an introspection result.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionSchema {
    #[serde(default)]
    pub(crate) directives: Vec<Directive>,
    #[serde(default)]
    pub(crate) mutation_type: Option<RootTypeName>,
    #[serde(default)]
    pub(crate) query_type: Option<RootTypeName>,
    #[serde(default)]
    pub(crate) subscription_type: Option<RootTypeName>,
    #[serde(default)]
    pub(crate) types: Vec<SchemaType>,
}
impl IntrospectionSchema {
    pub fn directives(&self) -> &[Directive] {
        self.directives.as_slice()
    }

    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type.as_ref().map(RootTypeName::name)
    }

    pub fn query_type_name(&self) -> Option<&str> {
        self.query_type.as_ref().map(RootTypeName::name)
    }

    pub fn subscription_type_name(&self) -> Option<&str> {
        self.subscription_type.as_ref().map(RootTypeName::name)
    }

    pub fn types(&self) -> &[SchemaType] {
        self.types.as_slice()
    }

    /// Decode a schema from the JSON text of an introspection result.
    ///
    /// Accepts any of the three shapes such results are commonly saved in:
    /// a full `{"data": {"__schema": ...}}` response, a bare
    /// `{"__schema": ...}` object, or the `__schema` object itself.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json)
                .map_err(|e| ExplorerError::SchemaDecode {
                    message: e.to_string(),
                })?;
        Self::from_json_value(value)
    }

    /// Same as [`IntrospectionSchema::from_json_str`], over an
    /// already-parsed value.
    pub fn from_json_value(mut value: serde_json::Value) -> Result<Self> {
        if value.get("data").is_some() {
            value = value["data"].take();
        }
        if value.get("__schema").is_some() {
            value = value["__schema"].take();
        }

        serde_json::from_value(value).map_err(|e| ExplorerError::SchemaDecode {
            message: e.to_string(),
        })
    }
}
