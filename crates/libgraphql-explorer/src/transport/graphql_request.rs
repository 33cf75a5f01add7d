/// The JSON body POSTed to a GraphQL endpoint.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GraphQLRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<serde_json::Map<String, serde_json::Value>>,
}
impl GraphQLRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
        }
    }

    pub fn with_variables(
        mut self,
        variables: Option<serde_json::Map<String, serde_json::Value>>,
    ) -> Self {
        self.variables = variables;
        self
    }
}
