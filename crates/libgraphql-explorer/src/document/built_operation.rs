use crate::transport::GraphQLRequest;

/// A complete operation document, ready to be sent.
#[derive(Clone, Debug, PartialEq)]
pub struct BuiltOperation {
    pub(crate) document: String,
    pub(crate) variables: Option<serde_json::Map<String, serde_json::Value>>,
}
impl BuiltOperation {
    pub fn document(&self) -> &str {
        self.document.as_str()
    }

    /// The JSON `variables` object. Always `None` for documents built with
    /// [`DocumentShape::InlineLiterals`](crate::document::DocumentShape::InlineLiterals).
    pub fn variables(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
        self.variables.as_ref()
    }

    pub fn to_request(&self) -> GraphQLRequest {
        GraphQLRequest::new(self.document.as_str())
            .with_variables(self.variables.clone())
    }
}
impl std::fmt::Display for BuiltOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.document.as_str())
    }
}
