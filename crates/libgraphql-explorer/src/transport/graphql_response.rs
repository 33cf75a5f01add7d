use crate::ExplorerError;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GraphQLResponseError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<serde_json::Value>,
}

/// The decoded JSON body returned by a GraphQL endpoint.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GraphQLResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<GraphQLResponseError>>,
}
impl GraphQLResponse {
    pub fn from_data(data: serde_json::Value) -> Self {
        Self {
            data: Some(data),
            errors: None,
        }
    }

    pub fn from_error_messages<S: Into<String>>(
        messages: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            data: None,
            errors: Some(
                messages.into_iter()
                    .map(|message| GraphQLResponseError {
                        message: message.into(),
                        path: None,
                    })
                    .collect()
            ),
        }
    }

    /// Split this response into its `data`, or the GraphQL errors that
    /// rejected the document.
    ///
    /// A non-empty `errors` list is a failure even when partial `data` came
    /// back alongside it.
    pub fn into_data(self) -> Result<serde_json::Value, ExplorerError> {
        if let Some(errors) = self.errors
            && !errors.is_empty() {
            return Err(ExplorerError::GraphQL {
                messages: errors.into_iter()
                    .map(|error| error.message)
                    .collect(),
            });
        }

        match self.data {
            Some(serde_json::Value::Null) | None => Err(ExplorerError::MissingData),
            Some(data) => Ok(data),
        }
    }
}
