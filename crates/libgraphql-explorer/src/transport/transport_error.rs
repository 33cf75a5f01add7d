use thiserror::Error;

/// A failure to obtain a GraphQL response at all, as opposed to a response
/// carrying GraphQL `errors`.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TransportError {
    #[error("Unable to decode the response body as a GraphQL response: {message}")]
    Decode {
        message: String,
    },

    #[error("Request failed: {message}")]
    Network {
        message: String,
    },

    #[error("Endpoint responded with HTTP {status}: {body}")]
    Status {
        body: String,
        status: u16,
    },
}
