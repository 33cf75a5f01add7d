use libgraphql_explorer::transport::GraphQLRequest;
use libgraphql_explorer::transport::GraphQLResponse;
use libgraphql_explorer::transport::GraphQLTransport;
use libgraphql_explorer::transport::TransportError;
use std::time::Duration;

const USER_AGENT: &str = "graphql-explorer";

/// Sends GraphQL requests as JSON `POST`s over HTTP(S).
#[derive(Clone, Debug)]
pub(crate) struct HttpTransport {
    client: reqwest::Client,
}
impl HttpTransport {
    pub(crate) fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client =
            reqwest::Client::builder()
                .timeout(timeout)
                .user_agent(USER_AGENT)
                .build()
                .map_err(network_error)?;
        Ok(Self { client })
    }
}
impl GraphQLTransport for HttpTransport {
    async fn send(
        &self,
        endpoint: &str,
        request: &GraphQLRequest,
    ) -> Result<GraphQLResponse, TransportError> {
        log::trace!("POST {endpoint}: {}", request.query);
        let response =
            self.client
                .post(endpoint)
                .json(request)
                .send()
                .await
                .map_err(network_error)?;

        let status = response.status();
        let body = response.text().await.map_err(network_error)?;
        log::trace!("{endpoint} responded with HTTP {status} ({} bytes).", body.len());
        if !status.is_success() {
            return Err(TransportError::Status {
                body,
                status: status.as_u16(),
            });
        }

        serde_json::from_str(&body).map_err(|e| TransportError::Decode {
            message: e.to_string(),
        })
    }
}

fn network_error(error: reqwest::Error) -> TransportError {
    TransportError::Network {
        message: error.to_string(),
    }
}
