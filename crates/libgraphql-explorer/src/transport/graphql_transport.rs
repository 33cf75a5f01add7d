use crate::transport::GraphQLRequest;
use crate::transport::GraphQLResponse;
use crate::transport::TransportError;

/// Sends a single GraphQL request to an endpoint and decodes the response.
///
/// Implementations report anything short of a decodable GraphQL response
/// body (network failures, non-success statuses) as a [`TransportError`];
/// GraphQL-level `errors` are returned inside the [`GraphQLResponse`].
#[allow(async_fn_in_trait)]
pub trait GraphQLTransport {
    async fn send(
        &self,
        endpoint: &str,
        request: &GraphQLRequest,
    ) -> Result<GraphQLResponse, TransportError>;
}
