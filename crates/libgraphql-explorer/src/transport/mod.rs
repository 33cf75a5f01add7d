mod graphql_request;
mod graphql_response;
mod graphql_transport;
mod transport_error;

pub use graphql_request::GraphQLRequest;
pub use graphql_response::GraphQLResponse;
pub use graphql_response::GraphQLResponseError;
pub use graphql_transport::GraphQLTransport;
pub use transport_error::TransportError;
