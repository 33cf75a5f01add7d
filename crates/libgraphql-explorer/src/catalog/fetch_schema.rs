use crate::ExplorerError;
use crate::catalog::TypeCatalog;
use crate::transport::GraphQLTransport;

/// Introspect the schema served at `endpoint` and index it.
///
/// Shorthand for [`TypeCatalog::fetch`].
pub async fn fetch_schema<T: GraphQLTransport>(
    transport: &T,
    endpoint: &str,
) -> Result<TypeCatalog, ExplorerError> {
    TypeCatalog::fetch(transport, endpoint).await
}
