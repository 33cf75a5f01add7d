mod fetch_schema;
mod type_catalog;

pub use fetch_schema::fetch_schema;
pub use type_catalog::TypeCatalog;
