mod built_operation;
mod document_shape;
mod operation_kind;
mod query_document_builder;

pub use built_operation::BuiltOperation;
pub use document_shape::DocumentShape;
pub use operation_kind::OperationKind;
pub use query_document_builder::QueryDocumentBuilder;

#[cfg(test)]
mod tests;
