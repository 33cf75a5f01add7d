//! Build GraphQL operations against a schema known only through
//! introspection.
//!
//! The flow is one-way: an [`IntrospectionSchema`](introspection::IntrospectionSchema)
//! is indexed into a [`TypeCatalog`](catalog::TypeCatalog), which the
//! [`FieldClassifier`](classify::FieldClassifier) and
//! [`SelectionSetSynthesizer`](synthesis::SelectionSetSynthesizer) walk to
//! turn a [`SelectionTree`](selection::SelectionTree) into selection-set
//! text. The [`QueryDocumentBuilder`](document::QueryDocumentBuilder) wraps
//! that text into a full operation, and an
//! [`ExplorerSession`](session::ExplorerSession) ties the pieces together
//! for an interactive front-end.

pub mod catalog;
pub mod classify;
pub mod coercion;
pub mod document;
mod error;
pub mod introspection;
pub mod selection;
pub mod session;
pub mod synthesis;
pub mod transport;

pub use error::ExplorerError;
