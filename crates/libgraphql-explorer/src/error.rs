use crate::document::OperationKind;
use crate::transport::TransportError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ExplorerError {
    #[error("`{field_name}` is not currently selected")]
    FieldNotSelected {
        field_name: String,
    },

    /// The endpoint was reachable but rejected the document.
    #[error("{}", .messages.join(", "))]
    GraphQL {
        messages: Vec<String>,
    },

    #[error("Response contained neither `data` nor `errors`")]
    MissingData,

    #[error("No Mutation type defined on this schema")]
    NoMutationType,

    #[error("No Query type defined on this schema")]
    NoQueryType,

    #[error("No operation has been selected")]
    NoOperationSelected,

    #[error("Field `{field_name}` is not a connection")]
    NotAConnection {
        field_name: String,
    },

    #[error("Unable to decode introspection result: {message}")]
    SchemaDecode {
        message: String,
    },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("`{field_name}` has no argument named `{argument_name}`")]
    UnknownArgument {
        argument_name: String,
        field_name: String,
    },

    #[error("Type `{type_name}` has no field named `{field_name}`")]
    UnknownField {
        field_name: String,
        type_name: String,
    },

    #[error("No {operation_kind} operation named `{operation_name}`")]
    UnknownOperation {
        operation_kind: OperationKind,
        operation_name: String,
    },
}
