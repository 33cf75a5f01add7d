use crate::document::OperationKind;
use crate::introspection::Field;
use crate::selection::SelectionTree;
use indexmap::IndexMap;

/// The operation currently being built in an
/// [`ExplorerSession`](crate::session::ExplorerSession), along with the
/// user's choices for it.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveOperation<'catalog> {
    pub(super) arguments: IndexMap<String, String>,
    pub(super) field: &'catalog Field,
    pub(super) kind: OperationKind,
    pub(super) selections: SelectionTree,
}
impl<'catalog> ActiveOperation<'catalog> {
    /// Raw values typed for the operation's own arguments.
    pub fn arguments(&self) -> &IndexMap<String, String> {
        &self.arguments
    }

    /// The root field this operation selects.
    pub fn field(&self) -> &'catalog Field {
        self.field
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> &'catalog str {
        self.field.name()
    }

    pub fn selections(&self) -> &SelectionTree {
        &self.selections
    }
}
