use crate::catalog::TypeCatalog;
use crate::coercion::coerce_json;
use crate::coercion::coerce_literal;
use crate::coercion::present_arguments;
use crate::document::BuiltOperation;
use crate::document::DocumentShape;
use crate::document::OperationKind;
use crate::introspection::Field;
use indexmap::IndexMap;

/// Wraps a synthesized selection set into a complete single-operation
/// document.
///
/// Only arguments with a non-blank raw value are emitted, always in the
/// operation field's declared argument order, so the document is stable for
/// a given selection no matter what order the values were edited in.
#[derive(Clone, Copy, Debug)]
pub struct QueryDocumentBuilder<'catalog> {
    catalog: &'catalog TypeCatalog,
    shape: DocumentShape,
}
impl<'catalog> QueryDocumentBuilder<'catalog> {
    pub fn new(catalog: &'catalog TypeCatalog) -> Self {
        Self {
            catalog,
            shape: DocumentShape::default(),
        }
    }

    pub fn with_shape(mut self, shape: DocumentShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn shape(&self) -> DocumentShape {
        self.shape
    }

    /// Build the document selecting `operation` (a root field of the
    /// `operation_kind` root type) with the given raw argument values and
    /// selection-set source text.
    ///
    /// When `operation` returns a leaf type no selection block is emitted
    /// and `selection_set` is ignored.
    pub fn build(
        &self,
        operation_kind: OperationKind,
        operation: &Field,
        resolved_args: &IndexMap<String, String>,
        selection_set: &str,
    ) -> BuiltOperation {
        let keyword = operation_kind.keyword();
        let name = operation.name();
        let selection_block =
            if self.catalog.is_leaf(operation.type_ref()) {
                String::new()
            } else {
                format!(" {{ {selection_set} }}")
            };
        let present: Vec<_> =
            present_arguments(operation.args(), resolved_args).collect();

        match self.shape {
            DocumentShape::InlineLiterals => {
                let call_args = parenthesize(
                    present.iter()
                        .map(|(arg, raw)| format!(
                            "{}: {}",
                            arg.name(),
                            coerce_literal(arg.type_ref(), raw),
                        ))
                        .collect(),
                );
                BuiltOperation {
                    document: format!(
                        "{keyword} {{ {name}{call_args}{selection_block} }}",
                    ),
                    variables: None,
                }
            },

            DocumentShape::Variables => {
                let variable_defs = parenthesize(
                    present.iter()
                        .map(|(arg, _)| format!("${}: {}", arg.name(), arg.type_ref()))
                        .collect(),
                );
                let call_args = parenthesize(
                    present.iter()
                        .map(|(arg, _)| format!("{0}: ${0}", arg.name()))
                        .collect(),
                );
                let variables =
                    present.iter()
                        .map(|(arg, raw)| (
                            arg.name().to_string(),
                            coerce_json(arg.type_ref(), raw),
                        ))
                        .collect();
                BuiltOperation {
                    document: format!(
                        "{keyword}{variable_defs} {{ {name}{call_args}{selection_block} }}",
                    ),
                    variables: Some(variables),
                }
            },
        }
    }
}

fn parenthesize(items: Vec<String>) -> String {
    if items.is_empty() {
        String::new()
    } else {
        format!("({})", items.join(", "))
    }
}
