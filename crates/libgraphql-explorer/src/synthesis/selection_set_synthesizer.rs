use crate::catalog::TypeCatalog;
use crate::classify::FieldClass;
use crate::classify::FieldClassifier;
use crate::coercion::inline_arguments;
use crate::introspection::Field;
use crate::introspection::TypeKind;
use crate::introspection::TypeRef;
use crate::selection::Selection;
use crate::synthesis::SynthesizerConfig;

/// The meta-field selected wherever a block would otherwise be empty.
pub const TYPENAME_FIELD: &str = "__typename";

/// Turns user [`Selection`]s into GraphQL selection-set source text.
///
/// Output is compact: every token is separated by a single space, e.g.
/// `hash transactions { edges { node { __typename } } pageInfo { endCursor hasNextPage } }`.
/// The outer braces of the selection set itself are left to the caller.
#[derive(Clone, Copy, Debug)]
pub struct SelectionSetSynthesizer<'catalog> {
    catalog: &'catalog TypeCatalog,
    classifier: FieldClassifier<'catalog>,
    config: SynthesizerConfig,
}
impl<'catalog> SelectionSetSynthesizer<'catalog> {
    pub fn new(catalog: &'catalog TypeCatalog) -> Self {
        Self::with_config(catalog, SynthesizerConfig::default())
    }

    pub fn with_config(
        catalog: &'catalog TypeCatalog,
        config: SynthesizerConfig,
    ) -> Self {
        Self {
            catalog,
            classifier: FieldClassifier::new(catalog)
                .with_detection(config.connection_detection),
            config,
        }
    }

    pub fn classifier(&self) -> &FieldClassifier<'catalog> {
        &self.classifier
    }

    pub fn config(&self) -> &SynthesizerConfig {
        &self.config
    }

    /// Render `selections`, in the given order, as the contents of a
    /// selection set on the type named by `return_type`.
    ///
    /// Selections naming a field that `return_type` does not have are
    /// skipped. If nothing at all is rendered, the result is `__typename`.
    pub fn synthesize<'s>(
        &self,
        return_type: &TypeRef,
        selections: impl IntoIterator<Item = &'s Selection>,
    ) -> String {
        let rendered: Vec<String> =
            selections.into_iter()
                .filter_map(|selection| {
                    let field_name = selection.field_name();
                    match self.catalog.field_of(return_type, field_name) {
                        Some(field) => Some(self.render_selection(field, selection)),
                        None => {
                            log::debug!(
                                "Skipping stale selection `{field_name}`: \
                                `{return_type}` has no such field.",
                            );
                            None
                        },
                    }
                })
                .collect();

        join_or_typename(rendered)
    }

    fn render_selection(&self, field: &Field, selection: &Selection) -> String {
        let arguments = inline_arguments(field.args(), selection.arguments());
        match self.classifier.classify(field) {
            FieldClass::Leaf => format!("{}{arguments}", field.name()),

            FieldClass::Connection => render_connection(
                field.name(),
                &arguments,
                selection.subfields(),
            ),

            FieldClass::Object => self.render_object(field, &arguments, 1),
        }
    }

    /// Expand an object field (one the user did not pick sub-fields for) to
    /// its first few default leaf fields.
    ///
    /// `depth` is the nesting level of `field` itself. Once it reaches
    /// `max_depth` the block selects only `__typename`, which bounds the walk
    /// on cyclic schemas.
    fn render_object(&self, field: &Field, arguments: &str, depth: usize) -> String {
        let name = field.name();
        let Some(object_type) = self.catalog.named_type_of(field.type_ref()) else {
            return format!("{name}{arguments}");
        };
        if object_type.fields().is_empty() {
            // Unions have no fields of their own, but still need a block.
            return if object_type.kind() == TypeKind::Union {
                format!("{name}{arguments} {{ {TYPENAME_FIELD} }}")
            } else {
                format!("{name}{arguments}")
            };
        }

        let children: Vec<String> =
            if depth >= self.config.max_depth {
                log::trace!(
                    "Not expanding `{name}` beyond nesting depth {depth}.",
                );
                vec![]
            } else {
                self.classifier
                    .default_leaf_fields(field.type_ref())
                    .into_iter()
                    .take(self.config.max_object_fields)
                    .filter_map(|child_name| object_type.field(child_name))
                    .map(|child| self.render_default(child, depth + 1))
                    .collect()
            };

        format!("{name}{arguments} {{ {} }}", join_or_typename(children))
    }

    /// Render a field reached by default expansion rather than by an
    /// explicit user selection (so without arguments or sub-field choices).
    fn render_default(&self, field: &Field, depth: usize) -> String {
        match self.classifier.classify(field) {
            FieldClass::Leaf => field.name().to_string(),
            FieldClass::Connection => render_connection(field.name(), "", &[]),
            FieldClass::Object => self.render_object(field, "", depth),
        }
    }
}

/// The fixed pagination envelope of a connection field, selecting
/// `subfields` on each node (or `__typename` if none were chosen).
fn render_connection(name: &str, arguments: &str, subfields: &[String]) -> String {
    let node_selection =
        if subfields.is_empty() {
            TYPENAME_FIELD.to_string()
        } else {
            subfields.join(" ")
        };

    format!(
        "{name}{arguments} {{ edges {{ node {{ {node_selection} }} }} \
        pageInfo {{ endCursor hasNextPage }} }}",
    )
}

fn join_or_typename(rendered: Vec<String>) -> String {
    if rendered.is_empty() {
        TYPENAME_FIELD.to_string()
    } else {
        rendered.join(" ")
    }
}
