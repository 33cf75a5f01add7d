use crate::catalog::TypeCatalog;
use crate::classify::ConnectionDetection;
use crate::classify::FieldClass;
use crate::introspection::Field;
use crate::introspection::TypeRef;

/// Classifies fields against a [`TypeCatalog`] and resolves the shapes the
/// selection-set synthesizer needs.
#[derive(Clone, Copy, Debug)]
pub struct FieldClassifier<'catalog> {
    catalog: &'catalog TypeCatalog,
    detection: ConnectionDetection,
}
impl<'catalog> FieldClassifier<'catalog> {
    pub fn new(catalog: &'catalog TypeCatalog) -> Self {
        Self {
            catalog,
            detection: ConnectionDetection::default(),
        }
    }

    pub fn with_detection(mut self, detection: ConnectionDetection) -> Self {
        self.detection = detection;
        self
    }

    pub fn catalog(&self) -> &'catalog TypeCatalog {
        self.catalog
    }

    /// Leaf-ness wins over connection-ness; anything else composite (or
    /// unresolvable) is an [`Object`](FieldClass::Object).
    pub fn classify(&self, field: &Field) -> FieldClass {
        if self.catalog.is_leaf(field.type_ref()) {
            FieldClass::Leaf
        } else if self.is_connection(field) {
            FieldClass::Connection
        } else {
            FieldClass::Object
        }
    }

    pub fn is_connection(&self, field: &Field) -> bool {
        self.catalog
            .fields_of(field.type_ref())
            .iter()
            .any(|subfield| self.detection.is_marker_field(subfield.name()))
    }

    /// The leaf fields of a connection's node type, found by following
    /// `field.type -> edges -> node`.
    ///
    /// Any missing hop yields an empty list rather than an error.
    pub fn connection_node_fields(&self, field: &Field) -> Vec<&'catalog Field> {
        let Some(edges) = self.catalog.field_of(field.type_ref(), "edges") else {
            return vec![];
        };
        let Some(node) = self.catalog.field_of(edges.type_ref(), "node") else {
            log::trace!(
                "Connection field `{}` has `edges` but no `edges.node`.",
                field.name(),
            );
            return vec![];
        };
        self.leaf_fields(node.type_ref())
    }

    /// All `SCALAR`/`ENUM` fields of the type named by `type_ref`.
    pub fn leaf_fields(&self, type_ref: &TypeRef) -> Vec<&'catalog Field> {
        self.catalog
            .fields_of(type_ref)
            .iter()
            .filter(|field| self.catalog.is_leaf(field.type_ref()))
            .collect()
    }

    /// Names of every leaf field of the type named by `type_ref`, or, if it
    /// has none, the names of all of its fields.
    pub fn default_leaf_fields(&self, type_ref: &TypeRef) -> Vec<&'catalog str> {
        let leaves = self.leaf_fields(type_ref);
        if !leaves.is_empty() {
            return leaves.into_iter().map(Field::name).collect();
        }
        self.catalog
            .fields_of(type_ref)
            .iter()
            .map(Field::name)
            .collect()
    }
}
