/// Which field names mark an object type as a connection.
///
/// GraphQL has no formal notion of a connection; this is a purely
/// structural, name-based test on the field's type.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ConnectionDetection {
    /// The type has a field named `edges`.
    #[default]
    Edges,

    /// The type has a field named either `edges` or `nodes`.
    EdgesOrNodes,
}
impl ConnectionDetection {
    pub fn is_marker_field(&self, field_name: &str) -> bool {
        match self {
            Self::Edges => field_name == "edges",
            Self::EdgesOrNodes => matches!(field_name, "edges" | "nodes"),
        }
    }
}
