/// How a field participates in a selection set.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FieldClass {
    /// An object exposing the `edges`/`nodes` pagination shape.
    Connection,

    /// A `SCALAR` or `ENUM` field; never carries a sub-selection.
    Leaf,

    /// Any other composite field.
    Object,
}
impl FieldClass {
    pub fn name(&self) -> &str {
        match self {
            Self::Connection => "connection",
            Self::Leaf => "leaf",
            Self::Object => "object",
        }
    }
}
impl std::fmt::Display for FieldClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
