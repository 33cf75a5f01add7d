/// The coercion target for a raw argument value: one of GraphQL's built-in
/// scalars, or anything else by name.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ScalarKind {
    Boolean,
    /// Custom scalars, enums, input objects, and anything unresolvable.
    Custom(String),
    Float,
    ID,
    Int,
    String,
}
impl ScalarKind {
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "Boolean" => Self::Boolean,
            "Float" => Self::Float,
            "ID" => Self::ID,
            "Int" => Self::Int,
            "String" => Self::String,
            other => Self::Custom(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Boolean => "Boolean",
            Self::Custom(name) => name.as_str(),
            Self::Float => "Float",
            Self::ID => "ID",
            Self::Int => "Int",
            Self::String => "String",
        }
    }
}
impl std::convert::From<&str> for ScalarKind {
    fn from(value: &str) -> Self {
        Self::from_type_name(value)
    }
}
