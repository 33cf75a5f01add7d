/// The `__TypeKind` of an introspected type or type reference.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Enum,
    InputObject,
    Interface,
    List,
    NonNull,
    Object,
    Scalar,
    Union,
}
impl TypeKind {
    /// `SCALAR` and `ENUM` types cannot carry a sub-selection.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Enum | Self::Scalar)
    }

    /// `LIST` and `NON_NULL` only ever appear as wrappers around another
    /// type reference.
    pub fn is_wrapper(&self) -> bool {
        matches!(self, Self::List | Self::NonNull)
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::Interface => "INTERFACE",
            Self::List => "LIST",
            Self::NonNull => "NON_NULL",
            Self::Object => "OBJECT",
            Self::Scalar => "SCALAR",
            Self::Union => "UNION",
        }
    }
}
impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
