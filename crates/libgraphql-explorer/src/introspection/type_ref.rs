use crate::introspection::TypeKind;

/// A possibly-wrapped reference to an introspected type, as found on a
/// field's `type` or an argument's `type`.
///
/// `LIST` and `NON_NULL` references carry an `ofType` and no `name`; every
/// other kind carries a `name` and no `ofType`. Following `ofType`
/// terminates at the *named type* unless the chain was cut short, either
/// by a malformed schema or because the wrapper nesting was deeper than
/// [`TYPE_REF_DEPTH`](crate::introspection::TYPE_REF_DEPTH).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub(crate) kind: TypeKind,
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) of_type: Option<Box<TypeRef>>,
}
impl TypeRef {
    /// Produce a reference to the named type `name` of the given `kind`.
    pub fn named(kind: TypeKind, name: impl AsRef<str>) -> Self {
        Self {
            kind,
            name: Some(name.as_ref().to_string()),
            of_type: None,
        }
    }

    /// Wrap `inner` in a `LIST` reference.
    pub fn list(inner: TypeRef) -> Self {
        Self {
            kind: TypeKind::List,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    /// Wrap `inner` in a `NON_NULL` reference.
    pub fn non_null(inner: TypeRef) -> Self {
        Self {
            kind: TypeKind::NonNull,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// The name carried directly by this node. Always `None` for wrappers.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn of_type(&self) -> Option<&TypeRef> {
        self.of_type.as_deref()
    }

    /// Follow `ofType` until reaching a node that carries a name.
    ///
    /// Returns `None` only when the chain is malformed (a wrapper with no
    /// `ofType`). Resolving an already-named reference returns its own name.
    pub fn named_type(&self) -> Option<&str> {
        self.innermost().and_then(|type_ref| type_ref.name())
    }

    /// The innermost, named node of this reference chain.
    pub fn innermost(&self) -> Option<&TypeRef> {
        let mut current = self;
        loop {
            if current.name.is_some() {
                return Some(current);
            }
            current = current.of_type.as_deref()?;
        }
    }

    /// Indicates if this reference is wrapped in `NON_NULL` at its outermost
    /// level (i.e. the argument or field is required).
    pub fn is_non_null(&self) -> bool {
        self.kind == TypeKind::NonNull
    }

    /// Number of `LIST`/`NON_NULL` wrappers around the named type.
    pub fn wrapper_depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while current.kind.is_wrapper() {
            depth += 1;
            match current.of_type.as_deref() {
                Some(inner) => current = inner,
                None => break,
            }
        }
        depth
    }

    /// Render this reference in GraphQL type syntax (e.g. `[Int!]!`).
    ///
    /// A malformed wrapper renders its missing inner type as the empty
    /// string.
    pub fn to_graphql_string(&self) -> String {
        self.to_string()
    }
}
impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.kind, self.of_type.as_deref()) {
            (TypeKind::NonNull, Some(inner)) => write!(f, "{inner}!"),
            (TypeKind::NonNull, None) => f.write_str("!"),
            (TypeKind::List, Some(inner)) => write!(f, "[{inner}]"),
            (TypeKind::List, None) => f.write_str("[]"),
            (_, _) => f.write_str(self.name.as_deref().unwrap_or_default()),
        }
    }
}
