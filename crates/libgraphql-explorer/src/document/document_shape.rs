/// How argument values are carried by a built document.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DocumentShape {
    /// `query { op(a: 5) { ... } }` with every value embedded as a GraphQL
    /// literal and no `variables` object.
    InlineLiterals,

    /// `query($a: Int) { op(a: $a) { ... } }` with the values sent
    /// separately as a JSON `variables` object.
    #[default]
    Variables,
}
