use indexmap::IndexMap;

/// One checked field: its name, the node sub-fields chosen for it (when it
/// is a connection) and the raw argument values typed for it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    pub(super) arguments: IndexMap<String, String>,
    pub(super) field_name: String,
    pub(super) subfields: Vec<String>,
}
impl Selection {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            arguments: IndexMap::new(),
            field_name: field_name.into(),
            subfields: vec![],
        }
    }

    pub fn with_argument(
        mut self,
        argument_name: impl Into<String>,
        raw_value: impl Into<String>,
    ) -> Self {
        self.set_argument(argument_name, raw_value);
        self
    }

    pub fn with_subfields<S: Into<String>>(
        mut self,
        subfields: impl IntoIterator<Item = S>,
    ) -> Self {
        self.subfields = subfields.into_iter().map(Into::into).collect();
        self
    }

    /// Raw argument values keyed by argument name, in the order they were
    /// first edited. Renderers re-order them by declaration.
    pub fn arguments(&self) -> &IndexMap<String, String> {
        &self.arguments
    }

    pub fn field_name(&self) -> &str {
        self.field_name.as_str()
    }

    pub fn set_argument(
        &mut self,
        argument_name: impl Into<String>,
        raw_value: impl Into<String>,
    ) {
        self.arguments.insert(argument_name.into(), raw_value.into());
    }

    /// Chosen connection sub-fields, in the order they were checked.
    pub fn subfields(&self) -> &[String] {
        self.subfields.as_slice()
    }

    /// Check `subfield` if it is unchecked, uncheck it otherwise. Returns
    /// whether it is checked afterwards.
    pub fn toggle_subfield(&mut self, subfield: &str) -> bool {
        if let Some(pos) = self.subfields.iter().position(|name| name == subfield) {
            self.subfields.remove(pos);
            false
        } else {
            self.subfields.push(subfield.to_string());
            true
        }
    }
}
