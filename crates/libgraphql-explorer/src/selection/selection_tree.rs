use crate::selection::Selection;
use indexmap::IndexMap;

/// The ordered set of checked fields for one operation.
///
/// A [`Selection`] exists in the tree iff its field is currently checked;
/// unchecking a field discards its sub-field choices and argument values
/// along with it. Iteration follows the order fields were checked in, which
/// is the order they are rendered in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionTree {
    selections: IndexMap<String, Selection>,
}
impl SelectionTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.selections.clear();
    }

    pub fn contains(&self, field_name: &str) -> bool {
        self.selections.contains_key(field_name)
    }

    pub fn get(&self, field_name: &str) -> Option<&Selection> {
        self.selections.get(field_name)
    }

    pub fn get_mut(&mut self, field_name: &str) -> Option<&mut Selection> {
        self.selections.get_mut(field_name)
    }

    /// Append `selection` if its field is not already checked. Returns
    /// `false` (leaving the existing entry untouched) otherwise.
    pub fn insert(&mut self, selection: Selection) -> bool {
        if self.contains(selection.field_name()) {
            return false;
        }
        self.selections.insert(selection.field_name().to_string(), selection);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Selection> {
        self.selections.values()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.selections.keys().map(String::as_str)
    }

    /// Uncheck `field_name`, returning the discarded [`Selection`].
    pub fn remove(&mut self, field_name: &str) -> Option<Selection> {
        self.selections.shift_remove(field_name)
    }
}
impl<'a> std::iter::IntoIterator for &'a SelectionTree {
    type Item = &'a Selection;
    type IntoIter = indexmap::map::Values<'a, String, Selection>;

    fn into_iter(self) -> Self::IntoIter {
        self.selections.values()
    }
}
impl std::iter::FromIterator<Selection> for SelectionTree {
    fn from_iter<T: IntoIterator<Item = Selection>>(iter: T) -> Self {
        let mut tree = Self::new();
        for selection in iter {
            tree.insert(selection);
        }
        tree
    }
}
