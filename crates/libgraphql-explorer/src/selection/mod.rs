mod selection;
mod selection_tree;

pub use selection::Selection;
pub use selection_tree::SelectionTree;
