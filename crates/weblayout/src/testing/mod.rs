//! Fixtures for tests that drive containers against a tree.

use crate::{
    error::Result,
    tree::{DEFAULT_TAG, VisualTree},
};

/// Create a detached node carrying an `id` attribute.
pub fn element<T: VisualTree>(tree: &mut T, id: &str) -> Result<T::Handle> {
    let node = tree.create_node(DEFAULT_TAG)?;
    tree.set_attribute(&node, "id", id)?;
    Ok(node)
}

/// Create one node per id and attach each to the document root, standing in
/// for widgets that live outside any container.
pub fn seed<T: VisualTree>(tree: &mut T, ids: &[&str]) -> Result<Vec<T::Handle>> {
    let body = tree.document_root();
    ids.iter()
        .map(|id| {
            let node = element(tree, id)?;
            tree.append_child(&body, &node)?;
            Ok(node)
        })
        .collect()
}
