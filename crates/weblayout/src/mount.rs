//! The capability shared by everything that can be placed in a container.

use crate::{container::LayoutContainer, error::Result, layout::Alignment, tree::VisualTree};

/// An element that owns a root node, identified by a stable id, and can be
/// composed into a [`LayoutContainer`].
///
/// Containers and leaf widgets implement the same capability, so a parent
/// never needs to know the concrete type of what it arranges.
pub trait Mountable<T: VisualTree> {
    /// Stable identifier of the element's root node.
    fn id(&self) -> &str;

    /// Register this element as a child of `parent`.
    ///
    /// Returns the result of [`LayoutContainer::add_child`]: `Ok(false)` if
    /// the element's node cannot be found, for instance because it was
    /// unmounted.
    fn mount(
        &self,
        tree: &mut T,
        parent: &mut LayoutContainer<T>,
        align: Alignment,
    ) -> Result<bool> {
        parent.add_child(tree, self.id(), align)
    }

    /// Detach the element's root node from its parent, if it has one.
    fn unmount(&mut self, tree: &mut T) -> Result<()>;

    /// Push the element's model state to the tree.
    fn sync_from_model(&mut self, tree: &mut T) -> Result<()>;
}
