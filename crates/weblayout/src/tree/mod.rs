//! The visual-tree capability consumed by containers and widgets.

use std::fmt::Debug;

use crate::error::Result;

/// Browser DOM adapter.
#[cfg(feature = "web")]
pub mod dom;
/// Debug dump of a memory tree.
pub mod dump;
/// Arena-backed in-memory tree.
pub mod memory;

#[cfg(feature = "web")]
pub use dom::DomTree;
pub use memory::{MemoryTree, NodeId};

/// Tag used for nodes created by containers and widgets.
pub const DEFAULT_TAG: &str = "div";

/// A host hierarchy of addressable visual nodes.
///
/// Implementations follow DOM semantics: appending a node that already has a
/// parent moves it, lookup by id only finds nodes connected to the document
/// root, and assigning an empty style value removes the property.
pub trait VisualTree {
    /// Opaque reference to one node.
    type Handle: Clone + PartialEq + Debug;

    /// The document root, used for top-level attachment.
    fn document_root(&self) -> Self::Handle;

    /// Create a detached node with the given tag.
    fn create_node(&mut self, tag: &str) -> Result<Self::Handle>;

    /// Find a connected node by its `id` attribute.
    fn find_node_by_id(&self, id: &str) -> Option<Self::Handle>;

    /// Append `child` as the last child of `parent`, moving it if it is
    /// already parented.
    fn append_child(&mut self, parent: &Self::Handle, child: &Self::Handle) -> Result<()>;

    /// Remove `child` from `parent`. Fails if `child` is not a child of
    /// `parent`.
    fn remove_child(&mut self, parent: &Self::Handle, child: &Self::Handle) -> Result<()>;

    /// Return the parent of a node, if it has one.
    fn parent_of(&self, node: &Self::Handle) -> Option<Self::Handle>;

    /// Set a style property. An empty value removes it.
    fn set_style_property(
        &mut self,
        node: &Self::Handle,
        property: &str,
        value: &str,
    ) -> Result<()>;

    /// Set an attribute.
    fn set_attribute(&mut self, node: &Self::Handle, name: &str, value: &str) -> Result<()>;

    /// Replace the node's text content.
    fn set_text_content(&mut self, node: &Self::Handle, text: &str) -> Result<()>;

    /// Remove every child of a node.
    fn clear_children(&mut self, node: &Self::Handle) -> Result<()>;

    /// Detach a node from its parent. Returns false if it had none.
    fn detach(&mut self, node: &Self::Handle) -> Result<bool> {
        match self.parent_of(node) {
            Some(parent) => {
                self.remove_child(&parent, node)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
