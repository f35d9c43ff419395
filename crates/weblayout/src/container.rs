//! The layout container: an ordered set of child ids arranged under one root
//! node.

use std::collections::HashMap;

use crate::{
    error::Result,
    id::IdFactory,
    layout::{ALIGN_SELF, Alignment, BOX_SIZING, LayoutType},
    mount::Mountable,
    options::ContainerOptions,
    tree::VisualTree,
};

/// Arranges externally-owned nodes under a root node it owns.
///
/// Children are held by id and resolved through the tree on every use; a
/// child whose node has been destroyed elsewhere is skipped, never an error.
/// Mutators change the model, and [`apply`](Self::apply) re-derives the
/// whole arrangement from it.
#[derive(Debug)]
pub struct LayoutContainer<T: VisualTree> {
    /// Stable identifier, also the root node's `id` attribute.
    id: String,
    /// Root node owned by this container.
    root: T::Handle,
    /// Arrangement strategy.
    layout_type: LayoutType,
    /// Gap between children, in pixels.
    spacing: u32,
    /// Child ids in render order.
    children: Vec<String>,
    /// Alignment per child. Keys are always members of `children`.
    alignment: HashMap<String, Alignment>,
}

impl<T: VisualTree> LayoutContainer<T> {
    /// Create a container with default options.
    ///
    /// A non-empty `explicit_id` naming a connected node adopts that node as
    /// the root. Otherwise a root is created under the document root, named
    /// `explicit_id` or, if that is absent or empty, the next id from `ids`.
    pub fn create(tree: &mut T, ids: &mut IdFactory, explicit_id: Option<&str>) -> Result<Self> {
        Self::create_with(tree, ids, explicit_id, &ContainerOptions::default())
    }

    /// Create a container with explicit options.
    pub fn create_with(
        tree: &mut T,
        ids: &mut IdFactory,
        explicit_id: Option<&str>,
        options: &ContainerOptions,
    ) -> Result<Self> {
        let explicit_id = explicit_id.filter(|id| !id.is_empty());
        let adopted = explicit_id.and_then(|id| tree.find_node_by_id(id));

        let (id, root) = match (explicit_id, adopted) {
            (Some(id), Some(root)) => {
                tracing::debug!(container = id, "adopting existing root node");
                (id.to_string(), root)
            }
            (explicit, _) => {
                let id = explicit.map_or_else(|| ids.next_id(), str::to_string);
                let root = tree.create_node(&options.tag)?;
                tree.set_attribute(&root, "id", &id)?;
                let body = tree.document_root();
                tree.append_child(&body, &root)?;
                tracing::debug!(container = %id, "created root node");
                (id, root)
            }
        };
        tree.set_style_property(&root, BOX_SIZING, &options.box_sizing)?;

        Ok(Self {
            id,
            root,
            layout_type: LayoutType::default(),
            spacing: 0,
            children: Vec::new(),
            alignment: HashMap::new(),
        })
    }

    /// Return the container's identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Return the root node handle.
    pub fn root(&self) -> &T::Handle {
        &self.root
    }

    /// Return the arrangement strategy.
    pub fn layout_type(&self) -> LayoutType {
        self.layout_type
    }

    /// Return the spacing in pixels.
    pub fn spacing(&self) -> u32 {
        self.spacing
    }

    /// Return the child ids in render order.
    pub fn children(&self) -> &[String] {
        &self.children
    }

    /// Return the number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Return true if the container has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Return true if `child_id` is a child of this container.
    pub fn contains(&self, child_id: &str) -> bool {
        self.alignment.contains_key(child_id)
    }

    /// Return the alignment recorded for a child.
    pub fn alignment_of(&self, child_id: &str) -> Option<Alignment> {
        self.alignment.get(child_id).copied()
    }

    /// Iterate over recorded alignments, in no particular order.
    pub fn alignments(&self) -> impl Iterator<Item = (&str, Alignment)> + '_ {
        self.alignment.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Set the arrangement strategy. Takes effect on the next apply.
    pub fn set_layout_type(&mut self, layout_type: LayoutType) {
        self.layout_type = layout_type;
    }

    /// Set the spacing between children. Takes effect on the next apply.
    ///
    /// # Panics
    ///
    /// Panics if `px` is negative.
    pub fn set_spacing(&mut self, px: i32) {
        assert!(px >= 0, "spacing must be non-negative, got {px}");
        self.spacing = px.unsigned_abs();
    }

    /// Add a child by id and attach its node under the root.
    ///
    /// Returns `Ok(true)` if the child was added or was already present, and
    /// `Ok(false)` if no node with that id exists; in both of the latter
    /// cases nothing changes.
    ///
    /// # Panics
    ///
    /// Panics if `child_id` is empty.
    pub fn add_child(&mut self, tree: &mut T, child_id: &str, align: Alignment) -> Result<bool> {
        assert!(!child_id.is_empty(), "child id must not be empty");
        if self.contains(child_id) {
            return Ok(true);
        }
        let Some(node) = tree.find_node_by_id(child_id) else {
            tracing::debug!(container = %self.id, child = child_id, "no node for child");
            return Ok(false);
        };
        tree.append_child(&self.root, &node)?;
        self.children.push(child_id.to_string());
        self.alignment.insert(child_id.to_string(), align);
        tracing::trace!(container = %self.id, child = child_id, "added child");
        Ok(true)
    }

    /// Remove a child by id and detach its node from wherever it is.
    ///
    /// Returns `Ok(false)` if `child_id` is not a child. A child whose node
    /// is missing or already detached is still removed from the model.
    ///
    /// # Panics
    ///
    /// Panics if `child_id` is empty.
    pub fn remove_child(&mut self, tree: &mut T, child_id: &str) -> Result<bool> {
        assert!(!child_id.is_empty(), "child id must not be empty");
        if self.alignment.remove(child_id).is_none() {
            return Ok(false);
        }
        self.children.retain(|c| c != child_id);
        if let Some(node) = tree.find_node_by_id(child_id) {
            tree.detach(&node)?;
        }
        tracing::trace!(container = %self.id, child = child_id, "removed child");
        Ok(true)
    }

    /// Change a child's alignment. Ignored if `child_id` is not a child.
    ///
    /// # Panics
    ///
    /// Panics if `child_id` is empty.
    pub fn set_alignment(&mut self, child_id: &str, align: Alignment) {
        assert!(!child_id.is_empty(), "child id must not be empty");
        if let Some(a) = self.alignment.get_mut(child_id) {
            *a = align;
        }
    }

    /// Write the arrangement to the tree.
    ///
    /// Sets every container style property from the layout type and spacing,
    /// then re-appends each resolvable child in order and sets its alignment.
    /// After this the resolvable children are the root's last children, in
    /// model order. Calling it again without changes is a no-op.
    pub fn apply(&self, tree: &mut T) -> Result<()> {
        for (property, value) in self.layout_type.container_style(self.spacing) {
            tree.set_style_property(&self.root, property, &value)?;
        }

        for child_id in &self.children {
            let Some(node) = tree.find_node_by_id(child_id) else {
                tracing::debug!(container = %self.id, child = %child_id, "skipping missing child");
                continue;
            };
            tree.append_child(&self.root, &node)?;
            if let Some(align) = self.alignment.get(child_id) {
                tree.set_style_property(&node, ALIGN_SELF, align.css_value())?;
            }
        }
        Ok(())
    }

    /// Remove every node under the root and forget all children.
    pub fn clear(&mut self, tree: &mut T) -> Result<()> {
        tree.clear_children(&self.root)?;
        self.children.clear();
        self.alignment.clear();
        Ok(())
    }

    /// Detach the root from its parent and consume the container.
    pub fn teardown(self, tree: &mut T) -> Result<()> {
        tree.detach(&self.root)?;
        Ok(())
    }
}

impl<T: VisualTree> Mountable<T> for LayoutContainer<T> {
    fn id(&self) -> &str {
        &self.id
    }

    fn unmount(&mut self, tree: &mut T) -> Result<()> {
        tree.detach(&self.root)?;
        Ok(())
    }

    fn sync_from_model(&mut self, tree: &mut T) -> Result<()> {
        self.apply(tree)
    }
}
