use std::{
    collections::{BTreeMap, HashMap},
    mem,
};

use slotmap::{SlotMap, new_key_type};

use super::{VisualTree, dump};
use crate::error::{Error, Result};

new_key_type! {
    /// Opaque identifier for a node stored in a [`MemoryTree`].
    pub struct NodeId;
}

/// Tag of the document root node.
const BODY_TAG: &str = "body";

/// Node data stored in the arena.
#[derive(Debug, Clone)]
pub struct Node {
    /// Element tag.
    pub(crate) tag: String,
    /// Parent in the arena tree.
    pub(crate) parent: Option<NodeId>,
    /// Children in the arena tree.
    pub(crate) children: Vec<NodeId>,
    /// Attributes, ordered by name.
    pub(crate) attributes: BTreeMap<String, String>,
    /// Style properties, ordered by name.
    pub(crate) style: BTreeMap<String, String>,
    /// Text content, if any was assigned.
    pub(crate) text: Option<String>,
}

impl Node {
    /// Construct a detached node.
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            parent: None,
            children: Vec::new(),
            attributes: BTreeMap::new(),
            style: BTreeMap::new(),
            text: None,
        }
    }

    /// Return the element tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Return the node's parent, if any.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Return the node's children.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Return the `id` attribute, if set.
    pub fn element_id(&self) -> Option<&str> {
        self.attributes.get("id").map(String::as_str)
    }

    /// Return the style map.
    pub fn style(&self) -> &BTreeMap<String, String> {
        &self.style
    }

    /// Return the text content, if set.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// An in-memory visual tree with DOM-like semantics.
///
/// Nodes live in a slot arena; handles to destroyed nodes become stale and
/// every operation on them fails with [`Error::NodeNotFound`].
#[derive(Debug, Clone)]
pub struct MemoryTree {
    /// Node storage arena.
    nodes: SlotMap<NodeId, Node>,
    /// Document root.
    body: NodeId,
    /// Index from `id` attribute to node.
    ids: HashMap<String, NodeId>,
}

impl Default for MemoryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTree {
    /// Create a tree holding only the document root.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let body = nodes.insert(Node::new(BODY_TAG));
        Self {
            nodes,
            body,
            ids: HashMap::new(),
        }
    }

    /// Return the number of live nodes, including the document root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the document root is never removed.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Return a node by handle.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Return true if the handle refers to a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Return the children of a node, or an empty slice for a stale handle.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map(Node::children).unwrap_or_default()
    }

    /// Return the `id` attributes of a node's children, in order. Children
    /// without an id are listed as empty strings.
    pub fn child_ids(&self, id: NodeId) -> Vec<String> {
        self.children_of(id)
            .iter()
            .map(|c| {
                self.nodes
                    .get(*c)
                    .and_then(Node::element_id)
                    .unwrap_or_default()
                    .to_string()
            })
            .collect()
    }

    /// Return a style property of a node.
    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        self.nodes
            .get(id)
            .and_then(|n| n.style.get(property))
            .map(String::as_str)
    }

    /// Return an attribute of a node.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes
            .get(id)
            .and_then(|n| n.attributes.get(name))
            .map(String::as_str)
    }

    /// Return the text content of a node.
    pub fn text_content(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id).and_then(Node::text)
    }

    /// Return true if the node is reachable from the document root.
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.is_inclusive_ancestor(self.body, id)
    }

    /// Destroy a node and its whole subtree, as when the widget owning it is
    /// dropped by the host. Handles into the subtree become stale.
    pub fn destroy(&mut self, id: NodeId) -> Result<()> {
        if id == self.body {
            return Err(Error::Hierarchy("cannot destroy the document root".into()));
        }
        self.detach(&id)?;
        let mut pending = vec![id];
        while let Some(n) = pending.pop() {
            if let Some(node) = self.nodes.remove(n) {
                if let Some(element_id) = node.element_id()
                    && self.ids.get(element_id) == Some(&n)
                {
                    self.ids.remove(element_id);
                }
                pending.extend(node.children);
            }
        }
        Ok(())
    }

    /// Render the subtree under `id` as indented plain text.
    pub fn dump(&self, id: NodeId) -> Result<String> {
        dump::dump(self, id)
    }

    /// Render the whole document as indented plain text.
    pub fn dump_document(&self) -> Result<String> {
        dump::dump(self, self.body)
    }

    /// Borrow a live node or fail.
    fn get(&self, id: NodeId) -> Result<&Node> {
        self.nodes
            .get(id)
            .ok_or_else(|| Error::NodeNotFound(format!("{id:?}")))
    }

    /// Mutably borrow a live node or fail.
    fn get_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| Error::NodeNotFound(format!("{id:?}")))
    }

    /// Return true if `ancestor` is `node` or one of its ancestors.
    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.nodes.get(n).and_then(|node| node.parent);
        }
        false
    }

    /// Unlink a node from its parent's child list.
    fn unlink(&mut self, child: NodeId) -> Result<()> {
        let parent = self.get_mut(child)?.parent.take();
        if let Some(parent) = parent {
            self.get_mut(parent)?.children.retain(|c| *c != child);
        }
        Ok(())
    }
}

impl VisualTree for MemoryTree {
    type Handle = NodeId;

    fn document_root(&self) -> NodeId {
        self.body
    }

    fn create_node(&mut self, tag: &str) -> Result<NodeId> {
        Ok(self.nodes.insert(Node::new(tag)))
    }

    fn find_node_by_id(&self, id: &str) -> Option<NodeId> {
        self.ids
            .get(id)
            .copied()
            .filter(|n| self.is_connected(*n))
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<()> {
        let (parent, child) = (*parent, *child);
        self.get(parent)?;
        self.get(child)?;
        if self.is_inclusive_ancestor(child, parent) {
            return Err(Error::Hierarchy(format!(
                "{child:?} is an ancestor of {parent:?}"
            )));
        }
        self.unlink(child)?;
        self.get_mut(parent)?.children.push(child);
        self.get_mut(child)?.parent = Some(parent);
        Ok(())
    }

    fn remove_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<()> {
        self.get(*parent)?;
        if self.get(*child)?.parent != Some(*parent) {
            return Err(Error::NotAChild(format!("{child:?} of {parent:?}")));
        }
        self.unlink(*child)
    }

    fn parent_of(&self, node: &NodeId) -> Option<NodeId> {
        self.nodes.get(*node).and_then(|n| n.parent)
    }

    fn set_style_property(&mut self, node: &NodeId, property: &str, value: &str) -> Result<()> {
        let node = self.get_mut(*node)?;
        if value.is_empty() {
            node.style.remove(property);
        } else {
            node.style.insert(property.to_string(), value.to_string());
        }
        Ok(())
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) -> Result<()> {
        let id = *node;
        let previous = self
            .get_mut(id)?
            .attributes
            .insert(name.to_string(), value.to_string());
        if name == "id" {
            if let Some(previous) = previous
                && self.ids.get(&previous) == Some(&id)
            {
                self.ids.remove(&previous);
            }
            self.ids.insert(value.to_string(), id);
        }
        Ok(())
    }

    fn set_text_content(&mut self, node: &NodeId, text: &str) -> Result<()> {
        self.get_mut(*node)?.text = Some(text.to_string());
        Ok(())
    }

    fn clear_children(&mut self, node: &NodeId) -> Result<()> {
        let children = mem::take(&mut self.get_mut(*node)?.children);
        for child in children {
            if let Some(c) = self.nodes.get_mut(child) {
                c.parent = None;
            }
        }
        Ok(())
    }
}
