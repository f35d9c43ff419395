use crate::{
    error::Result,
    id::IdFactory,
    layout::px,
    mount::Mountable,
    tree::{DEFAULT_TAG, VisualTree},
};

/// Prefix used for generated text box identifiers.
pub const TEXTBOX_PREFIX: &str = "textbox";

/// A block of preformatted text backed by one node it owns.
///
/// Setters change the model only; [`Mountable::sync_from_model`] writes it to
/// the tree.
#[derive(Debug)]
pub struct TextBox<T: VisualTree> {
    /// Stable identifier of the node.
    id: String,
    /// Owned node.
    node: T::Handle,
    /// Text content.
    text: String,
    /// Visibility.
    visible: bool,
    /// Absolute position, if any.
    position: Option<(i32, i32)>,
}

impl<T: VisualTree> TextBox<T> {
    /// Create a text box under the document root and write its initial
    /// state.
    pub fn create(tree: &mut T, ids: &mut IdFactory, text: &str) -> Result<Self> {
        let id = ids.next_id();
        let node = tree.create_node(DEFAULT_TAG)?;
        tree.set_attribute(&node, "id", &id)?;
        tree.set_style_property(&node, "white-space", "pre-wrap")?;
        let mut tb = Self {
            id,
            node,
            text: text.to_string(),
            visible: true,
            position: None,
        };
        tb.sync_from_model(tree)?;
        let body = tree.document_root();
        tree.append_child(&body, &tb.node)?;
        Ok(tb)
    }

    /// Return the owned node.
    pub fn node(&self) -> &T::Handle {
        &self.node
    }

    /// Return the text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Append to the text.
    pub fn append_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Remove all text.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Return true if the text box is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the text box.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide the text box.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Return the absolute position, if set.
    pub fn position(&self) -> Option<(i32, i32)> {
        self.position
    }

    /// Place the text box at an absolute offset within its positioned
    /// ancestor. Used in free layouts.
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.position = Some((x, y));
    }

    /// Return the text box to normal flow.
    pub fn clear_position(&mut self) {
        self.position = None;
    }

    /// Detach the node and consume the text box.
    pub fn teardown(self, tree: &mut T) -> Result<()> {
        tree.detach(&self.node)?;
        Ok(())
    }
}

impl<T: VisualTree> Mountable<T> for TextBox<T> {
    fn id(&self) -> &str {
        &self.id
    }

    fn unmount(&mut self, tree: &mut T) -> Result<()> {
        tree.detach(&self.node)?;
        Ok(())
    }

    fn sync_from_model(&mut self, tree: &mut T) -> Result<()> {
        tree.set_text_content(&self.node, &self.text)?;
        tree.set_style_property(&self.node, "display", if self.visible { "" } else { "none" })?;
        let (position, left, top) = match self.position {
            Some((x, y)) => ("absolute", px(x), px(y)),
            None => ("", String::new(), String::new()),
        };
        tree.set_style_property(&self.node, "position", position)?;
        tree.set_style_property(&self.node, "left", &left)?;
        tree.set_style_property(&self.node, "top", &top)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::MemoryTree;

    fn textbox(tree: &mut MemoryTree, text: &str) -> Result<TextBox<MemoryTree>> {
        TextBox::create(tree, &mut IdFactory::new(TEXTBOX_PREFIX), text)
    }

    #[test]
    fn create_attaches_to_document() -> Result<()> {
        let mut tree = MemoryTree::new();
        let tb = textbox(&mut tree, "Player HP: 100/100")?;
        assert_eq!(tb.id(), "textbox-1");
        assert_eq!(tree.find_node_by_id("textbox-1"), Some(*tb.node()));
        assert_eq!(tree.text_content(*tb.node()), Some("Player HP: 100/100"));
        assert_eq!(tree.style(*tb.node(), "white-space"), Some("pre-wrap"));
        assert_eq!(tree.style(*tb.node(), "display"), None);
        Ok(())
    }

    #[test]
    fn setters_wait_for_sync() -> Result<()> {
        let mut tree = MemoryTree::new();
        let mut tb = textbox(&mut tree, "Battle Log:\n")?;
        tb.append_text("You hit the Bat for 6 damage.\n");
        tb.hide();
        tb.set_position(20, 120);
        assert_eq!(tree.text_content(*tb.node()), Some("Battle Log:\n"));

        tb.sync_from_model(&mut tree)?;
        let node = *tb.node();
        assert_eq!(
            tree.text_content(node),
            Some("Battle Log:\nYou hit the Bat for 6 damage.\n")
        );
        assert_eq!(tree.style(node, "display"), Some("none"));
        assert_eq!(tree.style(node, "position"), Some("absolute"));
        assert_eq!(tree.style(node, "left"), Some("20px"));
        assert_eq!(tree.style(node, "top"), Some("120px"));

        tb.show();
        tb.clear_position();
        tb.clear();
        tb.sync_from_model(&mut tree)?;
        assert_eq!(tree.text_content(node), Some(""));
        assert_eq!(tree.style(node, "display"), None);
        assert_eq!(tree.style(node, "left"), None);
        assert!(tb.is_visible());
        assert_eq!(tb.position(), None);
        Ok(())
    }

    #[test]
    fn unmount_is_repeatable() -> Result<()> {
        let mut tree = MemoryTree::new();
        let mut tb = textbox(&mut tree, "x")?;
        tb.unmount(&mut tree)?;
        tb.unmount(&mut tree)?;
        assert_eq!(tree.parent_of(tb.node()), None);
        tb.teardown(&mut tree)?;
        Ok(())
    }
}
