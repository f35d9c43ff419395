use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use super::VisualTree;
use crate::error::{Error, Result};

/// Convert a thrown JavaScript value into a host error.
fn host_error(value: JsValue) -> Error {
    Error::Host(format!("{value:?}"))
}

/// The browser document, seen as a visual tree.
pub struct DomTree {
    /// Document used for creation and lookup.
    document: Document,
    /// Top-level attachment point.
    body: Element,
}

impl DomTree {
    /// Bind to the current window's document.
    pub fn new() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| Error::Host("no document".into()))?;
        let body = document
            .body()
            .ok_or_else(|| Error::Host("document has no body".into()))?;
        Ok(Self {
            document,
            body: body.into(),
        })
    }
}

impl VisualTree for DomTree {
    type Handle = Element;

    fn document_root(&self) -> Element {
        self.body.clone()
    }

    fn create_node(&mut self, tag: &str) -> Result<Element> {
        self.document.create_element(tag).map_err(host_error)
    }

    fn find_node_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn append_child(&mut self, parent: &Element, child: &Element) -> Result<()> {
        parent.append_child(child).map(|_| ()).map_err(host_error)
    }

    fn remove_child(&mut self, parent: &Element, child: &Element) -> Result<()> {
        parent.remove_child(child).map(|_| ()).map_err(host_error)
    }

    fn parent_of(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn set_style_property(&mut self, node: &Element, property: &str, value: &str) -> Result<()> {
        let element = node
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| Error::Host(format!("{} has no inline style", node.tag_name())))?;
        let style = element.style();
        if value.is_empty() {
            style.remove_property(property).map(|_| ()).map_err(host_error)
        } else {
            style.set_property(property, value).map_err(host_error)
        }
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) -> Result<()> {
        node.set_attribute(name, value).map_err(host_error)
    }

    fn set_text_content(&mut self, node: &Element, text: &str) -> Result<()> {
        node.set_text_content(Some(text));
        Ok(())
    }

    fn clear_children(&mut self, node: &Element) -> Result<()> {
        node.set_inner_html("");
        Ok(())
    }
}
