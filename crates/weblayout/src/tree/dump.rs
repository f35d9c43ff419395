use std::io::Write;

use termcolor::{Buffer, Color, ColorSpec, WriteColor};

use super::memory::{MemoryTree, NodeId};
use crate::error::{Error, Result};

/// Traverses a subtree and returns a string showing each node's tag, id,
/// style and text. This is a debug function; the output is stable, so tests
/// compare it directly.
pub fn dump(tree: &MemoryTree, root: NodeId) -> Result<String> {
    let mut buffer = Buffer::no_color();
    dump_node(&mut buffer, tree, root, 0)?;
    Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
}

/// Like [`dump`], with ANSI colors for terminal display.
pub fn dump_ansi(tree: &MemoryTree, root: NodeId) -> Result<String> {
    let mut buffer = Buffer::ansi();
    dump_node(&mut buffer, tree, root, 0)?;
    Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
}

/// Helper to write an indented, colored label followed by a value.
fn write_field(buffer: &mut Buffer, indent: &str, label: &str, value: &str) -> Result<()> {
    write!(buffer, "{indent}  ")?;
    buffer.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(buffer, "{label}")?;
    buffer.reset()?;
    writeln!(buffer, " {value}")?;
    Ok(())
}

/// Walk a node subtree and emit formatted debug output.
fn dump_node(buffer: &mut Buffer, tree: &MemoryTree, node_id: NodeId, level: usize) -> Result<()> {
    let node = tree
        .node(node_id)
        .ok_or_else(|| Error::NodeNotFound(format!("{node_id:?}")))?;

    let indent = "    ".repeat(level);
    write!(buffer, "{indent}")?;
    buffer.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    write!(buffer, "{}", node.tag())?;
    if let Some(id) = node.element_id() {
        write!(buffer, "#{id}")?;
    }
    buffer.reset()?;
    writeln!(buffer)?;

    let attrs: Vec<String> = node
        .attributes
        .iter()
        .filter(|(k, _)| k.as_str() != "id")
        .map(|(k, v)| format!("{k}={v:?}"))
        .collect();
    if !attrs.is_empty() {
        write_field(buffer, &indent, "attrs:", &attrs.join(" "))?;
    }

    if !node.style().is_empty() {
        let style: Vec<String> = node
            .style()
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect();
        write_field(buffer, &indent, "style:", &style.join("; "))?;
    }

    if let Some(text) = node.text() {
        write_field(buffer, &indent, "text:", &format!("{text:?}"))?;
    }

    for child in node.children() {
        dump_node(buffer, tree, *child, level + 1)?;
    }
    Ok(())
}
