//! Leaf widgets that can be arranged by a layout container.

/// Text box widget.
pub mod textbox;

pub use textbox::TextBox;
