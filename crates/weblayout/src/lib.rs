//! weblayout: layout containers over a visual tree.
//!
//! A [`LayoutContainer`] owns one root node and arranges other nodes under
//! it, referring to them only by their `id`. The arrangement strategy, the
//! spacing and per-child alignment are model state; [`LayoutContainer::apply`]
//! writes them to the tree.
//!
//! # Module Organization
//!
//! - [`tree`] - The [`VisualTree`] capability, an in-memory implementation,
//!   and a browser DOM adapter behind the `web` feature
//! - [`container`] - The layout container
//! - [`mount`] - The [`Mountable`] capability shared by containers and widgets
//! - [`widgets`] - Leaf widgets

#![warn(missing_docs)]

pub mod container;
/// Error types.
pub mod error;
/// Identifier generation.
pub mod id;
pub mod layout;
pub mod mount;
/// Container configuration.
pub mod options;
pub mod tree;
pub mod widgets;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use container::LayoutContainer;
pub use error::{Error, Result};
pub use id::IdFactory;
pub use layout::{Alignment, LayoutType};
pub use mount::Mountable;
pub use options::ContainerOptions;
pub use tree::{MemoryTree, NodeId, VisualTree};
pub use widgets::TextBox;
