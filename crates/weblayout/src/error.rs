use std::{io, result::Result as StdResult};

use thiserror::Error;

/// Result type for weblayout operations.
pub type Result<T> = StdResult<T, Error>;

/// Failures reported by a visual tree.
///
/// Conditions the layout model tolerates (a duplicate add, removing an
/// unknown child, a child whose node has vanished) are never reported through
/// this type.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    #[error("node not found: {0}")]
    /// A handle no longer refers to a live node.
    NodeNotFound(String),
    #[error("hierarchy: {0}")]
    /// The operation would make a node its own ancestor.
    Hierarchy(String),
    #[error("not a child: {0}")]
    /// A removal named a parent that does not hold the node.
    NotAChild(String),
    #[error("host: {0}")]
    /// The host environment rejected the operation.
    Host(String),
    #[error("internal: {0}")]
    /// Internal error.
    Internal(String),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Internal(e.to_string())
    }
}
