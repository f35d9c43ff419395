use serde::Deserialize;

use crate::tree::DEFAULT_TAG;

/// Construction options for a layout container.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContainerOptions {
    /// Tag used when a root node has to be created.
    pub tag: String,
    /// Value assigned to the root's `box-sizing` property.
    pub box_sizing: String,
}

impl Default for ContainerOptions {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_string(),
            box_sizing: "border-box".to_string(),
        }
    }
}

impl ContainerOptions {
    /// Override the tag used for created roots.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }
}
