//! Layout strategies, child alignment, and the style properties they map to.

use serde::{Deserialize, Serialize};

/// Style properties a container writes on its own root node.
///
/// Every apply assigns all of them, so a property the current strategy does
/// not use is reset to the empty string.
pub const CONTAINER_PROPERTIES: [&str; 5] =
    ["position", "display", "flex-direction", "align-items", "gap"];

/// Style property carrying a child's cross-axis alignment.
pub const ALIGN_SELF: &str = "align-self";

/// Style property carrying the box-sizing model of a container root.
pub const BOX_SIZING: &str = "box-sizing";

/// Container-level arrangement strategy.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    /// Block positioning; children place themselves.
    #[default]
    Free,
    /// Flexible row.
    Horizontal,
    /// Flexible column.
    Vertical,
    /// Grid; track templates belong to the children.
    Grid,
}

impl LayoutType {
    /// Return the full container style for this strategy, one value per entry
    /// of [`CONTAINER_PROPERTIES`], in the same order. Empty values remove the
    /// property.
    pub fn container_style(self, spacing: u32) -> [(&'static str, String); 5] {
        let gap = px(spacing);
        let (position, display, direction, align_items, gap) = match self {
            Self::Free => ("relative", "block", "", "", String::new()),
            Self::Horizontal => ("", "flex", "row", "stretch", gap),
            Self::Vertical => ("", "flex", "column", "stretch", gap),
            Self::Grid => ("", "grid", "", "", gap),
        };
        [
            (CONTAINER_PROPERTIES[0], position.to_string()),
            (CONTAINER_PROPERTIES[1], display.to_string()),
            (CONTAINER_PROPERTIES[2], direction.to_string()),
            (CONTAINER_PROPERTIES[3], align_items.to_string()),
            (CONTAINER_PROPERTIES[4], gap),
        ]
    }
}

/// Per-child cross-axis placement.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Align to the start of the cross axis.
    #[default]
    Start,
    /// Center on the cross axis.
    Center,
    /// Align to the end of the cross axis.
    End,
    /// Fill the cross axis.
    Stretch,
}

impl Alignment {
    /// All alignment values.
    pub const ALL: [Self; 4] = [Self::Start, Self::Center, Self::End, Self::Stretch];

    /// The `align-self` value for this alignment.
    pub fn css_value(self) -> &'static str {
        match self {
            Self::Start => "flex-start",
            Self::Center => "center",
            Self::End => "flex-end",
            Self::Stretch => "stretch",
        }
    }
}

/// Format a pixel length.
pub fn px(v: impl Into<i64>) -> String {
    format!("{}px", v.into())
}
