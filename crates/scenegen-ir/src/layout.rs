//! Auto-layout descriptors.
//!
//! Provides the flow-layout description of a container (direction,
//! alignment, spacing, padding) and the per-child layout flags. These are
//! target-agnostic; each serializer maps them onto its own primitives.

use serde::{Deserialize, Serialize};

/// Flow direction of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    /// Children are absolutely positioned
    #[default]
    None,
    /// Left to right
    Horizontal,
    /// Top to bottom
    Vertical,
    /// Left to right, wrapping onto new rows
    Wrap,
}

impl LayoutMode {
    pub fn is_auto(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Whether the main axis runs horizontally.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Self::Horizontal | Self::Wrap)
    }
}

/// How a container sizes itself along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SizingMode {
    #[default]
    Fixed,
    /// Hug contents
    Auto,
}

/// Distribution of children on the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimaryAxisAlign {
    #[default]
    Min,
    Center,
    Max,
    SpaceBetween,
}

/// Alignment of children on the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAxisAlign {
    #[default]
    Min,
    Center,
    Max,
    Baseline,
}

/// Padding on all sides.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    /// Create uniform padding.
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }

    pub fn is_uniform(&self) -> bool {
        self.top == self.right && self.right == self.bottom && self.bottom == self.left
    }
}

/// Auto-layout configuration of a frame-like node.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    pub mode: LayoutMode,
    pub primary_sizing: SizingMode,
    pub counter_sizing: SizingMode,
    pub primary_align: PrimaryAxisAlign,
    pub counter_align: CounterAxisAlign,
    /// Gap between children on the main axis
    pub item_spacing: f64,
    /// Gap between wrapped rows
    pub counter_spacing: f64,
    pub padding: Padding,
}

/// Cross-axis behavior of a child inside an auto-layout parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChildAlign {
    #[default]
    Inherit,
    Stretch,
}

/// Whether a child participates in its parent's flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Positioning {
    #[default]
    Auto,
    Absolute,
}

/// Layout flags a node carries as a child of an auto-layout container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChildLayout {
    /// Flex grow factor (0 = don't grow)
    pub grow: f64,
    pub align: ChildAlign,
    pub positioning: Positioning,
}
