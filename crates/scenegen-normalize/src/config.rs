//! Normalizer configuration.

use scenegen_ir::{TextStyle, MAX_CHILDREN, MAX_DEPTH};

/// Bounds and defaults applied during normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeConfig {
    /// Maximum tree depth in levels (root = 1).
    pub max_depth: usize,
    /// Maximum direct children kept per container.
    pub max_children: usize,
    /// Font family used when a text node does not report one.
    pub default_font_family: String,
    /// Font size used when a text node does not report one.
    pub default_font_size: f64,
    /// Font weight used when neither a weight nor a style name is reported.
    pub default_font_weight: u16,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            max_children: MAX_CHILDREN,
            default_font_family: TextStyle::DEFAULT_FONT_FAMILY.to_string(),
            default_font_size: TextStyle::DEFAULT_FONT_SIZE,
            default_font_weight: TextStyle::DEFAULT_FONT_WEIGHT,
        }
    }
}

impl NormalizeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the depth bound. Values below 1 are raised to 1.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth.max(1);
        self
    }

    /// Set the per-container child bound.
    pub fn with_max_children(mut self, count: usize) -> Self {
        self.max_children = count;
        self
    }

    /// Set the fallback font family.
    pub fn with_default_font(mut self, family: impl Into<String>) -> Self {
        self.default_font_family = family.into();
        self
    }
}
