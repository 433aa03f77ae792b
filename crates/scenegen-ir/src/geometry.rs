//! Geometry, corner radius and other per-node value types.

use serde::{Deserialize, Serialize};

/// Position and size of a node, relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation in degrees, counter-clockwise as reported by the host.
    pub rotation: f64,
}

impl Geometry {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height, rotation: 0.0 }
    }

    /// Geometry of the given size at the origin.
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }
}

/// Corner rounding, either uniform or per corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CornerRadius {
    Uniform {
        radius: f64,
    },
    PerCorner {
        top_left: f64,
        top_right: f64,
        bottom_right: f64,
        bottom_left: f64,
    },
}

impl CornerRadius {
    pub const NONE: Self = Self::Uniform { radius: 0.0 };

    /// Build a radius from four corners, collapsing to `Uniform` when they match.
    pub fn from_corners(top_left: f64, top_right: f64, bottom_right: f64, bottom_left: f64) -> Self {
        if top_left == top_right && top_right == bottom_right && bottom_right == bottom_left {
            Self::Uniform { radius: top_left }
        } else {
            Self::PerCorner {
                top_left,
                top_right,
                bottom_right,
                bottom_left,
            }
        }
    }

    /// Corners in CSS order: top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [f64; 4] {
        match *self {
            Self::Uniform { radius } => [radius; 4],
            Self::PerCorner {
                top_left,
                top_right,
                bottom_right,
                bottom_left,
            } => [top_left, top_right, bottom_right, bottom_left],
        }
    }

    /// The single radius when all four corners match.
    pub fn uniform(&self) -> Option<f64> {
        let [tl, tr, br, bl] = self.corners();
        (tl == tr && tr == br && br == bl).then_some(tl)
    }

    pub fn is_zero(&self) -> bool {
        self.corners().iter().all(|r| *r == 0.0)
    }
}

impl Default for CornerRadius {
    fn default() -> Self {
        Self::NONE
    }
}

/// How a node reacts when its parent is resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConstraintKind {
    #[default]
    Min,
    Center,
    Max,
    Stretch,
    Scale,
}

/// Horizontal and vertical resize constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Constraints {
    pub horizontal: ConstraintKind,
    pub vertical: ConstraintKind,
}

/// Layer blend mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlendMode {
    #[default]
    PassThrough,
    Normal,
    Darken,
    Multiply,
    ColorBurn,
    Lighten,
    Screen,
    ColorDodge,
    Overlay,
    SoftLight,
    HardLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
}

impl BlendMode {
    /// Parse the host's blend mode name.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "PASS_THROUGH" => Self::PassThrough,
            "NORMAL" => Self::Normal,
            "DARKEN" => Self::Darken,
            "MULTIPLY" => Self::Multiply,
            "COLOR_BURN" | "LINEAR_BURN" => Self::ColorBurn,
            "LIGHTEN" => Self::Lighten,
            "SCREEN" => Self::Screen,
            "COLOR_DODGE" | "LINEAR_DODGE" => Self::ColorDodge,
            "OVERLAY" => Self::Overlay,
            "SOFT_LIGHT" => Self::SoftLight,
            "HARD_LIGHT" => Self::HardLight,
            "DIFFERENCE" => Self::Difference,
            "EXCLUSION" => Self::Exclusion,
            "HUE" => Self::Hue,
            "SATURATION" => Self::Saturation,
            "COLOR" => Self::Color,
            "LUMINOSITY" => Self::Luminosity,
            _ => return None,
        })
    }

    /// Whether the mode composites like plain source-over.
    pub fn is_normal(&self) -> bool {
        matches!(self, Self::PassThrough | Self::Normal)
    }
}

/// Image format of an export preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExportFormat {
    #[default]
    Png,
    Jpg,
    Svg,
    Pdf,
}

/// An export preset attached to a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSetting {
    pub format: ExportFormat,
    pub suffix: String,
    pub scale: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_radius_collapse() {
        assert_eq!(
            CornerRadius::from_corners(8.0, 8.0, 8.0, 8.0),
            CornerRadius::Uniform { radius: 8.0 }
        );
        let mixed = CornerRadius::from_corners(8.0, 8.0, 0.0, 0.0);
        assert!(matches!(mixed, CornerRadius::PerCorner { .. }));
        assert_eq!(mixed.uniform(), None);
        assert_eq!(mixed.corners(), [8.0, 8.0, 0.0, 0.0]);
    }

    #[test]
    fn test_blend_mode_names() {
        assert_eq!(BlendMode::from_name("MULTIPLY"), Some(BlendMode::Multiply));
        assert_eq!(BlendMode::from_name("nope"), None);
        assert!(BlendMode::PassThrough.is_normal());
    }
}
