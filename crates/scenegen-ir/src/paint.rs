//! Colors and paints (fills and strokes).

use serde::{Deserialize, Serialize};

/// An sRGB color with 8-bit channels and a unit alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub a: f64,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create from unit-float channels as the host reports them.
    ///
    /// Channels are clamped to `[0, 1]` and rounded to the nearest 8-bit value.
    pub fn from_unit(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: unit_to_u8(r),
            g: unit_to_u8(g),
            b: unit_to_u8(b),
            a: clamp_unit(a),
        }
    }

    /// This color with its alpha multiplied by `opacity`.
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self {
            a: clamp_unit(self.a * opacity),
            ..self
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

fn unit_to_u8(v: f64) -> u8 {
    (clamp_unit(v) * 255.0).round() as u8
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_finite() {
        v.clamp(0.0, 1.0)
    } else {
        1.0
    }
}

/// A 2x3 affine transform `[[a, c, tx], [b, d, ty]]`, stored row-major.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform(pub [[f64; 3]; 2]);

impl Transform {
    pub const IDENTITY: Self = Self([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);

    /// First entry of the first row.
    pub fn a(&self) -> f64 {
        self.0[0][0]
    }

    /// Second entry of the first row.
    pub fn b(&self) -> f64 {
        self.0[0][1]
    }
}

/// A color stop on a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    /// Position along the gradient in `[0, 1]`.
    pub position: f64,
    pub color: Color,
}

/// Gradient geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GradientKind {
    Linear,
    Radial,
    Angular,
    Diamond,
}

/// A gradient paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub kind: GradientKind,
    pub stops: Vec<ColorStop>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<Transform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    pub visible: bool,
}

/// How an image fills its node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScaleMode {
    #[default]
    Fill,
    Fit,
    Crop,
    Tile,
}

/// An image paint. Carries an opaque handle, never pixel data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePaint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    pub scale_mode: ScaleMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    pub visible: bool,
}

/// A solid color paint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolidPaint {
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    pub visible: bool,
}

impl SolidPaint {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            opacity: None,
            visible: true,
        }
    }

    /// The paint color with the paint opacity folded into its alpha.
    pub fn effective_color(&self) -> Color {
        self.color.with_opacity(self.opacity.unwrap_or(1.0))
    }
}

/// Paint applied to a node's interior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Fill {
    Solid(SolidPaint),
    Gradient(Gradient),
    Image(ImagePaint),
}

impl Fill {
    pub fn solid(color: Color) -> Self {
        Self::Solid(SolidPaint::new(color))
    }

    pub fn is_visible(&self) -> bool {
        match self {
            Self::Solid(p) => p.visible,
            Self::Gradient(g) => g.visible,
            Self::Image(i) => i.visible,
        }
    }
}

/// Paint applied to a node's outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stroke {
    Solid(SolidPaint),
    Gradient(Gradient),
}

impl Stroke {
    pub fn solid(color: Color) -> Self {
        Self::Solid(SolidPaint::new(color))
    }

    pub fn is_visible(&self) -> bool {
        match self {
            Self::Solid(p) => p.visible,
            Self::Gradient(g) => g.visible,
        }
    }
}

/// Where a stroke sits relative to the node outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrokeAlign {
    #[default]
    Inside,
    Center,
    Outside,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_unit() {
        let c = Color::from_unit(1.0, 0.5, 0.0, 0.25);
        assert_eq!((c.r, c.g, c.b), (255, 128, 0));
        assert_eq!(c.a, 0.25);

        let clamped = Color::from_unit(2.0, -1.0, f64::NAN, 5.0);
        assert_eq!((clamped.r, clamped.g, clamped.b), (255, 0, 255));
        assert_eq!(clamped.a, 1.0);
    }

    #[test]
    fn test_effective_color() {
        let paint = SolidPaint {
            color: Color::rgba(10, 20, 30, 0.5),
            opacity: Some(0.5),
            visible: true,
        };
        assert_eq!(paint.effective_color().a, 0.25);
    }

    #[test]
    fn test_fill_tagging() {
        let json = serde_json::to_value(Fill::solid(Color::WHITE)).unwrap();
        assert_eq!(json["type"], "SOLID");
        assert_eq!(json["color"]["r"], 255);
    }
}
