//! Text style descriptor.

use serde::{Deserialize, Serialize};

/// Line height of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineHeight {
    #[default]
    Auto,
    Pixels(f64),
    Percent(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignHorizontal {
    #[default]
    Left,
    Center,
    Right,
    Justified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignVertical {
    #[default]
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
    Strikethrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextCase {
    #[default]
    Original,
    Upper,
    Lower,
    Title,
}

/// Fully-populated text style. Every field has a value after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_family: String,
    /// Numeric weight, 100 to 900.
    pub font_weight: u16,
    pub font_size: f64,
    pub italic: bool,
    pub line_height: LineHeight,
    /// Letter spacing in pixels.
    pub letter_spacing: f64,
    pub align_horizontal: TextAlignHorizontal,
    pub align_vertical: TextAlignVertical,
    pub decoration: TextDecoration,
    pub case: TextCase,
}

impl TextStyle {
    pub const DEFAULT_FONT_FAMILY: &'static str = "Inter";
    pub const DEFAULT_FONT_SIZE: f64 = 16.0;
    pub const DEFAULT_FONT_WEIGHT: u16 = 400;

    /// Line height in pixels, if it is not `Auto`.
    pub fn line_height_px(&self) -> Option<f64> {
        match self.line_height {
            LineHeight::Auto => None,
            LineHeight::Pixels(px) => Some(px),
            LineHeight::Percent(pct) => Some(self.font_size * pct / 100.0),
        }
    }

    pub fn is_bold(&self) -> bool {
        self.font_weight >= 600
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: Self::DEFAULT_FONT_FAMILY.to_string(),
            font_weight: Self::DEFAULT_FONT_WEIGHT,
            font_size: Self::DEFAULT_FONT_SIZE,
            italic: false,
            line_height: LineHeight::Auto,
            letter_spacing: 0.0,
            align_horizontal: TextAlignHorizontal::Left,
            align_vertical: TextAlignVertical::Top,
            decoration: TextDecoration::None,
            case: TextCase::Original,
        }
    }
}

/// Map a host font style name ("Semi Bold Italic", "Black", ...) to a numeric weight.
pub fn weight_from_style_name(style: &str) -> Option<u16> {
    let lower = style.to_ascii_lowercase().replace(['-', '_', ' '], "");
    let table: [(&str, u16); 12] = [
        ("extralight", 200),
        ("ultralight", 200),
        ("semibold", 600),
        ("demibold", 600),
        ("extrabold", 800),
        ("ultrabold", 800),
        ("thin", 100),
        ("light", 300),
        ("medium", 500),
        ("bold", 700),
        ("black", 900),
        ("heavy", 900),
    ];
    if let Some((_, weight)) = table.iter().find(|(key, _)| lower.contains(key)) {
        return Some(*weight);
    }
    if lower.contains("regular") || lower.contains("normal") || lower.contains("book") {
        return Some(400);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_height_px() {
        let mut style = TextStyle {
            font_size: 20.0,
            ..Default::default()
        };
        assert_eq!(style.line_height_px(), None);
        style.line_height = LineHeight::Percent(150.0);
        assert_eq!(style.line_height_px(), Some(30.0));
    }

    #[test]
    fn test_weight_from_style_name() {
        assert_eq!(weight_from_style_name("Semi Bold Italic"), Some(600));
        assert_eq!(weight_from_style_name("Bold"), Some(700));
        assert_eq!(weight_from_style_name("ExtraBold"), Some(800));
        assert_eq!(weight_from_style_name("Regular"), Some(400));
        assert_eq!(weight_from_style_name("Italic"), None);
    }
}
