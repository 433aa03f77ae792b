//! Color formatting.

use super::units::format_number;
use scenegen_ir::Color;

/// CSS color: `rgb(...)` when opaque, `rgba(...)` otherwise.
pub fn color_to_css(color: &Color) -> String {
    if color.is_opaque() {
        format!("rgb({}, {}, {})", color.r, color.g, color.b)
    } else {
        format!(
            "rgba({}, {}, {}, {})",
            color.r,
            color.g,
            color.b,
            format_number(color.a)
        )
    }
}

/// Hex color: `#rrggbb`, with an alpha byte appended when translucent.
pub fn color_to_hex(color: &Color) -> String {
    if color.is_opaque() {
        format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
    } else {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            color.r,
            color.g,
            color.b,
            alpha_byte(color.a)
        )
    }
}

/// ARGB integer literal as used by Flutter, e.g. `0xFF1A2B3C`.
pub fn color_to_argb(color: &Color) -> String {
    format!(
        "0x{:02X}{:02X}{:02X}{:02X}",
        alpha_byte(color.a),
        color.r,
        color.g,
        color.b
    )
}

/// Alpha in `[0, 1]` scaled to a byte.
pub fn alpha_byte(alpha: f64) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// A channel scaled back to `[0, 1]`.
pub fn unit_channel(channel: u8) -> f64 {
    channel as f64 / 255.0
}
