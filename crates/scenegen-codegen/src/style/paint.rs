//! Fill and stroke conversion.

use super::color::color_to_css;
use super::units::{deg, percent, px};
use scenegen_ir::{Color, ColorStop, Fill, Gradient, GradientKind, ImagePaint, ScaleMode, Stroke, Transform};

/// Angle used when a gradient carries no transform (top to bottom).
pub const DEFAULT_GRADIENT_ANGLE: f64 = 90.0;

/// Gradient angle in degrees: `atan2(b, a)` of the transform's first row.
pub fn gradient_angle(transform: Option<&Transform>) -> f64 {
    match transform {
        Some(t) => t.b().atan2(t.a()).to_degrees(),
        None => DEFAULT_GRADIENT_ANGLE,
    }
}

/// Start angle for native sweep gradients, which start at 3 o'clock where
/// CSS conic gradients start at 12 o'clock.
pub fn sweep_start_angle(angle: f64) -> f64 {
    angle - 90.0
}

/// Gradient stops with the gradient opacity folded into each color.
pub fn effective_stops(gradient: &Gradient) -> Vec<ColorStop> {
    let opacity = gradient.opacity.unwrap_or(1.0);
    gradient
        .stops
        .iter()
        .map(|stop| ColorStop {
            position: stop.position,
            color: stop.color.with_opacity(opacity),
        })
        .collect()
}

fn css_stops(gradient: &Gradient) -> String {
    effective_stops(gradient)
        .iter()
        .map(|stop| format!("{} {}", color_to_css(&stop.color), percent(stop.position)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// CSS gradient function for `gradient`.
pub fn gradient_to_css(gradient: &Gradient) -> String {
    let angle = gradient_angle(gradient.transform.as_ref());
    let stops = css_stops(gradient);
    match gradient.kind {
        GradientKind::Linear => format!("linear-gradient({}, {})", deg(angle), stops),
        GradientKind::Radial => format!("radial-gradient(circle, {})", stops),
        GradientKind::Angular => format!("conic-gradient(from {}, {})", deg(angle), stops),
        GradientKind::Diamond => format!("radial-gradient(ellipse, {})", stops),
    }
}

/// Path an image reference resolves to in generated code.
pub fn image_path(paint_ref: Option<&str>) -> String {
    match paint_ref {
        Some(r) if !r.is_empty() => format!("assets/{}.png", r),
        _ => "assets/placeholder.png".to_string(),
    }
}

/// CSS `background-size` for an image scale mode.
pub fn background_size(mode: ScaleMode) -> &'static str {
    match mode {
        ScaleMode::Fill | ScaleMode::Crop => "cover",
        ScaleMode::Fit => "contain",
        ScaleMode::Tile => "auto",
    }
}

fn image_to_css(image: &ImagePaint) -> String {
    format!("url(\"{}\")", image_path(image.image_ref.as_deref()))
}

/// CSS background value for one fill, or `None` if it is hidden.
pub fn fill_to_css(fill: &Fill) -> Option<String> {
    if !fill.is_visible() {
        return None;
    }
    Some(match fill {
        Fill::Solid(solid) => color_to_css(&solid.effective_color()),
        Fill::Gradient(gradient) => gradient_to_css(gradient),
        Fill::Image(image) => image_to_css(image),
    })
}

/// CSS `background` for a fill list.
///
/// Fills are listed bottom-up; CSS layers are listed top-down, and only
/// the bottom layer may be a plain color.
pub fn background(fills: &[Fill]) -> Option<String> {
    let visible: Vec<&Fill> = fills.iter().filter(|f| f.is_visible()).collect();
    let last = visible.len().checked_sub(1)?;
    let layers: Vec<String> = visible
        .iter()
        .enumerate()
        .rev()
        .filter_map(|(i, fill)| match fill {
            Fill::Solid(solid) if i != 0 && last > 0 => {
                let color = color_to_css(&solid.effective_color());
                Some(format!("linear-gradient({}, {})", color, color))
            }
            other => fill_to_css(other),
        })
        .collect();
    Some(layers.join(", "))
}

/// Representative flat color of a fill, for targets without gradient support
/// in that position (text color, native borders).
pub fn fill_color(fill: &Fill) -> Option<Color> {
    if !fill.is_visible() {
        return None;
    }
    match fill {
        Fill::Solid(solid) => Some(solid.effective_color()),
        Fill::Gradient(gradient) => effective_stops(gradient).first().map(|s| s.color),
        Fill::Image(_) => None,
    }
}

/// Topmost visible flat color of a fill list.
pub fn primary_color(fills: &[Fill]) -> Option<Color> {
    fills.iter().rev().find_map(fill_color)
}

/// Topmost visible gradient of a fill list.
pub fn primary_gradient(fills: &[Fill]) -> Option<&Gradient> {
    fills.iter().rev().find_map(|fill| match fill {
        Fill::Gradient(g) if g.visible => Some(g),
        _ => None,
    })
}

/// Topmost visible image paint of a fill list.
pub fn primary_image(fills: &[Fill]) -> Option<&ImagePaint> {
    fills.iter().rev().find_map(|fill| match fill {
        Fill::Image(i) if i.visible => Some(i),
        _ => None,
    })
}

/// Flat color of a stroke.
pub fn stroke_color(stroke: &Stroke) -> Option<Color> {
    if !stroke.is_visible() {
        return None;
    }
    match stroke {
        Stroke::Solid(solid) => Some(solid.effective_color()),
        Stroke::Gradient(gradient) => effective_stops(gradient).first().map(|s| s.color),
    }
}

/// CSS `border` shorthand, e.g. `1px solid rgb(0, 0, 0)`.
pub fn stroke_to_border(stroke: &Stroke, weight: f64) -> Option<String> {
    if weight <= 0.0 {
        return None;
    }
    stroke_color(stroke).map(|color| format!("{} solid {}", px(weight), color_to_css(&color)))
}
