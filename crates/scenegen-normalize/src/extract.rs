//! Extraction of IR value objects from host fields.
//!
//! Individual malformed paints, effects or presets are skipped; only
//! structural problems (a paint list that is not a list) surface as errors.

use crate::config::NormalizeConfig;
use crate::error::Result;
use crate::view::SceneView;
use scenegen_ir::{
    weight_from_style_name, BlendMode, Blur, ChildAlign, ChildLayout, Color, ColorStop,
    ConstraintKind, Constraints, CornerRadius, CounterAxisAlign, Effect, ExportFormat,
    ExportSetting, Fill, Geometry, Gradient, GradientKind, ImagePaint, Layout, LayoutMode,
    LineHeight, Offset, Padding, Positioning, PrimaryAxisAlign, ScaleMode, Shadow, SizingMode,
    SolidPaint, Stroke, StrokeAlign, TextAlignHorizontal, TextAlignVertical, TextCase,
    TextDecoration, TextStyle, Transform,
};
use serde_json::Value;

pub(crate) fn geometry(view: &SceneView) -> Geometry {
    Geometry {
        x: view.f64_or("x", 0.0),
        y: view.f64_or("y", 0.0),
        width: view.non_negative_or("width", 0.0),
        height: view.non_negative_or("height", 0.0),
        rotation: view.f64_or("rotation", 0.0),
    }
}

pub(crate) fn opacity(view: &SceneView) -> f64 {
    view.f64_or("opacity", 1.0).clamp(0.0, 1.0)
}

pub(crate) fn blend_mode(view: &SceneView) -> BlendMode {
    view.str("blendMode")
        .and_then(BlendMode::from_name)
        .unwrap_or_default()
}

/// Host colors use unit-float channels; alpha defaults to opaque.
pub(crate) fn read_color(view: &SceneView, default_alpha: f64) -> Color {
    Color::from_unit(
        view.f64_or("r", 0.0),
        view.f64_or("g", 0.0),
        view.f64_or("b", 0.0),
        view.f64_or("a", default_alpha),
    )
}

fn paint_opacity(paint: &SceneView) -> Option<f64> {
    paint.f64("opacity").map(|o| o.clamp(0.0, 1.0))
}

fn solid(paint: &SceneView) -> Option<SolidPaint> {
    let rgba = paint.object("color")?;
    Some(SolidPaint {
        color: read_color(&rgba, 1.0),
        opacity: paint_opacity(paint),
        visible: paint.bool_or("visible", true),
    })
}

fn transform(value: &Value) -> Option<Transform> {
    let rows = value.as_array()?;
    if rows.len() != 2 {
        return None;
    }
    let mut matrix = [[0.0; 3]; 2];
    for (row, out) in rows.iter().zip(matrix.iter_mut()) {
        let cells = row.as_array()?;
        if cells.len() != 3 {
            return None;
        }
        for (cell, slot) in cells.iter().zip(out.iter_mut()) {
            *slot = cell.as_f64().filter(|v| v.is_finite())?;
        }
    }
    Some(Transform(matrix))
}

fn gradient(paint: &SceneView, kind: GradientKind) -> Option<Gradient> {
    let stops: Vec<ColorStop> = paint
        .array_lenient("gradientStops")
        .iter()
        .filter_map(SceneView::try_new)
        .filter_map(|stop| {
            let rgba = stop.object("color")?;
            Some(ColorStop {
                position: stop.f64_or("position", 0.0).clamp(0.0, 1.0),
                color: read_color(&rgba, 1.0),
            })
        })
        .collect();
    if stops.is_empty() {
        return None;
    }
    Some(Gradient {
        kind,
        stops,
        transform: paint.field("gradientTransform").and_then(transform),
        opacity: paint_opacity(paint),
        visible: paint.bool_or("visible", true),
    })
}

fn gradient_kind(kind: &str) -> Option<GradientKind> {
    Some(match kind {
        "GRADIENT_LINEAR" => GradientKind::Linear,
        "GRADIENT_RADIAL" => GradientKind::Radial,
        "GRADIENT_ANGULAR" => GradientKind::Angular,
        "GRADIENT_DIAMOND" => GradientKind::Diamond,
        _ => return None,
    })
}

fn scale_mode(name: Option<&str>) -> ScaleMode {
    match name {
        Some("FIT") => ScaleMode::Fit,
        Some("CROP") => ScaleMode::Crop,
        Some("TILE") => ScaleMode::Tile,
        _ => ScaleMode::Fill,
    }
}

fn fill(value: &Value) -> Option<Fill> {
    let paint = SceneView::try_new(value)?;
    let kind = paint.str("type")?;
    if kind == "SOLID" {
        return solid(&paint).map(Fill::Solid);
    }
    if kind == "IMAGE" {
        return Some(Fill::Image(ImagePaint {
            image_ref: paint.str("imageHash").map(str::to_string),
            scale_mode: scale_mode(paint.str("scaleMode")),
            opacity: paint_opacity(&paint),
            visible: paint.bool_or("visible", true),
        }));
    }
    gradient(&paint, gradient_kind(kind)?).map(Fill::Gradient)
}

pub(crate) fn fills(view: &SceneView) -> Result<Vec<Fill>> {
    Ok(view.array("fills")?.iter().filter_map(fill).collect())
}

fn stroke(value: &Value) -> Option<Stroke> {
    let paint = SceneView::try_new(value)?;
    match paint.str("type")? {
        "SOLID" => solid(&paint).map(Stroke::Solid),
        kind => gradient(&paint, gradient_kind(kind)?).map(Stroke::Gradient),
    }
}

pub(crate) fn strokes(view: &SceneView) -> Result<Vec<Stroke>> {
    Ok(view.array("strokes")?.iter().filter_map(stroke).collect())
}

pub(crate) fn stroke_align(view: &SceneView) -> StrokeAlign {
    match view.str("strokeAlign") {
        Some("CENTER") => StrokeAlign::Center,
        Some("OUTSIDE") => StrokeAlign::Outside,
        _ => StrokeAlign::Inside,
    }
}

fn effect(value: &Value) -> Option<Effect> {
    let effect = SceneView::try_new(value)?;
    let visible = effect.bool_or("visible", true);
    let radius = effect.non_negative_or("radius", 0.0);
    let shadow = || {
        let offset = effect.object("offset");
        Shadow {
            color: effect
                .object("color")
                .map(|c| read_color(&c, 1.0))
                .unwrap_or(Color::rgba(0, 0, 0, 0.25)),
            offset: Offset {
                x: offset.map(|o| o.f64_or("x", 0.0)).unwrap_or(0.0),
                y: offset.map(|o| o.f64_or("y", 0.0)).unwrap_or(0.0),
            },
            radius,
            spread: effect.f64_or("spread", 0.0),
            visible,
        }
    };
    Some(match effect.str("type")? {
        "DROP_SHADOW" => Effect::DropShadow(shadow()),
        "INNER_SHADOW" => Effect::InnerShadow(shadow()),
        "LAYER_BLUR" => Effect::Blur(Blur { radius, visible }),
        "BACKGROUND_BLUR" => Effect::BackgroundBlur(Blur { radius, visible }),
        _ => return None,
    })
}

pub(crate) fn effects(view: &SceneView) -> Result<Vec<Effect>> {
    Ok(view.array("effects")?.iter().filter_map(effect).collect())
}

pub(crate) fn corner_radius(view: &SceneView) -> CornerRadius {
    if let Some(radius) = view.f64("cornerRadius") {
        return CornerRadius::Uniform {
            radius: radius.max(0.0),
        };
    }
    let corner = |key: &str| view.non_negative_or(key, 0.0);
    CornerRadius::from_corners(
        corner("topLeftRadius"),
        corner("topRightRadius"),
        corner("bottomRightRadius"),
        corner("bottomLeftRadius"),
    )
}

fn constraint_kind(name: Option<&str>) -> ConstraintKind {
    match name {
        Some("CENTER") => ConstraintKind::Center,
        Some("MAX") => ConstraintKind::Max,
        Some("STRETCH") => ConstraintKind::Stretch,
        Some("SCALE") => ConstraintKind::Scale,
        _ => ConstraintKind::Min,
    }
}

pub(crate) fn constraints(view: &SceneView) -> Constraints {
    let Some(constraints) = view.object("constraints") else {
        return Constraints::default();
    };
    Constraints {
        horizontal: constraint_kind(constraints.str("horizontal")),
        vertical: constraint_kind(constraints.str("vertical")),
    }
}

pub(crate) fn export_settings(view: &SceneView) -> Vec<ExportSetting> {
    view.array_lenient("exportSettings")
        .iter()
        .filter_map(SceneView::try_new)
        .map(|setting| ExportSetting {
            format: match setting.str("format") {
                Some("JPG") => ExportFormat::Jpg,
                Some("SVG") => ExportFormat::Svg,
                Some("PDF") => ExportFormat::Pdf,
                _ => ExportFormat::Png,
            },
            suffix: setting.str_or("suffix", "").to_string(),
            scale: setting
                .object("constraint")
                .filter(|c| c.str("type") == Some("SCALE"))
                .and_then(|c| c.f64("value"))
                .filter(|v| *v > 0.0)
                .unwrap_or(1.0),
        })
        .collect()
}

fn sizing_mode(name: Option<&str>) -> SizingMode {
    match name {
        Some("AUTO") | Some("HUG") => SizingMode::Auto,
        _ => SizingMode::Fixed,
    }
}

pub(crate) fn layout(view: &SceneView) -> Layout {
    let mode = match view.str("layoutMode") {
        Some("HORIZONTAL") if view.str("layoutWrap") == Some("WRAP") => LayoutMode::Wrap,
        Some("HORIZONTAL") => LayoutMode::Horizontal,
        Some("VERTICAL") => LayoutMode::Vertical,
        _ => LayoutMode::None,
    };
    let horizontal = view.non_negative_or("horizontalPadding", 0.0);
    let vertical = view.non_negative_or("verticalPadding", 0.0);
    Layout {
        mode,
        primary_sizing: sizing_mode(view.str("primaryAxisSizingMode")),
        counter_sizing: sizing_mode(view.str("counterAxisSizingMode")),
        primary_align: match view.str("primaryAxisAlignItems") {
            Some("CENTER") => PrimaryAxisAlign::Center,
            Some("MAX") => PrimaryAxisAlign::Max,
            Some("SPACE_BETWEEN") => PrimaryAxisAlign::SpaceBetween,
            _ => PrimaryAxisAlign::Min,
        },
        counter_align: match view.str("counterAxisAlignItems") {
            Some("CENTER") => CounterAxisAlign::Center,
            Some("MAX") => CounterAxisAlign::Max,
            Some("BASELINE") => CounterAxisAlign::Baseline,
            _ => CounterAxisAlign::Min,
        },
        item_spacing: view.non_negative_or("itemSpacing", 0.0),
        counter_spacing: view.non_negative_or("counterAxisSpacing", 0.0),
        padding: Padding {
            top: view.non_negative_or("paddingTop", vertical),
            right: view.non_negative_or("paddingRight", horizontal),
            bottom: view.non_negative_or("paddingBottom", vertical),
            left: view.non_negative_or("paddingLeft", horizontal),
        },
    }
}

pub(crate) fn child_layout(view: &SceneView) -> ChildLayout {
    ChildLayout {
        grow: view.non_negative_or("layoutGrow", 0.0),
        align: match view.str("layoutAlign") {
            Some("STRETCH") => ChildAlign::Stretch,
            _ => ChildAlign::Inherit,
        },
        positioning: match view.str("layoutPositioning") {
            Some("ABSOLUTE") => Positioning::Absolute,
            _ => Positioning::Auto,
        },
    }
}

fn line_height(view: &SceneView) -> LineHeight {
    let Some(line_height) = view.object("lineHeight") else {
        return LineHeight::Auto;
    };
    let value = line_height.f64("value").filter(|v| *v > 0.0);
    match (line_height.str("unit"), value) {
        (Some("PIXELS"), Some(px)) => LineHeight::Pixels(px),
        (Some("PERCENT"), Some(pct)) => LineHeight::Percent(pct),
        _ => LineHeight::Auto,
    }
}

fn letter_spacing(view: &SceneView, font_size: f64) -> f64 {
    if let Some(px) = view.f64("letterSpacing") {
        return px;
    }
    let Some(spacing) = view.object("letterSpacing") else {
        return 0.0;
    };
    let value = spacing.f64_or("value", 0.0);
    match spacing.str("unit") {
        Some("PERCENT") => (font_size * (value / 100.0)).clamp(-f64::MAX, f64::MAX),
        _ => value,
    }
}

pub(crate) fn text_style(view: &SceneView, config: &NormalizeConfig) -> TextStyle {
    let font_name = view.object("fontName");
    let family = font_name
        .and_then(|f| f.str("family"))
        .filter(|f| !f.trim().is_empty())
        .unwrap_or(&config.default_font_family);
    let style_name = font_name.and_then(|f| f.str("style")).unwrap_or("");
    let font_weight = view
        .f64("fontWeight")
        .map(|w| w.round().clamp(100.0, 900.0) as u16)
        .or_else(|| weight_from_style_name(style_name))
        .unwrap_or(config.default_font_weight);
    let font_size = view
        .f64("fontSize")
        .filter(|s| *s > 0.0)
        .unwrap_or(config.default_font_size);

    TextStyle {
        font_family: family.to_string(),
        font_weight,
        font_size,
        italic: style_name.to_ascii_lowercase().contains("italic"),
        line_height: line_height(view),
        letter_spacing: letter_spacing(view, font_size),
        align_horizontal: match view.str("textAlignHorizontal") {
            Some("CENTER") => TextAlignHorizontal::Center,
            Some("RIGHT") => TextAlignHorizontal::Right,
            Some("JUSTIFIED") => TextAlignHorizontal::Justified,
            _ => TextAlignHorizontal::Left,
        },
        align_vertical: match view.str("textAlignVertical") {
            Some("CENTER") => TextAlignVertical::Center,
            Some("BOTTOM") => TextAlignVertical::Bottom,
            _ => TextAlignVertical::Top,
        },
        decoration: match view.str("textDecoration") {
            Some("UNDERLINE") => TextDecoration::Underline,
            Some("STRIKETHROUGH") => TextDecoration::Strikethrough,
            _ => TextDecoration::None,
        },
        case: match view.str("textCase") {
            Some("UPPER") => TextCase::Upper,
            Some("LOWER") => TextCase::Lower,
            Some("TITLE") => TextCase::Title,
            _ => TextCase::Original,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn view(value: &Value) -> SceneView<'_> {
        SceneView::new(value).unwrap()
    }

    #[test]
    fn test_solid_fill_channels() {
        let node = json!({
            "fills": [{ "type": "SOLID", "color": { "r": 1.0, "g": 0.5, "b": 0.0 }, "opacity": 0.5 }]
        });
        let fills = fills(&view(&node)).unwrap();
        let Fill::Solid(paint) = &fills[0] else {
            panic!("expected solid fill");
        };
        assert_eq!((paint.color.r, paint.color.g, paint.color.b), (255, 128, 0));
        assert_eq!(paint.color.a, 1.0);
        assert_eq!(paint.opacity, Some(0.5));
    }

    #[test]
    fn test_gradient_fill() {
        let node = json!({
            "fills": [{
                "type": "GRADIENT_LINEAR",
                "gradientStops": [
                    { "position": 0.0, "color": { "r": 0, "g": 0, "b": 0, "a": 1 } },
                    { "position": 1.0, "color": { "r": 1, "g": 1, "b": 1, "a": 0.5 } }
                ],
                "gradientTransform": [[0, 1, 0], [-1, 0, 1]]
            }]
        });
        let fills = fills(&view(&node)).unwrap();
        let Fill::Gradient(gradient) = &fills[0] else {
            panic!("expected gradient fill");
        };
        assert_eq!(gradient.kind, GradientKind::Linear);
        assert_eq!(gradient.stops.len(), 2);
        assert_eq!(gradient.stops[1].color.a, 0.5);
        let transform = gradient.transform.unwrap();
        assert_eq!((transform.a(), transform.b()), (0.0, 1.0));
    }

    #[test]
    fn test_malformed_paints_are_skipped() {
        let node = json!({
            "fills": [
                { "type": "SOLID" },
                { "type": "GRADIENT_LINEAR", "gradientStops": [] },
                { "type": "VIDEO" },
                42,
                { "type": "IMAGE", "imageHash": "abc123", "scaleMode": "FIT" }
            ]
        });
        let fills = fills(&view(&node)).unwrap();
        assert_eq!(fills.len(), 1);
        assert!(matches!(&fills[0], Fill::Image(img) if img.image_ref.as_deref() == Some("abc123")));
    }

    #[test]
    fn test_invisible_effects_are_kept() {
        let node = json!({
            "effects": [
                { "type": "DROP_SHADOW", "radius": 4, "offset": { "x": 0, "y": 2 }, "visible": false },
                { "type": "LAYER_BLUR", "radius": 8 }
            ]
        });
        let effects = effects(&view(&node)).unwrap();
        assert_eq!(effects.len(), 2);
        assert!(!effects[0].is_visible());
        assert_eq!(effects[0].shadow().unwrap().offset.y, 2.0);
        assert!(matches!(effects[1], Effect::Blur(Blur { radius, .. }) if radius == 8.0));
    }

    #[test]
    fn test_corner_radius() {
        let uniform = json!({ "cornerRadius": 8 });
        assert_eq!(corner_radius(&view(&uniform)), CornerRadius::Uniform { radius: 8.0 });

        let mixed = json!({
            "cornerRadius": "mixed",
            "topLeftRadius": 8, "topRightRadius": 8, "bottomRightRadius": 0, "bottomLeftRadius": 0
        });
        assert_eq!(corner_radius(&view(&mixed)).corners(), [8.0, 8.0, 0.0, 0.0]);
    }

    #[test]
    fn test_layout() {
        let node = json!({
            "layoutMode": "HORIZONTAL",
            "layoutWrap": "WRAP",
            "itemSpacing": 12,
            "primaryAxisAlignItems": "SPACE_BETWEEN",
            "paddingLeft": 4,
            "horizontalPadding": 10,
            "verticalPadding": 6
        });
        let layout = layout(&view(&node));
        assert_eq!(layout.mode, LayoutMode::Wrap);
        assert_eq!(layout.item_spacing, 12.0);
        assert_eq!(layout.primary_align, PrimaryAxisAlign::SpaceBetween);
        assert_eq!(layout.padding, Padding { top: 6.0, right: 10.0, bottom: 6.0, left: 4.0 });
    }

    #[test]
    fn test_negative_item_spacing_is_clamped() {
        let node = json!({ "layoutMode": "VERTICAL", "itemSpacing": -8, "paddingTop": 4 });
        let layout = layout(&view(&node));
        assert_eq!(layout.item_spacing, 0.0);
        assert_eq!(layout.padding.top, 4.0);
    }

    #[test]
    fn test_text_style_defaults() {
        let node = json!({});
        let style = text_style(&view(&node), &NormalizeConfig::default());
        assert_eq!(style, TextStyle::default());
    }

    #[test]
    fn test_text_style_from_host() {
        let node = json!({
            "fontName": { "family": "Roboto", "style": "Bold Italic" },
            "fontSize": 20,
            "lineHeight": { "unit": "PERCENT", "value": 150 },
            "letterSpacing": { "unit": "PERCENT", "value": 10 },
            "textAlignHorizontal": "CENTER",
            "textCase": "UPPER"
        });
        let style = text_style(&view(&node), &NormalizeConfig::default());
        assert_eq!(style.font_family, "Roboto");
        assert_eq!(style.font_weight, 700);
        assert!(style.italic);
        assert_eq!(style.line_height, LineHeight::Percent(150.0));
        assert_eq!(style.letter_spacing, 2.0);
        assert_eq!(style.align_horizontal, TextAlignHorizontal::Center);
        assert_eq!(style.case, TextCase::Upper);
    }

    #[test]
    fn test_export_settings() {
        let node = json!({
            "exportSettings": [
                { "format": "SVG", "suffix": "@icon" },
                { "format": "PNG", "constraint": { "type": "SCALE", "value": 2 } }
            ]
        });
        let settings = export_settings(&view(&node));
        assert_eq!(settings[0].format, ExportFormat::Svg);
        assert_eq!(settings[0].suffix, "@icon");
        assert_eq!(settings[1].scale, 2.0);
    }
}
