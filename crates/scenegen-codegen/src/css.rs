//! CSS declarations for web targets.

use crate::context::FormatConfig;
use crate::escape;
use crate::semantic::SemanticRole;
use crate::style::{self, format_number, px, rem};
use crate::traverse::{has_absolute_children, hugs_content, Axis, Placement};
use convert_case::{Case, Casing};
use indexmap::IndexMap;
use scenegen_ir::{
    BlendMode, CounterAxisAlign, IrNode, Layout, LayoutMode, LineHeight, Padding,
    PrimaryAxisAlign, ScaleMode, TextAlignHorizontal, TextCase, TextDecoration, TextNode,
};

/// Reset prepended to generated stylesheets.
pub const RESET: &str = "*, *::before, *::after {\n  box-sizing: border-box;\n  margin: 0;\n  padding: 0;\n}";

/// Ordered CSS declarations for one element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declarations(IndexMap<&'static str, String>);

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, property: &'static str, value: impl Into<String>) {
        self.0.insert(property, value.into());
    }

    pub fn set_opt(&mut self, property: &'static str, value: Option<String>) {
        if let Some(value) = value {
            self.set(property, value);
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// `prop: value; prop: value` for a `style` attribute.
    pub fn to_inline(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// A rule block for `selector`.
    pub fn to_rule(&self, selector: &str, indent: usize) -> String {
        let pad = " ".repeat(indent);
        let mut out = format!("{} {{\n", selector);
        for (k, v) in self.iter() {
            out.push_str(&format!("{}{}: {};\n", pad, k, v));
        }
        out.push('}');
        out
    }

    /// JavaScript object body, e.g. `backgroundColor: 'red', gap: '1rem'`.
    pub fn to_js_object(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{}: '{}'", k.to_case(Case::Camel), escape::js_string(v)))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Utility classes: standard ones for layout, arbitrary properties otherwise.
    pub fn to_tailwind(&self) -> Vec<String> {
        self.iter()
            .map(|(k, v)| match (k, v) {
                ("display", "flex") => "flex".to_string(),
                ("flex-direction", "row") => "flex-row".to_string(),
                ("flex-direction", "column") => "flex-col".to_string(),
                ("flex-wrap", "wrap") => "flex-wrap".to_string(),
                ("position", "relative") => "relative".to_string(),
                ("position", "absolute") => "absolute".to_string(),
                ("overflow", "hidden") => "overflow-hidden".to_string(),
                _ => format!("[{}:{}]", k, v.replace(' ', "_")),
            })
            .collect()
    }
}

/// Compute the declarations for `node` placed as `placement`.
pub fn declarations(node: &IrNode, placement: &Placement, format: &FormatConfig) -> Declarations {
    let mut d = Declarations::new();
    let role = SemanticRole::detect(node);

    place(&mut d, node, placement);
    // Root and absolute nodes are already positioned.
    if matches!(placement, Placement::Flow { .. }) && has_absolute_children(node) {
        d.set("position", "relative");
    }
    if let Some(layout) = node.layout().filter(|l| l.mode.is_auto()) {
        flex_container(&mut d, layout, format);
    }
    if node.as_container().is_some_and(|c| c.clips_content) {
        d.set("overflow", "hidden");
    }

    match node {
        IrNode::Text(text) => typography(&mut d, text, format),
        _ if role == SemanticRole::Image => image(&mut d, node),
        _ => surface(&mut d, node),
    }
    effects(&mut d, node);
    d
}

fn place(d: &mut Declarations, node: &IrNode, placement: &Placement) {
    let geometry = node.geometry();
    let (hug_width, hug_height) = hugs_content(node);
    let is_text = matches!(node, IrNode::Text(_));

    match *placement {
        Placement::Root => {
            d.set("position", "relative");
            d.set("width", "100%");
            d.set("max-width", px(geometry.width));
            if !hug_height && !is_text {
                d.set("min-height", px(geometry.height));
            }
        }
        Placement::Flow { axis, grow, stretch } => {
            let (main, cross) = match axis {
                Axis::Horizontal => (("width", geometry.width, hug_width), ("height", geometry.height, hug_height)),
                Axis::Vertical => (("height", geometry.height, hug_height), ("width", geometry.width, hug_width)),
            };
            if grow > 0.0 {
                d.set("flex-grow", format_number(grow));
            } else {
                d.set("flex-shrink", "0");
                if !main.2 && !(is_text && main.0 == "height") {
                    d.set(main.0, px(main.1));
                }
            }
            if stretch {
                d.set("align-self", "stretch");
            } else if !cross.2 && !(is_text && cross.0 == "height") {
                d.set(cross.0, px(cross.1));
            }
        }
        Placement::Absolute { left, top } => {
            d.set("position", "absolute");
            d.set("left", px(left));
            d.set("top", px(top));
            if !hug_width {
                d.set("width", px(geometry.width));
            }
            if !hug_height && !is_text {
                d.set("height", px(geometry.height));
            }
        }
    }

    if geometry.rotation != 0.0 {
        d.set("transform", format!("rotate({})", style::units::deg(-geometry.rotation)));
    }
}

fn flex_container(d: &mut Declarations, layout: &Layout, format: &FormatConfig) {
    d.set("display", "flex");
    d.set(
        "flex-direction",
        if layout.mode == LayoutMode::Vertical { "column" } else { "row" },
    );
    if layout.mode == LayoutMode::Wrap {
        d.set("flex-wrap", "wrap");
    }
    d.set("justify-content", justify(layout.primary_align));
    d.set("align-items", align(layout.counter_align));

    let base = format.rem_base;
    if layout.mode == LayoutMode::Wrap && layout.counter_spacing > 0.0 && layout.counter_spacing != layout.item_spacing {
        d.set(
            "gap",
            format!("{} {}", rem(layout.counter_spacing, base), rem(layout.item_spacing, base)),
        );
    } else if layout.item_spacing > 0.0 {
        d.set("gap", rem(layout.item_spacing, base));
    }
    if !layout.padding.is_zero() {
        d.set("padding", padding(&layout.padding, base));
    }
}

fn justify(align: PrimaryAxisAlign) -> &'static str {
    match align {
        PrimaryAxisAlign::Min => "flex-start",
        PrimaryAxisAlign::Center => "center",
        PrimaryAxisAlign::Max => "flex-end",
        PrimaryAxisAlign::SpaceBetween => "space-between",
    }
}

fn align(align: CounterAxisAlign) -> &'static str {
    match align {
        CounterAxisAlign::Min => "flex-start",
        CounterAxisAlign::Center => "center",
        CounterAxisAlign::Max => "flex-end",
        CounterAxisAlign::Baseline => "baseline",
    }
}

/// Padding shorthand in rem.
pub fn padding(padding: &Padding, base: f64) -> String {
    if padding.is_uniform() {
        rem(padding.top, base)
    } else {
        format!(
            "{} {} {} {}",
            rem(padding.top, base),
            rem(padding.right, base),
            rem(padding.bottom, base),
            rem(padding.left, base)
        )
    }
}

fn surface(d: &mut Declarations, node: &IrNode) {
    let base = node.base();
    d.set_opt("background", style::background(&base.fills));
    if let Some(image) = style::paint::primary_image(&base.fills) {
        d.set("background-size", style::paint::background_size(image.scale_mode));
        d.set("background-position", "center");
    }
    border(d, node);
    d.set_opt("border-radius", style::radius_to_css(&base.corner_radius));
    d.set_opt("box-shadow", style::box_shadow(&base.effects));
}

fn image(d: &mut Declarations, node: &IrNode) {
    let mode = match node {
        IrNode::Image(image) => image.scale_mode,
        other => style::paint::primary_image(&other.base().fills)
            .map(|i| i.scale_mode)
            .unwrap_or_default(),
    };
    d.set(
        "object-fit",
        match mode {
            ScaleMode::Fill | ScaleMode::Crop => "cover",
            ScaleMode::Fit => "contain",
            ScaleMode::Tile => "none",
        },
    );
    border(d, node);
    d.set_opt("border-radius", style::radius_to_css(&node.base().corner_radius));
    d.set_opt("box-shadow", style::box_shadow(&node.base().effects));
}

fn border(d: &mut Declarations, node: &IrNode) {
    let base = node.base();
    let border = base
        .visible_strokes()
        .find_map(|stroke| style::stroke_to_border(stroke, base.stroke_weight));
    d.set_opt("border", border);
}

fn typography(d: &mut Declarations, text: &TextNode, format: &FormatConfig) {
    let s = &text.style;
    let base = format.rem_base;

    d.set_opt(
        "color",
        style::paint::primary_color(&text.base.fills).map(|c| style::color_to_css(&c)),
    );
    d.set("font-family", format!("'{}', sans-serif", s.font_family));
    d.set("font-size", rem(s.font_size, base));
    d.set("font-weight", s.font_weight.to_string());
    if s.italic {
        d.set("font-style", "italic");
    }
    match s.line_height {
        LineHeight::Auto => {}
        LineHeight::Pixels(px) => d.set("line-height", rem(px, base)),
        LineHeight::Percent(pct) => d.set("line-height", format_number(pct / 100.0)),
    }
    if s.letter_spacing != 0.0 {
        d.set("letter-spacing", rem(s.letter_spacing, base));
    }
    match s.align_horizontal {
        TextAlignHorizontal::Left => {}
        TextAlignHorizontal::Center => d.set("text-align", "center"),
        TextAlignHorizontal::Right => d.set("text-align", "right"),
        TextAlignHorizontal::Justified => d.set("text-align", "justify"),
    }
    match s.decoration {
        TextDecoration::None => {}
        TextDecoration::Underline => d.set("text-decoration", "underline"),
        TextDecoration::Strikethrough => d.set("text-decoration", "line-through"),
    }
    match s.case {
        TextCase::Original => {}
        TextCase::Upper => d.set("text-transform", "uppercase"),
        TextCase::Lower => d.set("text-transform", "lowercase"),
        TextCase::Title => d.set("text-transform", "capitalize"),
    }
    d.set_opt("text-shadow", style::text_shadow(&text.base.effects));
}

fn effects(d: &mut Declarations, node: &IrNode) {
    let base = node.base();
    d.set_opt("filter", style::filter(&base.effects));
    d.set_opt("backdrop-filter", style::backdrop_filter(&base.effects));
    if base.opacity < 1.0 {
        d.set("opacity", format_number(base.opacity));
    }
    d.set_opt("mix-blend-mode", blend_mode(base.blend_mode).map(str::to_string));
}

/// CSS `mix-blend-mode` value; `None` for source-over.
pub fn blend_mode(mode: BlendMode) -> Option<&'static str> {
    Some(match mode {
        BlendMode::PassThrough | BlendMode::Normal => return None,
        BlendMode::Darken => "darken",
        BlendMode::Multiply => "multiply",
        BlendMode::ColorBurn => "color-burn",
        BlendMode::Lighten => "lighten",
        BlendMode::Screen => "screen",
        BlendMode::ColorDodge => "color-dodge",
        BlendMode::Overlay => "overlay",
        BlendMode::SoftLight => "soft-light",
        BlendMode::HardLight => "hard-light",
        BlendMode::Difference => "difference",
        BlendMode::Exclusion => "exclusion",
        BlendMode::Hue => "hue",
        BlendMode::Saturation => "saturation",
        BlendMode::Color => "color",
        BlendMode::Luminosity => "luminosity",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traverse::placed_children;
    use scenegen_ir::{Color, ContainerNode, Fill, Geometry, NodeBase, Positioning, ShapeNode, TextStyle};

    fn column(spacing: f64) -> IrNode {
        IrNode::Frame(
            ContainerNode::new(
                NodeBase::new("1", "Column", Geometry::sized(320.0, 200.0)).with_fill(Fill::solid(Color::WHITE)),
            )
            .with_layout(Layout {
                mode: LayoutMode::Vertical,
                item_spacing: spacing,
                padding: Padding::uniform(24.0),
                ..Default::default()
            }),
        )
    }

    #[test]
    fn test_flex_column() {
        let d = declarations(&column(16.0), &Placement::Root, &FormatConfig::default());
        assert_eq!(d.get("display"), Some("flex"));
        assert_eq!(d.get("flex-direction"), Some("column"));
        assert_eq!(d.get("gap"), Some("1rem"));
        assert_eq!(d.get("padding"), Some("1.5rem"));
        assert_eq!(d.get("width"), Some("100%"));
        assert_eq!(d.get("max-width"), Some("320px"));
        assert_eq!(d.get("background"), Some("rgb(255, 255, 255)"));
    }

    #[test]
    fn test_absolute_child() {
        let node = IrNode::fallback("2", "Dot", Geometry::new(10.0, 20.0, 4.0, 4.0));
        let d = declarations(
            &node,
            &Placement::Absolute { left: 10.0, top: 20.0 },
            &FormatConfig::default(),
        );
        assert_eq!(d.to_inline(), "position: absolute; left: 10px; top: 20px; width: 4px; height: 4px");
    }

    #[test]
    fn test_auto_layout_item_anchors_absolute_children() {
        let mut badge = NodeBase::new("4:3", "Badge", Geometry::new(80.0, -6.0, 16.0, 16.0));
        badge.layout_child.positioning = Positioning::Absolute;
        let tile = ContainerNode::new(NodeBase::new("4:2", "Tile", Geometry::sized(96.0, 96.0)))
            .with_layout(Layout {
                mode: LayoutMode::Vertical,
                ..Default::default()
            })
            .with_child(IrNode::Rectangle(ShapeNode::new(badge)));
        let page = IrNode::Frame(
            ContainerNode::new(NodeBase::new("4:1", "Page", Geometry::sized(400.0, 200.0)))
                .with_layout(Layout {
                    mode: LayoutMode::Horizontal,
                    ..Default::default()
                })
                .with_child(IrNode::Frame(tile)),
        );

        let tile = placed_children(&page)[0];
        let d = declarations(tile.node, &tile.placement, &FormatConfig::default());
        assert_eq!(d.get("position"), Some("relative"));
        assert_eq!(d.get("display"), Some("flex"));

        let badge = placed_children(tile.node)[0];
        let d = declarations(badge.node, &badge.placement, &FormatConfig::default());
        assert_eq!(d.get("position"), Some("absolute"));
        assert_eq!(d.get("left"), Some("80px"));
        assert_eq!(d.get("top"), Some("-6px"));
    }

    #[test]
    fn test_flow_leaf_stays_static() {
        let node = IrNode::fallback("5", "Dot", Geometry::sized(4.0, 4.0));
        let d = declarations(
            &node,
            &Placement::Flow { axis: Axis::Horizontal, grow: 0.0, stretch: false },
            &FormatConfig::default(),
        );
        assert_eq!(d.get("position"), None);
    }

    #[test]
    fn test_typography() {
        let text = IrNode::Text(TextNode {
            base: NodeBase::new("3", "Title", Geometry::sized(200.0, 30.0)).with_fill(Fill::solid(Color::BLACK)),
            characters: "Hi".into(),
            style: TextStyle {
                font_size: 24.0,
                font_weight: 700,
                line_height: LineHeight::Percent(150.0),
                ..Default::default()
            },
        });
        let d = declarations(
            &text,
            &Placement::Flow { axis: Axis::Vertical, grow: 0.0, stretch: false },
            &FormatConfig::default(),
        );
        assert_eq!(d.get("font-size"), Some("1.5rem"));
        assert_eq!(d.get("font-weight"), Some("700"));
        assert_eq!(d.get("line-height"), Some("1.5"));
        assert_eq!(d.get("color"), Some("rgb(0, 0, 0)"));
        assert_eq!(d.get("height"), None);
        assert_eq!(d.get("width"), Some("200px"));
    }

    #[test]
    fn test_output_forms() {
        let mut d = Declarations::new();
        d.set("display", "flex");
        d.set("flex-direction", "column");
        d.set("background-color", "rgb(1, 2, 3)");
        assert_eq!(d.to_tailwind(), vec!["flex", "flex-col", "[background-color:rgb(1,_2,_3)]"]);
        assert_eq!(
            d.to_js_object(),
            "display: 'flex', flexDirection: 'column', backgroundColor: 'rgb(1, 2, 3)'"
        );
        assert_eq!(
            d.to_rule(".a", 2),
            ".a {\n  display: flex;\n  flex-direction: column;\n  background-color: rgb(1, 2, 3);\n}"
        );
    }
}
