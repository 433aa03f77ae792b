//! SwiftUI view in Swift.

use super::engine_with;
use crate::context::{GenerationContext, OptionKey};
use crate::error::Result;
use crate::escape;
use crate::naming::{self, NameGenerator};
use crate::semantic::{placeholder_text, SemanticRole};
use crate::serializer::{GeneratedFile, Language, Serializer};
use crate::style::color::unit_channel;
use crate::style::effect::{layer_blur, primary_shadow};
use crate::style::format_number;
use crate::style::paint::{
    effective_stops, fill_color, gradient_angle, primary_image, stroke_color, sweep_start_angle,
};
use crate::traverse::{hugs_content, placed_children, Axis, Placement};
use crate::writer::CodeWriter;
use scenegen_ir::stack::ensure_sufficient_stack;
use scenegen_ir::{
    Color, CounterAxisAlign, Fill, Gradient, GradientKind, IrNode, LayoutMode, PrimaryAxisAlign,
    ScaleMode, TextAlignHorizontal, TextCase, TextDecoration, TextNode,
};
use serde_json::json;

const VIEW: &str = r#"import SwiftUI

struct {{name}}: View {
    var body: some View {
        {{root}}
    }

{{indent properties 4}}
}

{{preview}}
"#;

const PREVIEW_MACRO: &str = r#"#Preview {
    {{name}}()
}"#;

const PREVIEW_PROVIDER: &str = r#"struct {{name}}_Previews: PreviewProvider {
    static var previews: some View {
        {{name}}()
    }
}"#;

const TEMPLATES: &[(&str, &str)] = &[
    ("view", VIEW),
    ("preview_macro", PREVIEW_MACRO),
    ("preview_provider", PREVIEW_PROVIDER),
];

/// SwiftUI serializer.
#[derive(Debug, Default)]
pub struct SwiftUiSerializer;

impl SwiftUiSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl Serializer for SwiftUiSerializer {
    fn id(&self) -> &'static str {
        "swiftui"
    }

    fn label(&self) -> &'static str {
        "SwiftUI"
    }

    fn description(&self) -> &'static str {
        "SwiftUI view in Swift"
    }

    fn supported_options(&self) -> &'static [OptionKey] {
        &[OptionKey::IosCompat, OptionKey::ComponentName]
    }

    fn generate(&self, ir: &IrNode, ctx: &GenerationContext) -> Result<Vec<GeneratedFile>> {
        let engine = engine_with(TEMPLATES)?;
        let name = format!("{}View", naming::pascal_case(ctx.base_name(ir)));
        let mut builder = ViewBuilder {
            names: NameGenerator::new(),
            properties: Vec::new(),
            width: 4,
            ios_compat: ctx.options.ios_compat,
        };
        let root = builder.property(ir, Placement::Root);

        let preview_template = if ctx.options.ios_compat {
            "preview_provider"
        } else {
            "preview_macro"
        };
        let preview = engine.render(preview_template, &json!({ "name": name }))?;
        let code = engine.render(
            "view",
            &json!({
                "name": name,
                "root": root,
                "properties": builder.properties.join("\n\n"),
                "preview": preview,
            }),
        )?;
        Ok(vec![GeneratedFile::new(format!("{}.swift", name), code, Language::Swift)])
    }
}

struct ViewBuilder {
    names: NameGenerator,
    properties: Vec<String>,
    width: usize,
    ios_compat: bool,
}

impl ViewBuilder {
    /// Emit a private computed property rendering `node`; returns its name.
    fn property(&mut self, node: &IrNode, placement: Placement) -> String {
        ensure_sufficient_stack(|| {
            let name = self.names.identifier(node.name());
            let slot = self.properties.len();
            self.properties.push(String::new());

            let mut w = CodeWriter::new(self.width);
            w.line(format!("private var {}: some View {{", name));
            w.indent();
            self.view(&mut w, node, &placement);
            w.dedent();
            w.line("}");
            self.properties[slot] = w.finish();
            name
        })
    }

    fn view(&mut self, w: &mut CodeWriter, node: &IrNode, placement: &Placement) {
        let role = SemanticRole::detect(node);
        let base = node.base();

        match node {
            IrNode::Text(text) => self.text(w, text),
            _ if role == SemanticRole::Image => {
                let (reference, mode) = image_source(node);
                w.line(format!("Image(\"{}\")", escape::swift_string(reference.unwrap_or("placeholder"))));
                w.nested(|w| {
                    w.line(".resizable()");
                    w.line(match mode {
                        ScaleMode::Fit => ".aspectRatio(contentMode: .fit)",
                        _ => ".aspectRatio(contentMode: .fill)",
                    });
                });
            }
            _ if role == SemanticRole::Input => {
                w.line(format!(
                    "TextField(\"{}\", text: .constant(\"\"))",
                    escape::swift_string(&placeholder_text(node))
                ));
            }
            _ if node.is_shape() => {
                let shape = if matches!(node, IrNode::Ellipse(_)) { "Ellipse()" } else { "Rectangle()" };
                w.line(shape);
                let fill = base
                    .visible_fills()
                    .last()
                    .and_then(|fill| self.paint(fill, node))
                    .unwrap_or_else(|| "Color.clear".to_string());
                w.nested(|w| w.line(format!(".fill({})", fill)));
            }
            _ if role == SemanticRole::Button => {
                w.line("Button(action: {}) {");
                w.nested(|w| self.stack(w, node));
                w.line("}");
                w.nested(|w| w.line(".buttonStyle(.plain)"));
            }
            _ => self.stack(w, node),
        }

        let modifiers = self.modifiers(node, placement);
        w.nested(|w| {
            for modifier in modifiers {
                w.line(modifier);
            }
        });
    }

    /// Stack holding the visible children, or an empty placeholder.
    fn stack(&mut self, w: &mut CodeWriter, node: &IrNode) {
        let children = placed_children(node);
        if children.is_empty() {
            w.line("Color.clear");
            return;
        }

        let layout = node.layout().filter(|l| l.mode.is_auto());
        let header = match layout {
            Some(layout) if layout.mode == LayoutMode::Vertical => format!(
                "VStack(alignment: {}, spacing: {}) {{",
                match layout.counter_align {
                    CounterAxisAlign::Center => ".center",
                    CounterAxisAlign::Max => ".trailing",
                    CounterAxisAlign::Min | CounterAxisAlign::Baseline => ".leading",
                },
                format_number(layout.item_spacing)
            ),
            Some(layout) => format!(
                "HStack(alignment: {}, spacing: {}) {{",
                match layout.counter_align {
                    CounterAxisAlign::Center => ".center",
                    CounterAxisAlign::Max => ".bottom",
                    CounterAxisAlign::Baseline => ".firstTextBaseline",
                    CounterAxisAlign::Min => ".top",
                },
                format_number(layout.item_spacing)
            ),
            None => "ZStack(alignment: .topLeading) {".to_string(),
        };
        let space_between = layout.is_some_and(|l| l.primary_align == PrimaryAxisAlign::SpaceBetween);

        w.line(header);
        w.indent();
        let count = children.len();
        for (i, child) in children.into_iter().enumerate() {
            let property = self.property(child.node, child.placement);
            w.line(property);
            if let Placement::Absolute { left, top } = child.placement {
                w.nested(|w| {
                    w.line(format!(
                        ".offset(x: {}, y: {})",
                        format_number(left),
                        format_number(top)
                    ))
                });
            }
            if space_between && i + 1 < count {
                w.line("Spacer(minLength: 0)");
            }
        }
        w.dedent();
        w.line("}");
    }

    fn text(&self, w: &mut CodeWriter, text: &TextNode) {
        let s = &text.style;
        w.line(format!("Text(\"{}\")", escape::swift_string(&text.characters)));
        w.indent();
        w.line(format!(
            ".font(.custom(\"{}\", size: {}))",
            escape::swift_string(&s.font_family),
            format_number(s.font_size)
        ));
        w.line(format!(".fontWeight({})", font_weight(s.font_weight)));
        if s.italic {
            w.line(".italic()");
        }
        if let Some(color) = text.base.fills.iter().rev().find_map(fill_color) {
            let modifier = if self.ios_compat { "foregroundColor" } else { "foregroundStyle" };
            w.line(format!(".{}({})", modifier, swift_color(&color)));
        }
        match s.align_horizontal {
            TextAlignHorizontal::Left | TextAlignHorizontal::Justified => {}
            TextAlignHorizontal::Center => w.line(".multilineTextAlignment(.center)"),
            TextAlignHorizontal::Right => w.line(".multilineTextAlignment(.trailing)"),
        }
        if let Some(line_height) = s.line_height_px() {
            let spacing = line_height - s.font_size;
            if spacing > 0.0 {
                w.line(format!(".lineSpacing({})", format_number(spacing)));
            }
        }
        if s.letter_spacing != 0.0 {
            w.line(format!(".kerning({})", format_number(s.letter_spacing)));
        }
        match s.decoration {
            TextDecoration::None => {}
            TextDecoration::Underline => w.line(".underline()"),
            TextDecoration::Strikethrough => w.line(".strikethrough()"),
        }
        match s.case {
            TextCase::Upper => w.line(".textCase(.uppercase)"),
            TextCase::Lower => w.line(".textCase(.lowercase)"),
            TextCase::Original | TextCase::Title => {}
        }
        w.dedent();
    }

    fn modifiers(&self, node: &IrNode, placement: &Placement) -> Vec<String> {
        let base = node.base();
        let mut modifiers = Vec::new();

        if let Some(layout) = node.layout().filter(|l| l.mode.is_auto()) {
            let p = &layout.padding;
            if p.is_uniform() && !p.is_zero() {
                modifiers.push(format!(".padding({})", format_number(p.top)));
            } else if !p.is_zero() {
                modifiers.push(format!(
                    ".padding(EdgeInsets(top: {}, leading: {}, bottom: {}, trailing: {}))",
                    format_number(p.top),
                    format_number(p.left),
                    format_number(p.bottom),
                    format_number(p.right)
                ));
            }
        }
        if let Some(frame) = frame(node, placement) {
            modifiers.push(frame);
        }

        if !node.is_shape() && !matches!(node, IrNode::Text(_) | IrNode::Image(_)) {
            let fills: Vec<&Fill> = base.visible_fills().collect();
            for fill in fills.into_iter().rev() {
                if let Some(paint) = self.paint(fill, node) {
                    modifiers.push(format!(".background({})", paint));
                }
            }
        }

        let radius = &base.corner_radius;
        let shape = if radius.is_zero() {
            None
        } else if let Some(r) = radius.uniform() {
            Some(format!("RoundedRectangle(cornerRadius: {})", format_number(r)))
        } else if self.ios_compat {
            let max = radius.corners().into_iter().fold(0.0, f64::max);
            Some(format!("RoundedRectangle(cornerRadius: {})", format_number(max)))
        } else {
            let [tl, tr, br, bl] = radius.corners();
            Some(format!(
                "UnevenRoundedRectangle(topLeadingRadius: {}, bottomLeadingRadius: {}, bottomTrailingRadius: {}, topTrailingRadius: {})",
                format_number(tl),
                format_number(bl),
                format_number(br),
                format_number(tr)
            ))
        };
        if let Some(shape) = &shape {
            modifiers.push(format!(".clipShape({})", shape));
        } else if node.as_container().is_some_and(|c| c.clips_content) {
            modifiers.push(".clipped()".to_string());
        }
        if base.stroke_weight > 0.0 {
            if let Some(color) = base.visible_strokes().find_map(stroke_color) {
                let outline = shape.as_deref().unwrap_or("Rectangle()");
                modifiers.push(format!(
                    ".overlay({}.stroke({}, lineWidth: {}))",
                    outline,
                    swift_color(&color),
                    format_number(base.stroke_weight)
                ));
            }
        }
        if let Some(shadow) = primary_shadow(&base.effects) {
            modifiers.push(format!(
                ".shadow(color: {}, radius: {}, x: {}, y: {})",
                swift_color(&shadow.color),
                format_number(shadow.radius / 2.0),
                format_number(shadow.offset.x),
                format_number(shadow.offset.y)
            ));
        }
        if let Some(blur) = layer_blur(&base.effects) {
            modifiers.push(format!(".blur(radius: {})", format_number(blur / 2.0)));
        }
        if base.opacity < 1.0 {
            modifiers.push(format!(".opacity({})", format_number(base.opacity)));
        }
        if base.geometry.rotation != 0.0 {
            modifiers.push(format!(
                ".rotationEffect(.degrees({}))",
                format_number(-base.geometry.rotation)
            ));
        }
        modifiers
    }

    /// SwiftUI view for a fill, usable in `.background` and `.fill`.
    fn paint(&self, fill: &Fill, node: &IrNode) -> Option<String> {
        if !fill.is_visible() {
            return None;
        }
        Some(match fill {
            Fill::Solid(solid) => swift_color(&solid.effective_color()),
            Fill::Gradient(gradient) => swift_gradient(gradient, node),
            Fill::Image(image) => format!(
                "Image(\"{}\").resizable().scaledToFill()",
                escape::swift_string(image.image_ref.as_deref().unwrap_or("placeholder"))
            ),
        })
    }
}

/// Size modifier for a placement. Fixed sizes use `frame(width:height:)`,
/// anything flexible uses the min/max form.
fn frame(node: &IrNode, placement: &Placement) -> Option<String> {
    #[derive(Clone, Copy)]
    enum Dim {
        Free,
        Fixed(f64),
        Fill,
        Min(f64),
        Max(f64),
    }

    let geometry = node.geometry();
    let (hug_width, hug_height) = hugs_content(node);
    let is_text = matches!(node, IrNode::Text(_));
    let fixed = |value: f64, hug: bool| if hug { Dim::Free } else { Dim::Fixed(value) };

    let (width, height) = match *placement {
        Placement::Root => (
            Dim::Max(geometry.width),
            if hug_height || is_text { Dim::Free } else { Dim::Min(geometry.height) },
        ),
        Placement::Flow { axis, grow, stretch } => {
            let (main_size, cross_size, main_hug, cross_hug) = match axis {
                Axis::Horizontal => (geometry.width, geometry.height, hug_width, hug_height),
                Axis::Vertical => (geometry.height, geometry.width, hug_height, hug_width),
            };
            let main = if grow > 0.0 { Dim::Fill } else { fixed(main_size, main_hug) };
            let cross = if stretch { Dim::Fill } else { fixed(cross_size, cross_hug) };
            match axis {
                Axis::Horizontal => (main, cross),
                Axis::Vertical => (cross, main),
            }
        }
        Placement::Absolute { .. } => (fixed(geometry.width, hug_width), fixed(geometry.height, hug_height)),
    };
    let height = if is_text && !matches!(height, Dim::Fill) { Dim::Free } else { height };

    let is_fixed = |d: Dim| matches!(d, Dim::Free | Dim::Fixed(_));
    if is_fixed(width) && is_fixed(height) {
        let mut args = Vec::new();
        if let Dim::Fixed(w) = width {
            args.push(format!("width: {}", format_number(w)));
        }
        if let Dim::Fixed(h) = height {
            args.push(format!("height: {}", format_number(h)));
        }
        return (!args.is_empty()).then(|| format!(".frame({})", args.join(", ")));
    }

    let mut args = Vec::new();
    for (dim, min, max) in [(width, "minWidth", "maxWidth"), (height, "minHeight", "maxHeight")] {
        match dim {
            Dim::Free => {}
            Dim::Fixed(v) => {
                args.push(format!("{}: {}", min, format_number(v)));
                args.push(format!("{}: {}", max, format_number(v)));
            }
            Dim::Fill => args.push(format!("{}: .infinity", max)),
            Dim::Min(v) => args.push(format!("{}: {}", min, format_number(v))),
            Dim::Max(v) => args.push(format!("{}: {}", max, format_number(v))),
        }
    }
    args.push("alignment: .topLeading".to_string());
    Some(format!(".frame({})", args.join(", ")))
}

fn image_source(node: &IrNode) -> (Option<&str>, ScaleMode) {
    match node {
        IrNode::Image(image) => (image.image_ref.as_deref(), image.scale_mode),
        other => primary_image(&other.base().fills)
            .map(|i| (i.image_ref.as_deref(), i.scale_mode))
            .unwrap_or((None, ScaleMode::Fill)),
    }
}

fn swift_color(color: &Color) -> String {
    let mut out = format!(
        "Color(red: {}, green: {}, blue: {}",
        format_number(unit_channel(color.r)),
        format_number(unit_channel(color.g)),
        format_number(unit_channel(color.b))
    );
    if color.a < 1.0 {
        out.push_str(&format!(", opacity: {}", format_number(color.a)));
    }
    out.push(')');
    out
}

fn swift_gradient(gradient: &Gradient, node: &IrNode) -> String {
    let stops = effective_stops(gradient)
        .iter()
        .map(|s| format!(".init(color: {}, location: {})", swift_color(&s.color), format_number(s.position)))
        .collect::<Vec<_>>()
        .join(", ");
    let angle = gradient_angle(gradient.transform.as_ref());
    match gradient.kind {
        GradientKind::Linear => {
            let (start, end) = unit_points(angle);
            format!(
                "LinearGradient(stops: [{}], startPoint: {}, endPoint: {})",
                stops, start, end
            )
        }
        GradientKind::Radial | GradientKind::Diamond => {
            let geometry = node.geometry();
            format!(
                "RadialGradient(stops: [{}], center: .center, startRadius: 0, endRadius: {})",
                stops,
                format_number(geometry.width.max(geometry.height) / 2.0)
            )
        }
        GradientKind::Angular => format!(
            "AngularGradient(stops: [{}], center: .center, angle: .degrees({}))",
            stops,
            format_number(sweep_start_angle(angle))
        ),
    }
}

/// Start and end points of a linear gradient running at `angle` degrees,
/// measured like CSS (0 points up, 90 points right).
fn unit_points(angle: f64) -> (String, String) {
    let (sin, cos) = angle.to_radians().sin_cos();
    let point = |x: f64, y: f64| format!("UnitPoint(x: {}, y: {})", format_number(x), format_number(y));
    (
        point(0.5 - sin / 2.0, 0.5 + cos / 2.0),
        point(0.5 + sin / 2.0, 0.5 - cos / 2.0),
    )
}

fn font_weight(weight: u16) -> &'static str {
    match weight {
        0..=149 => ".ultraLight",
        150..=249 => ".thin",
        250..=349 => ".light",
        350..=449 => ".regular",
        450..=549 => ".medium",
        550..=649 => ".semibold",
        650..=749 => ".bold",
        750..=849 => ".heavy",
        _ => ".black",
    }
}
