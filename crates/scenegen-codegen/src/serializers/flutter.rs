//! Flutter `StatelessWidget` in Dart.
//!
//! Every rendered node becomes a private builder method on the widget
//! class, so the `build` tree stays shallow no matter how deep the design
//! is. Containers reference their children by calling those methods.

use super::engine_with;
use crate::context::{GenerationContext, OptionKey};
use crate::error::Result;
use crate::escape;
use crate::naming::{self, NameGenerator};
use crate::semantic::{placeholder_text, SemanticRole};
use crate::serializer::{GeneratedFile, Language, Serializer};
use crate::style::color::color_to_argb;
use crate::style::effect::{layer_blur, primary_shadow};
use crate::style::format_number;
use crate::style::paint::{
    effective_stops, fill_color, gradient_angle, image_path, primary_image, stroke_color,
    sweep_start_angle,
};
use crate::traverse::{hugs_content, placed_children, Axis, Placed, Placement};
use scenegen_ir::stack::ensure_sufficient_stack;
use scenegen_ir::{
    CounterAxisAlign, Fill, Gradient, GradientKind, IrNode, LayoutMode, LineHeight, Padding,
    PrimaryAxisAlign, ScaleMode, TextAlignHorizontal, TextCase, TextDecoration, TextNode,
};
use serde_json::json;

const WIDGET: &str = r#"{{header}}import 'package:flutter/material.dart';
{{imports}}
class {{name}} extends StatelessWidget {
  {{constructor}}

  @override
  Widget build(BuildContext context) {
    return {{root}}();
  }

{{indent methods 2}}
}
"#;

const TEMPLATES: &[(&str, &str)] = &[("widget", WIDGET)];

/// Flutter serializer.
#[derive(Debug, Default)]
pub struct FlutterSerializer;

impl FlutterSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl Serializer for FlutterSerializer {
    fn id(&self) -> &'static str {
        "flutter"
    }

    fn label(&self) -> &'static str {
        "Flutter"
    }

    fn description(&self) -> &'static str {
        "Flutter StatelessWidget in Dart"
    }

    fn supported_options(&self) -> &'static [OptionKey] {
        &[OptionKey::NullSafety, OptionKey::ComponentName]
    }

    fn generate(&self, ir: &IrNode, ctx: &GenerationContext) -> Result<Vec<GeneratedFile>> {
        let engine = engine_with(TEMPLATES)?;
        let base_name = ctx.base_name(ir);
        let name = naming::pascal_case(base_name);
        let mut builder = WidgetBuilder {
            names: NameGenerator::new(),
            methods: Vec::new(),
            width: ctx.format.indent_width,
            uses_dart_ui: false,
        };
        let root = builder.method(ir, Placement::Root);

        let (header, constructor) = if ctx.options.null_safety {
            (String::new(), format!("const {}({{super.key}});", name))
        } else {
            (
                "// @dart=2.9\n".to_string(),
                format!("{}({{Key key}}) : super(key: key);", name),
            )
        };
        let imports = if builder.uses_dart_ui {
            "import 'dart:ui' show ImageFilter;\n"
        } else {
            ""
        };

        let code = engine.render(
            "widget",
            &json!({
                "header": header,
                "imports": imports,
                "name": name,
                "constructor": constructor,
                "root": root,
                "methods": builder.methods.join("\n\n"),
            }),
        )?;
        let filename = format!("{}.dart", naming::snake_case(base_name));
        Ok(vec![GeneratedFile::new(filename, code, Language::Dart)])
    }
}

struct WidgetBuilder {
    names: NameGenerator,
    methods: Vec<String>,
    width: usize,
    uses_dart_ui: bool,
}

impl WidgetBuilder {
    /// Emit the builder method for `node` and return its name.
    fn method(&mut self, node: &IrNode, placement: Placement) -> String {
        ensure_sufficient_stack(|| {
            let name = format!("_{}", self.names.identifier(node.name()));
            let slot = self.methods.len();
            self.methods.push(String::new());
            let widget = self.widget(node, &placement);
            self.methods[slot] = format!(
                "Widget {}() {{\n{}return {};\n}}",
                name,
                " ".repeat(self.width),
                self.indent_tail(&widget, 1)
            );
            name
        })
    }

    fn widget(&mut self, node: &IrNode, placement: &Placement) -> String {
        let role = SemanticRole::detect(node);
        let mut widget = match node {
            IrNode::Text(text) => self.text(node, text, placement),
            _ if role == SemanticRole::Image => self.image(node, placement),
            _ if role == SemanticRole::Input => {
                let field = self.call(
                    "TextField",
                    vec![format!(
                        "decoration: InputDecoration(hintText: '{}')",
                        escape::dart_string(&placeholder_text(node))
                    )],
                );
                let mut args = size_args(node, placement);
                args.push(format!("child: {}", field));
                self.call("SizedBox", args)
            }
            _ => self.container(node, placement),
        };

        if role == SemanticRole::Button {
            widget = self.call(
                "TextButton",
                vec![
                    "onPressed: () {}".to_string(),
                    "style: TextButton.styleFrom(padding: EdgeInsets.zero)".to_string(),
                    format!("child: {}", widget),
                ],
            );
        }
        let base = node.base();
        if let Some(radius) = layer_blur(&base.effects) {
            self.uses_dart_ui = true;
            let sigma = format_number(radius / 2.0);
            widget = self.call(
                "ImageFiltered",
                vec![
                    format!("imageFilter: ImageFilter.blur(sigmaX: {}, sigmaY: {})", sigma, sigma),
                    format!("child: {}", widget),
                ],
            );
        }
        if base.opacity < 1.0 {
            widget = self.call(
                "Opacity",
                vec![format!("opacity: {}", format_number(base.opacity)), format!("child: {}", widget)],
            );
        }
        if base.geometry.rotation != 0.0 {
            widget = self.call(
                "Transform.rotate",
                vec![
                    format!("angle: {}", format_number(-base.geometry.rotation.to_radians())),
                    format!("child: {}", widget),
                ],
            );
        }
        widget
    }

    fn container(&mut self, node: &IrNode, placement: &Placement) -> String {
        let mut args = size_args(node, placement);
        if let Some(layout) = node.layout().filter(|l| l.mode.is_auto()) {
            if !layout.padding.is_zero() {
                args.push(format!("padding: {}", edge_insets(&layout.padding)));
            }
        }
        let decoration = self.decoration(node);
        let clips = node.as_container().is_some_and(|c| c.clips_content);
        match decoration {
            Some(decoration) => args.push(format!("decoration: {}", decoration)),
            None if clips => args.push("decoration: const BoxDecoration()".to_string()),
            None => {}
        }
        if clips {
            args.push("clipBehavior: Clip.hardEdge".to_string());
        }
        if let Some(child) = self.children(node) {
            args.push(format!("child: {}", child));
        }
        self.call("Container", args)
    }

    /// Layout widget holding the visible children, if any.
    fn children(&mut self, node: &IrNode) -> Option<String> {
        let children = placed_children(node);
        if children.is_empty() {
            return None;
        }
        let layout = node.layout().filter(|l| l.mode.is_auto());
        let Some(layout) = layout else {
            let items = children
                .into_iter()
                .map(|child| self.positioned(child))
                .collect();
            return Some(self.call("Stack", vec![format!("children: {}", self.list(items))]));
        };

        let mut items = Vec::new();
        let mut absolute = Vec::new();
        for child in children {
            match child.placement {
                Placement::Flow { grow, .. } => {
                    if !items.is_empty() && layout.item_spacing > 0.0 && layout.mode != LayoutMode::Wrap {
                        let dimension = if layout.mode == LayoutMode::Vertical { "height" } else { "width" };
                        items.push(format!(
                            "const SizedBox({}: {})",
                            dimension,
                            format_number(layout.item_spacing)
                        ));
                    }
                    let call = format!("{}()", self.method(child.node, child.placement));
                    if grow > 0.0 {
                        items.push(format!("Expanded(flex: {}, child: {})", grow.round().max(1.0), call));
                    } else {
                        items.push(call);
                    }
                }
                _ => absolute.push(child),
            }
        }

        let flow = if layout.mode == LayoutMode::Wrap {
            self.call(
                "Wrap",
                vec![
                    format!("spacing: {}", format_number(layout.item_spacing)),
                    format!("runSpacing: {}", format_number(layout.counter_spacing)),
                    format!("children: {}", self.list(items)),
                ],
            )
        } else {
            let widget = if layout.mode == LayoutMode::Vertical { "Column" } else { "Row" };
            self.call(
                widget,
                vec![
                    "mainAxisSize: MainAxisSize.min".to_string(),
                    format!("mainAxisAlignment: {}", main_axis(layout.primary_align)),
                    format!("crossAxisAlignment: {}", cross_axis(layout.counter_align)),
                    format!("children: {}", self.list(items)),
                ],
            )
        };

        if absolute.is_empty() {
            return Some(flow);
        }
        let mut layers = vec![flow];
        layers.extend(absolute.into_iter().map(|child| self.positioned(child)));
        Some(self.call("Stack", vec![format!("children: {}", self.list(layers))]))
    }

    fn positioned(&mut self, child: Placed<'_>) -> String {
        let call = format!("{}()", self.method(child.node, child.placement));
        match child.placement {
            Placement::Absolute { left, top } => format!(
                "Positioned(left: {}, top: {}, child: {})",
                format_number(left),
                format_number(top),
                call
            ),
            _ => call,
        }
    }

    fn decoration(&self, node: &IrNode) -> Option<String> {
        let base = node.base();
        let mut args = Vec::new();
        for fill in base.visible_fills().collect::<Vec<_>>().into_iter().rev() {
            match fill {
                Fill::Solid(solid) if !args.iter().any(|a: &String| a.starts_with("color:")) => {
                    args.push(format!("color: {}", dart_color(&solid.effective_color())));
                }
                Fill::Gradient(gradient) if !args.iter().any(|a| a.starts_with("gradient:")) => {
                    args.push(format!("gradient: {}", self.gradient(gradient, node)));
                }
                Fill::Image(image) if !args.iter().any(|a| a.starts_with("image:")) => {
                    args.push(format!(
                        "image: DecorationImage(image: AssetImage('{}'), fit: {})",
                        escape::dart_string(&image_path(image.image_ref.as_deref())),
                        box_fit(image.scale_mode)
                    ));
                }
                _ => {}
            }
        }
        if base.stroke_weight > 0.0 {
            if let Some(color) = base.visible_strokes().find_map(stroke_color) {
                args.push(format!(
                    "border: Border.all(color: {}, width: {})",
                    dart_color(&color),
                    format_number(base.stroke_weight)
                ));
            }
        }
        if matches!(node, IrNode::Ellipse(_)) {
            args.push("shape: BoxShape.circle".to_string());
        } else if !base.corner_radius.is_zero() {
            let radius = match base.corner_radius.uniform() {
                Some(r) => format!("BorderRadius.circular({})", format_number(r)),
                None => {
                    let [tl, tr, br, bl] = base.corner_radius.corners();
                    format!(
                        "BorderRadius.only(topLeft: Radius.circular({}), topRight: Radius.circular({}), bottomRight: Radius.circular({}), bottomLeft: Radius.circular({}))",
                        format_number(tl),
                        format_number(tr),
                        format_number(br),
                        format_number(bl)
                    )
                }
            };
            args.push(format!("borderRadius: {}", radius));
        }
        if let Some(shadow) = primary_shadow(&base.effects) {
            args.push(format!(
                "boxShadow: [BoxShadow(color: {}, offset: Offset({}, {}), blurRadius: {}, spreadRadius: {})]",
                dart_color(&shadow.color),
                format_number(shadow.offset.x),
                format_number(shadow.offset.y),
                format_number(shadow.radius),
                format_number(shadow.spread)
            ));
        }
        (!args.is_empty()).then(|| self.call("BoxDecoration", args))
    }

    fn gradient(&self, gradient: &Gradient, node: &IrNode) -> String {
        let stops = effective_stops(gradient);
        let colors = stops
            .iter()
            .map(|s| dart_color(&s.color))
            .collect::<Vec<_>>()
            .join(", ");
        let positions = stops
            .iter()
            .map(|s| format_number(s.position))
            .collect::<Vec<_>>()
            .join(", ");
        let angle = gradient_angle(gradient.transform.as_ref());
        let mut args = vec![format!("colors: [{}]", colors), format!("stops: [{}]", positions)];
        let kind = match gradient.kind {
            GradientKind::Linear => {
                if angle != 90.0 {
                    args.push(format!(
                        "transform: GradientRotation({})",
                        format_number((angle - 90.0).to_radians())
                    ));
                }
                "LinearGradient"
            }
            GradientKind::Radial | GradientKind::Diamond => {
                let geometry = node.geometry();
                if geometry.width != geometry.height {
                    args.push("radius: 0.5".to_string());
                }
                "RadialGradient"
            }
            GradientKind::Angular => {
                let start = sweep_start_angle(angle);
                if start != 0.0 {
                    args.push(format!(
                        "transform: GradientRotation({})",
                        format_number(start.to_radians())
                    ));
                }
                "SweepGradient"
            }
        };
        self.call(kind, args)
    }

    fn text(&self, node: &IrNode, text: &TextNode, placement: &Placement) -> String {
        let s = &text.style;
        let characters = match s.case {
            TextCase::Upper => text.characters.to_uppercase(),
            TextCase::Lower => text.characters.to_lowercase(),
            _ => text.characters.clone(),
        };

        let mut style = vec![
            format!("fontFamily: '{}'", escape::dart_string(&s.font_family)),
            format!("fontSize: {}", format_number(s.font_size)),
            format!("fontWeight: FontWeight.w{}", (s.font_weight.clamp(100, 900) + 50) / 100 * 100),
        ];
        if let Some(color) = text.base.fills.iter().rev().find_map(fill_color) {
            style.push(format!("color: {}", dart_color(&color)));
        }
        if s.italic {
            style.push("fontStyle: FontStyle.italic".to_string());
        }
        match s.line_height {
            LineHeight::Auto => {}
            LineHeight::Pixels(px) if s.font_size > 0.0 => {
                style.push(format!("height: {}", format_number(px / s.font_size)));
            }
            LineHeight::Pixels(_) => {}
            LineHeight::Percent(pct) => style.push(format!("height: {}", format_number(pct / 100.0))),
        }
        if s.letter_spacing != 0.0 {
            style.push(format!("letterSpacing: {}", format_number(s.letter_spacing)));
        }
        match s.decoration {
            TextDecoration::None => {}
            TextDecoration::Underline => style.push("decoration: TextDecoration.underline".to_string()),
            TextDecoration::Strikethrough => {
                style.push("decoration: TextDecoration.lineThrough".to_string())
            }
        }

        let mut args = vec![
            format!("'{}'", escape::dart_string(&characters)),
            format!("style: {}", self.call("TextStyle", style)),
        ];
        match s.align_horizontal {
            TextAlignHorizontal::Left => {}
            TextAlignHorizontal::Center => args.push("textAlign: TextAlign.center".to_string()),
            TextAlignHorizontal::Right => args.push("textAlign: TextAlign.right".to_string()),
            TextAlignHorizontal::Justified => args.push("textAlign: TextAlign.justify".to_string()),
        }
        let widget = self.call("Text", args);

        let size = size_args(node, placement);
        if size.is_empty() {
            return widget;
        }
        let mut args = size;
        args.push(format!("child: {}", widget));
        self.call("SizedBox", args)
    }

    fn image(&self, node: &IrNode, placement: &Placement) -> String {
        let (reference, mode) = match node {
            IrNode::Image(image) => (image.image_ref.as_deref(), image.scale_mode),
            other => primary_image(&other.base().fills)
                .map(|i| (i.image_ref.as_deref(), i.scale_mode))
                .unwrap_or((None, ScaleMode::Fill)),
        };
        let mut args = vec![format!("'{}'", escape::dart_string(&image_path(reference)))];
        args.extend(size_args(node, placement));
        args.push(format!("fit: {}", box_fit(mode)));
        let image = self.call("Image.asset", args);
        match node.base().corner_radius.uniform() {
            Some(r) if r > 0.0 => self.call(
                "ClipRRect",
                vec![
                    format!("borderRadius: BorderRadius.circular({})", format_number(r)),
                    format!("child: {}", image),
                ],
            ),
            _ => image,
        }
    }

    /// `Name(\n  arg,\n)` with multi-line arguments indented one level.
    fn call(&self, name: &str, args: Vec<String>) -> String {
        if args.is_empty() {
            return format!("{}()", name);
        }
        let body = args
            .iter()
            .map(|arg| format!("{}{},", " ".repeat(self.width), self.indent_tail(arg, 1)))
            .collect::<Vec<_>>()
            .join("\n");
        format!("{}(\n{}\n)", name, body)
    }

    fn list(&self, items: Vec<String>) -> String {
        if items.is_empty() {
            return "[]".to_string();
        }
        let body = items
            .iter()
            .map(|item| format!("{}{},", " ".repeat(self.width), self.indent_tail(item, 1)))
            .collect::<Vec<_>>()
            .join("\n");
        format!("[\n{}\n]", body)
    }

    /// Indent every line after the first by `levels`.
    fn indent_tail(&self, code: &str, levels: usize) -> String {
        let pad = " ".repeat(self.width * levels);
        code.lines()
            .enumerate()
            .map(|(i, line)| {
                if i == 0 || line.is_empty() {
                    line.to_string()
                } else {
                    format!("{}{}", pad, line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// `width:`/`height:` arguments for a node's placement.
fn size_args(node: &IrNode, placement: &Placement) -> Vec<String> {
    let geometry = node.geometry();
    let (hug_width, hug_height) = hugs_content(node);
    let is_text = matches!(node, IrNode::Text(_));
    let mut args = Vec::new();
    let push = |args: &mut Vec<String>, dimension: &str, value: f64, hug: bool| {
        if !hug && !(is_text && dimension == "height") {
            args.push(format!("{}: {}", dimension, format_number(value)));
        }
    };

    match *placement {
        Placement::Root if node.is_container() && SemanticRole::detect(node) != SemanticRole::Input => {
            let mut constraints = vec![format!("maxWidth: {}", format_number(geometry.width))];
            if !hug_height {
                constraints.push(format!("minHeight: {}", format_number(geometry.height)));
            }
            args.push(format!("constraints: BoxConstraints({})", constraints.join(", ")));
        }
        Placement::Root | Placement::Absolute { .. } => {
            push(&mut args, "width", geometry.width, hug_width);
            push(&mut args, "height", geometry.height, hug_height);
        }
        Placement::Flow { axis, grow, stretch } => {
            let (main, cross) = match axis {
                Axis::Horizontal => (("width", geometry.width, hug_width), ("height", geometry.height, hug_height)),
                Axis::Vertical => (("height", geometry.height, hug_height), ("width", geometry.width, hug_width)),
            };
            if grow <= 0.0 {
                push(&mut args, main.0, main.1, main.2);
            }
            if stretch && axis == Axis::Vertical {
                args.push("width: double.infinity".to_string());
            } else if !stretch {
                push(&mut args, cross.0, cross.1, cross.2);
            }
        }
    }
    args
}

fn edge_insets(padding: &Padding) -> String {
    if padding.is_uniform() {
        format!("const EdgeInsets.all({})", format_number(padding.top))
    } else {
        format!(
            "const EdgeInsets.fromLTRB({}, {}, {}, {})",
            format_number(padding.left),
            format_number(padding.top),
            format_number(padding.right),
            format_number(padding.bottom)
        )
    }
}

fn main_axis(align: PrimaryAxisAlign) -> &'static str {
    match align {
        PrimaryAxisAlign::Min => "MainAxisAlignment.start",
        PrimaryAxisAlign::Center => "MainAxisAlignment.center",
        PrimaryAxisAlign::Max => "MainAxisAlignment.end",
        PrimaryAxisAlign::SpaceBetween => "MainAxisAlignment.spaceBetween",
    }
}

fn cross_axis(align: CounterAxisAlign) -> &'static str {
    match align {
        CounterAxisAlign::Min => "CrossAxisAlignment.start",
        CounterAxisAlign::Center => "CrossAxisAlignment.center",
        CounterAxisAlign::Max => "CrossAxisAlignment.end",
        CounterAxisAlign::Baseline => "CrossAxisAlignment.baseline",
    }
}

fn box_fit(mode: ScaleMode) -> &'static str {
    match mode {
        ScaleMode::Fill | ScaleMode::Crop => "BoxFit.cover",
        ScaleMode::Fit => "BoxFit.contain",
        ScaleMode::Tile => "BoxFit.none",
    }
}

fn dart_color(color: &scenegen_ir::Color) -> String {
    format!("const Color({})", color_to_argb(color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::GenerationOptions;
    use crate::fixtures;

    fn generate(ir: &IrNode, options: GenerationOptions) -> GeneratedFile {
        let mut files = FlutterSerializer::new()
            .generate(ir, &GenerationContext::new(options))
            .unwrap();
        assert_eq!(files.len(), 1);
        files.remove(0)
    }

    #[test]
    fn test_stateless_widget() {
        let file = generate(&fixtures::hello_frame(), GenerationOptions::default());
        assert_eq!(file.filename, "hello_card.dart");
        assert_eq!(file.language, Language::Dart);
        let code = &file.code;
        assert!(code.starts_with("import 'package:flutter/material.dart';\n\nclass HelloCard extends StatelessWidget {\n  const HelloCard({super.key});\n"));
        assert!(code.contains("    return _helloCard1();\n"));
        assert!(code.contains("  Widget _helloCard1() {\n    return Container(\n"));
        assert!(code.contains("padding: const EdgeInsets.all(24),"));
        assert!(code.contains("color: const Color(0xFFFFFFFF),"));
        assert!(code.contains("child: Column(\n"));
        assert!(code.contains("_title2(),"));
        assert!(code.contains("fontSize: 24,"));
        assert!(code.contains("'Hello World',"));
        assert!(code.ends_with("}\n"));
    }

    #[test]
    fn test_legacy_null_safety() {
        let code = generate(
            &fixtures::hello_frame(),
            GenerationOptions::new().with_null_safety(false),
        )
        .code;
        assert!(code.starts_with("// @dart=2.9\n"));
        assert!(code.contains("HelloCard({Key key}) : super(key: key);"));
    }

    #[test]
    fn test_free_form_stack() {
        let code = generate(&fixtures::showcase(), GenerationOptions::default()).code;
        assert!(code.contains("child: Stack(\n"));
        assert!(code.contains("Positioned(left: 24, top: 120, child: _primaryButton"));
        assert!(code.contains("TextButton(\n"));
        assert!(code.contains("Image.asset(\n"));
        assert!(code.contains("'assets/hero.png',"));
        assert!(code.contains("BoxFit.contain"));
        assert!(code.contains("hintText: 'you@example.com'"));
        assert!(code.contains("shape: BoxShape.circle,"));
        assert!(code.contains("clipBehavior: Clip.hardEdge,"));
        assert!(code.contains("const SizedBox(height: 8),"));
        assert!(code.contains("'<b>Sale</b>',"));
        assert!(!code.contains("_hidden"));
    }

    #[test]
    fn test_gradient_rotation() {
        let code = generate(&fixtures::showcase(), GenerationOptions::default()).code;
        assert!(code.contains("gradient: LinearGradient(\n"));
        assert!(code.contains("colors: [const Color(0xFFFF0080), const Color(0xFF4000FF)],"));
        assert!(!code.contains("GradientRotation"));
    }

    #[test]
    fn test_dart_string_escaping() {
        let code = generate(&fixtures::showcase(), GenerationOptions::default()).code;
        assert!(code.contains("'{{ price }}'"));
        let ir = fixtures::text("9:1", "Cost", "It's $5", 16.0);
        let code = generate(&ir, GenerationOptions::default()).code;
        assert!(code.contains("'It\\'s \\$5'"));
    }
}
