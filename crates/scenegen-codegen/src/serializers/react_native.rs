//! React Native component with a `StyleSheet`.

use super::engine_with;
use crate::context::{GenerationContext, OptionKey};
use crate::error::Result;
use crate::escape;
use crate::naming::{self, NameGenerator};
use crate::semantic::{placeholder_text, SemanticRole};
use crate::style::paint::{fill_color, image_path, primary_image, stroke_color};
use crate::style::{color_to_css, effect::primary_shadow, format_number};
use crate::serializer::{GeneratedFile, Language, Serializer};
use crate::traverse::{has_absolute_children, hugs_content, placed_children, Axis, Placement};
use crate::writer::CodeWriter;
use indexmap::IndexMap;
use scenegen_ir::stack::ensure_sufficient_stack;
use scenegen_ir::{
    Color, CounterAxisAlign, IrNode, LayoutMode, LineHeight, PrimaryAxisAlign, ScaleMode,
    TextAlignHorizontal, TextCase, TextDecoration, TextNode,
};
use serde_json::json;
use std::collections::BTreeSet;

const COMPONENT: &str = r#"import React from 'react';
import { {{components}} } from 'react-native';

export default function {{name}}() {
  return (
{{indent body 4}}
  );
}

const styles = StyleSheet.create({
{{indent styles 2}}
});
"#;

const ELEMENT: &str = r#"import React from 'react';
import { {{components}} } from 'react-native';

const styles = StyleSheet.create({
{{indent styles 2}}
});

const {{camel_case name}} = (
{{indent body 2}}
);

export default {{camel_case name}};
"#;

const TEMPLATES: &[(&str, &str)] = &[("component", COMPONENT), ("element", ELEMENT)];

/// React Native serializer.
#[derive(Debug, Default)]
pub struct ReactNativeSerializer;

impl ReactNativeSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl Serializer for ReactNativeSerializer {
    fn id(&self) -> &'static str {
        "react-native"
    }

    fn label(&self) -> &'static str {
        "React Native"
    }

    fn description(&self) -> &'static str {
        "React Native component with StyleSheet"
    }

    fn supported_options(&self) -> &'static [OptionKey] {
        &[OptionKey::ExportAsComponent, OptionKey::ComponentName]
    }

    fn generate(&self, ir: &IrNode, ctx: &GenerationContext) -> Result<Vec<GeneratedFile>> {
        let engine = engine_with(TEMPLATES)?;
        let name = naming::pascal_case(ctx.base_name(ir));
        let mut builder = NativeBuilder {
            names: NameGenerator::new(),
            writer: CodeWriter::new(ctx.format.indent_width),
            styles: Vec::new(),
            components: BTreeSet::from(["StyleSheet"]),
        };
        builder.element(ir, Placement::Root);

        let styles = builder
            .styles
            .iter()
            .map(|(key, style)| {
                let entries = style
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k, v))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}: {{ {} }},", key, entries)
            })
            .collect::<Vec<_>>()
            .join("\n");

        let template = if ctx.options.export_as_component {
            "component"
        } else {
            "element"
        };
        let code = engine.render(
            template,
            &json!({
                "components": builder.components.into_iter().collect::<Vec<_>>().join(", "),
                "name": name,
                "body": builder.writer.finish(),
                "styles": styles,
            }),
        )?;
        Ok(vec![GeneratedFile::new(format!("{}.tsx", name), code, Language::Tsx)])
    }
}

/// Style entries with values already rendered as JavaScript literals.
type NativeStyle = IndexMap<&'static str, String>;

struct NativeBuilder {
    names: NameGenerator,
    writer: CodeWriter,
    styles: Vec<(String, NativeStyle)>,
    components: BTreeSet<&'static str>,
}

impl NativeBuilder {
    fn element(&mut self, node: &IrNode, placement: Placement) {
        ensure_sufficient_stack(|| self.emit(node, placement))
    }

    fn emit(&mut self, node: &IrNode, placement: Placement) {
        let role = SemanticRole::detect(node);
        let style_attr = self.style_attr(node, &placement);
        let a11y = role
            .accessibility_role()
            .map(|r| format!(" accessibilityRole=\"{}\"", r))
            .unwrap_or_default();

        match node {
            IrNode::Text(text) => {
                self.components.insert("Text");
                let content = text_content(text);
                self.writer.line(format!("<Text{}>{}</Text>", style_attr, content));
            }
            _ if role == SemanticRole::Image => {
                self.components.insert("Image");
                let (reference, mode) = image_source(node);
                self.writer.line(format!(
                    "<Image source={{require('./{}')}}{} resizeMode=\"{}\"{} />",
                    escape::js_string(&image_path(reference)),
                    style_attr,
                    resize_mode(mode),
                    a11y
                ));
            }
            _ if role == SemanticRole::Input => {
                self.components.insert("TextInput");
                self.writer.line(format!(
                    "<TextInput{} placeholder=\"{}\" />",
                    style_attr,
                    escape::html_attr(&placeholder_text(node))
                ));
            }
            _ => {
                let tag = if role == SemanticRole::Button { "Pressable" } else { "View" };
                self.components.insert(tag);
                let children = placed_children(node);
                if children.is_empty() {
                    self.writer.line(format!("<{}{}{} />", tag, style_attr, a11y));
                    return;
                }
                self.writer.line(format!("<{}{}{}>", tag, style_attr, a11y));
                self.writer.indent();
                for child in children {
                    self.element(child.node, child.placement);
                }
                self.writer.dedent();
                self.writer.line(format!("</{}>", tag));
            }
        }
    }

    fn style_attr(&mut self, node: &IrNode, placement: &Placement) -> String {
        let key = self.names.identifier(node.name());
        let style = native_style(node, placement);
        if style.is_empty() {
            return String::new();
        }
        let attr = format!(" style={{styles.{}}}", key);
        self.styles.push((key, style));
        attr
    }
}

fn text_content(text: &TextNode) -> String {
    let characters = match text.style.case {
        TextCase::Upper => text.characters.to_uppercase(),
        TextCase::Lower => text.characters.to_lowercase(),
        _ => text.characters.clone(),
    };
    characters
        .lines()
        .map(escape::template_text)
        .collect::<Vec<_>>()
        .join("{'\\n'}")
}

fn image_source(node: &IrNode) -> (Option<&str>, ScaleMode) {
    match node {
        IrNode::Image(image) => (image.image_ref.as_deref(), image.scale_mode),
        other => primary_image(&other.base().fills)
            .map(|i| (i.image_ref.as_deref(), i.scale_mode))
            .unwrap_or((None, ScaleMode::Fill)),
    }
}

fn resize_mode(mode: ScaleMode) -> &'static str {
    match mode {
        ScaleMode::Fill | ScaleMode::Crop => "cover",
        ScaleMode::Fit => "contain",
        ScaleMode::Tile => "repeat",
    }
}

fn num(value: f64) -> String {
    format_number(value)
}

fn string(value: &str) -> String {
    format!("'{}'", escape::js_string(value))
}

/// Style object for one node. Lengths are unitless density-independent pixels.
fn native_style(node: &IrNode, placement: &Placement) -> NativeStyle {
    let mut s = NativeStyle::new();
    let base = node.base();
    let geometry = &base.geometry;
    let (hug_width, hug_height) = hugs_content(node);
    let is_text = matches!(node, IrNode::Text(_));

    match *placement {
        Placement::Root => {
            s.insert("width", string("100%"));
            s.insert("maxWidth", num(geometry.width));
            if !hug_height && !is_text {
                s.insert("minHeight", num(geometry.height));
            }
        }
        Placement::Flow { axis, grow, stretch } => {
            let (main, cross) = match axis {
                Axis::Horizontal => (("width", geometry.width, hug_width), ("height", geometry.height, hug_height)),
                Axis::Vertical => (("height", geometry.height, hug_height), ("width", geometry.width, hug_width)),
            };
            if grow > 0.0 {
                s.insert("flexGrow", num(grow));
            } else {
                s.insert("flexShrink", "0".to_string());
                if !main.2 && !(is_text && main.0 == "height") {
                    s.insert(main.0, num(main.1));
                }
            }
            if stretch {
                s.insert("alignSelf", string("stretch"));
            } else if !cross.2 && !(is_text && cross.0 == "height") {
                s.insert(cross.0, num(cross.1));
            }
        }
        Placement::Absolute { left, top } => {
            s.insert("position", string("absolute"));
            s.insert("left", num(left));
            s.insert("top", num(top));
            if !hug_width {
                s.insert("width", num(geometry.width));
            }
            if !hug_height && !is_text {
                s.insert("height", num(geometry.height));
            }
        }
    }
    if geometry.rotation != 0.0 {
        s.insert(
            "transform",
            format!("[{{ rotate: '{}deg' }}]", format_number(-geometry.rotation)),
        );
    }

    if let Some(layout) = node.layout().filter(|l| l.mode.is_auto()) {
        s.insert(
            "flexDirection",
            string(if layout.mode == LayoutMode::Vertical { "column" } else { "row" }),
        );
        if layout.mode == LayoutMode::Wrap {
            s.insert("flexWrap", string("wrap"));
            if layout.counter_spacing > 0.0 {
                s.insert("rowGap", num(layout.counter_spacing));
            }
            if layout.item_spacing > 0.0 {
                s.insert("columnGap", num(layout.item_spacing));
            }
        } else if layout.item_spacing > 0.0 {
            s.insert("gap", num(layout.item_spacing));
        }
        s.insert(
            "justifyContent",
            string(match layout.primary_align {
                PrimaryAxisAlign::Min => "flex-start",
                PrimaryAxisAlign::Center => "center",
                PrimaryAxisAlign::Max => "flex-end",
                PrimaryAxisAlign::SpaceBetween => "space-between",
            }),
        );
        s.insert(
            "alignItems",
            string(match layout.counter_align {
                CounterAxisAlign::Min => "flex-start",
                CounterAxisAlign::Center => "center",
                CounterAxisAlign::Max => "flex-end",
                CounterAxisAlign::Baseline => "baseline",
            }),
        );
        let p = &layout.padding;
        if p.is_uniform() && !p.is_zero() {
            s.insert("padding", num(p.top));
        } else if !p.is_zero() {
            s.insert("paddingTop", num(p.top));
            s.insert("paddingRight", num(p.right));
            s.insert("paddingBottom", num(p.bottom));
            s.insert("paddingLeft", num(p.left));
        }
    } else if matches!(placement, Placement::Flow { .. }) && has_absolute_children(node) {
        s.insert("position", string("relative"));
    }
    if node.as_container().is_some_and(|c| c.clips_content) {
        s.insert("overflow", string("hidden"));
    }

    if let IrNode::Text(text) = node {
        typography(&mut s, text);
    } else {
        // Gradients have no core primitive; the first stop stands in.
        if let Some(color) = base.fills.iter().rev().find_map(fill_color) {
            s.insert("backgroundColor", string(&color_to_css(&color)));
        }
        if let Some(color) = base.visible_strokes().find_map(stroke_color) {
            if base.stroke_weight > 0.0 {
                s.insert("borderWidth", num(base.stroke_weight));
                s.insert("borderColor", string(&color_to_css(&color)));
            }
        }
        match base.corner_radius.uniform() {
            Some(radius) if radius > 0.0 => {
                s.insert("borderRadius", num(radius));
            }
            Some(_) => {}
            None => {
                let [tl, tr, br, bl] = base.corner_radius.corners();
                s.insert("borderTopLeftRadius", num(tl));
                s.insert("borderTopRightRadius", num(tr));
                s.insert("borderBottomRightRadius", num(br));
                s.insert("borderBottomLeftRadius", num(bl));
            }
        }
        if matches!(node, IrNode::Ellipse(_)) {
            s.insert("borderRadius", num(geometry.width.min(geometry.height) / 2.0));
        }
        if let Some(shadow) = primary_shadow(&base.effects) {
            s.insert("shadowColor", string(&color_to_css(&Color { a: 1.0, ..shadow.color })));
            s.insert(
                "shadowOffset",
                format!("{{ width: {}, height: {} }}", num(shadow.offset.x), num(shadow.offset.y)),
            );
            s.insert("shadowOpacity", num(shadow.color.a));
            s.insert("shadowRadius", num(shadow.radius / 2.0));
            s.insert("elevation", num((shadow.radius / 2.0).round()));
        }
    }
    if base.opacity < 1.0 {
        s.insert("opacity", num(base.opacity));
    }
    s
}

fn typography(s: &mut NativeStyle, text: &TextNode) {
    let style = &text.style;
    if let Some(color) = text.base.fills.iter().rev().find_map(fill_color) {
        s.insert("color", string(&color_to_css(&color)));
    }
    s.insert("fontFamily", string(&style.font_family));
    s.insert("fontSize", num(style.font_size));
    s.insert("fontWeight", string(&style.font_weight.to_string()));
    if style.italic {
        s.insert("fontStyle", string("italic"));
    }
    match style.line_height {
        LineHeight::Auto => {}
        LineHeight::Pixels(px) => {
            s.insert("lineHeight", num(px));
        }
        LineHeight::Percent(pct) => {
            s.insert("lineHeight", num(style.font_size * pct / 100.0));
        }
    }
    if style.letter_spacing != 0.0 {
        s.insert("letterSpacing", num(style.letter_spacing));
    }
    let align = match style.align_horizontal {
        TextAlignHorizontal::Left => None,
        TextAlignHorizontal::Center => Some("center"),
        TextAlignHorizontal::Right => Some("right"),
        TextAlignHorizontal::Justified => Some("justify"),
    };
    if let Some(align) = align {
        s.insert("textAlign", string(align));
    }
    let decoration = match style.decoration {
        TextDecoration::None => None,
        TextDecoration::Underline => Some("underline"),
        TextDecoration::Strikethrough => Some("line-through"),
    };
    if let Some(decoration) = decoration {
        s.insert("textDecorationLine", string(decoration));
    }
    if style.case == TextCase::Title {
        s.insert("textTransform", string("capitalize"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::GenerationOptions;
    use crate::fixtures;

    fn generate(ir: &IrNode, options: GenerationOptions) -> String {
        let files = ReactNativeSerializer::new()
            .generate(ir, &GenerationContext::new(options))
            .unwrap();
        assert_eq!(files.len(), 1);
        files.into_iter().next().unwrap().code
    }

    #[test]
    fn test_stylesheet_component() {
        let code = generate(&fixtures::hello_frame(), GenerationOptions::default());
        assert!(code.starts_with("import React from 'react';\nimport { StyleSheet, Text, View } from 'react-native';\n"));
        assert!(code.contains("export default function HelloCard() {"));
        assert!(code.contains("    <View style={styles.helloCard1}>"));
        assert!(code.contains("      <Text style={styles.title2}>Hello World</Text>"));
        assert!(code.contains("flexDirection: 'column'"));
        assert!(code.contains("gap: 16"));
        assert!(code.contains("padding: 24"));
        assert!(code.contains("  title2: { flexShrink: 0, width: 200, color: 'rgb(17, 24, 39)', fontFamily: 'Inter', fontSize: 24, fontWeight: '400' },"));
    }

    #[test]
    fn test_native_elements() {
        let code = generate(&fixtures::showcase(), GenerationOptions::default());
        assert!(code.contains("import { Image, Pressable, StyleSheet, Text, TextInput, View } from 'react-native';"));
        assert!(code.contains("accessibilityRole=\"button\""));
        assert!(code.contains("<Image source={require('./assets/hero.png')}"));
        assert!(code.contains("resizeMode=\"contain\""));
        assert!(code.contains("placeholder=\"you@example.com\""));
        assert!(code.contains("shadowOffset: { width: 0, height: 4 }"));
        assert!(code.contains("shadowOpacity: 0.25"));
        assert!(code.contains("&lt;b&gt;Sale&lt;/b&gt;"));
        assert!(!code.contains("styles.hidden"));
    }

    #[test]
    fn test_element_export_defines_styles_first() {
        let code = generate(
            &fixtures::twin_siblings(),
            GenerationOptions::new().with_export_as_component(false),
        );
        let styles = code.find("const styles").unwrap();
        let element = code.find("const row = (").unwrap();
        assert!(styles < element);
        assert!(code.contains("styles.item2"));
        assert!(code.contains("styles.item3"));
    }
}
