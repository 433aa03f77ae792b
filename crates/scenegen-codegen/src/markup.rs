//! Markup emission shared by the HTML, React and Vue serializers.

use crate::context::{FormatConfig, GenerationOptions};
use crate::css::{self, Declarations};
use crate::escape;
use crate::naming::NameGenerator;
use crate::semantic::{placeholder_text, HeadingLevel, SemanticRole};
use crate::style::paint::{image_path, primary_image};
use crate::traverse::{placed_children, Placement};
use crate::writer::CodeWriter;
use scenegen_ir::stack::ensure_sufficient_stack;
use scenegen_ir::{IrNode, TextNode};
use tracing::trace;

/// Markup flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Html,
    Jsx,
    Vue,
}

impl Dialect {
    fn class_attr(self) -> &'static str {
        match self {
            Self::Jsx => "className",
            Self::Html | Self::Vue => "class",
        }
    }

    fn void_close(self) -> &'static str {
        match self {
            Self::Html => ">",
            Self::Jsx | Self::Vue => " />",
        }
    }

    fn line_break(self) -> &'static str {
        match self {
            Self::Html => "<br>",
            Self::Jsx | Self::Vue => "<br />",
        }
    }

    fn text(self, text: &str) -> String {
        match self {
            Self::Html => escape::html_text(text),
            Self::Jsx | Self::Vue => escape::template_text(text),
        }
    }
}

/// Where computed declarations end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleMode {
    /// `style` attributes on each element.
    Inline,
    /// Class rules collected into a stylesheet.
    External,
    /// Utility classes on each element.
    Tailwind,
}

impl StyleMode {
    pub fn from_options(options: &GenerationOptions) -> Self {
        if options.use_tailwind {
            Self::Tailwind
        } else if options.inline_css {
            Self::Inline
        } else {
            Self::External
        }
    }
}

/// A class rule for the external stylesheet.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    pub class_name: String,
    pub declarations: Declarations,
}

/// Rendered element tree plus the rules it references.
#[derive(Debug, Clone, PartialEq)]
pub struct Markup {
    pub body: String,
    pub rules: Vec<StyleRule>,
}

impl Markup {
    /// Class rules as a stylesheet, one blank line between rules.
    pub fn stylesheet(&self, indent: usize) -> String {
        self.rules
            .iter()
            .map(|rule| rule.declarations.to_rule(&format!(".{}", rule.class_name), indent))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Render `root` and its visible descendants.
pub fn render(root: &IrNode, dialect: Dialect, mode: StyleMode, format: &FormatConfig) -> Markup {
    let mut builder = MarkupBuilder {
        dialect,
        mode,
        format,
        names: NameGenerator::new(),
        writer: CodeWriter::new(format.indent_width),
        rules: Vec::new(),
    };
    builder.element(root, Placement::Root);
    Markup {
        body: builder.writer.finish(),
        rules: builder.rules,
    }
}

struct MarkupBuilder<'a> {
    dialect: Dialect,
    mode: StyleMode,
    format: &'a FormatConfig,
    names: NameGenerator,
    writer: CodeWriter,
    rules: Vec<StyleRule>,
}

impl MarkupBuilder<'_> {
    fn element(&mut self, node: &IrNode, placement: Placement) {
        ensure_sufficient_stack(|| self.emit(node, placement))
    }

    fn emit(&mut self, node: &IrNode, placement: Placement) {
        let role = SemanticRole::detect(node);
        let attrs = self.attributes(node, &placement);
        trace!(node = node.id(), ?role, "emit element");

        match node {
            IrNode::Text(text) => self.text(text, &attrs),
            _ if role == SemanticRole::Image => {
                let line = format!(
                    "<img{} src=\"{}\" alt=\"{}\"{}",
                    attrs,
                    escape::html_attr(&image_source(node)),
                    escape::html_attr(node.name()),
                    self.dialect.void_close()
                );
                self.writer.line(line);
            }
            _ if role == SemanticRole::Input => {
                let line = format!(
                    "<input{} type=\"text\" placeholder=\"{}\"{}",
                    attrs,
                    escape::html_attr(&placeholder_text(node)),
                    self.dialect.void_close()
                );
                self.writer.line(line);
            }
            _ => self.container(node, role, &attrs),
        }
    }

    fn text(&mut self, text: &TextNode, attrs: &str) {
        let tag = HeadingLevel::from_font_size(text.style.font_size).html_tag();
        let content = text
            .characters
            .lines()
            .map(|line| self.dialect.text(line))
            .collect::<Vec<_>>()
            .join(self.dialect.line_break());
        self.writer.line(format!("<{}{}>{}</{}>", tag, attrs, content, tag));
    }

    fn container(&mut self, node: &IrNode, role: SemanticRole, attrs: &str) {
        let tag = role.html_tag();
        let extra = if role == SemanticRole::Button { " type=\"button\"" } else { "" };
        let children = placed_children(node);

        if children.is_empty() {
            self.writer.line(format!("<{}{}{}></{}>", tag, attrs, extra, tag));
            return;
        }

        self.writer.line(format!("<{}{}{}>", tag, attrs, extra));
        self.writer.indent();
        for child in children {
            if role == SemanticRole::List {
                self.writer.line("<li>");
                self.writer.indent();
                self.element(child.node, child.placement);
                self.writer.dedent();
                self.writer.line("</li>");
            } else {
                self.element(child.node, child.placement);
            }
        }
        self.writer.dedent();
        self.writer.line(format!("</{}>", tag));
    }

    fn attributes(&mut self, node: &IrNode, placement: &Placement) -> String {
        let class_name = self.names.class_name(node.name());
        let declarations = css::declarations(node, placement, self.format);
        let class_attr = self.dialect.class_attr();

        match self.mode {
            StyleMode::External => {
                let attrs = format!(" {}=\"{}\"", class_attr, class_name);
                if !declarations.is_empty() {
                    self.rules.push(StyleRule {
                        class_name,
                        declarations,
                    });
                }
                attrs
            }
            StyleMode::Tailwind => {
                let mut classes = vec![class_name];
                classes.extend(declarations.to_tailwind());
                format!(" {}=\"{}\"", class_attr, escape::html_attr(&classes.join(" ")))
            }
            StyleMode::Inline if declarations.is_empty() => {
                format!(" {}=\"{}\"", class_attr, class_name)
            }
            StyleMode::Inline => match self.dialect {
                Dialect::Jsx => format!(
                    " className=\"{}\" style={{{{ {} }}}}",
                    class_name,
                    declarations.to_js_object()
                ),
                Dialect::Html | Dialect::Vue => format!(
                    " class=\"{}\" style=\"{}\"",
                    class_name,
                    escape::html_attr(&declarations.to_inline())
                ),
            },
        }
    }
}

fn image_source(node: &IrNode) -> String {
    let reference = match node {
        IrNode::Image(image) => image.image_ref.as_deref(),
        other => primary_image(&other.base().fills).and_then(|i| i.image_ref.as_deref()),
    };
    image_path(reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn html(root: &IrNode, mode: StyleMode) -> Markup {
        render(root, Dialect::Html, mode, &FormatConfig::default())
    }

    #[test]
    fn test_heading_in_flex_column() {
        let markup = html(&fixtures::hello_frame(), StyleMode::Inline);
        assert!(markup.body.contains("<h2 class=\"title-2\""));
        assert!(markup.body.contains(">Hello World</h2>"));
        assert!(markup.body.contains("display: flex; flex-direction: column"));
        assert!(markup.body.contains("gap: 1rem"));
        assert!(markup.rules.is_empty());
    }

    #[test]
    fn test_external_rules() {
        let markup = html(&fixtures::hello_frame(), StyleMode::External);
        assert!(!markup.body.contains("style="));
        assert_eq!(markup.rules.len(), 2);
        let sheet = markup.stylesheet(2);
        assert!(sheet.starts_with(".hello-card-1 {\n  position: relative;"));
        assert!(sheet.contains("  gap: 1rem;\n"));
    }

    #[test]
    fn test_sibling_names_distinct() {
        let markup = html(&fixtures::twin_siblings(), StyleMode::Inline);
        assert!(markup.body.contains("class=\"item-2\""));
        assert!(markup.body.contains("class=\"item-3\""));
    }

    #[test]
    fn test_jsx_inline_style() {
        let markup = render(
            &fixtures::hello_frame(),
            Dialect::Jsx,
            StyleMode::Inline,
            &FormatConfig::default(),
        );
        assert!(markup.body.contains("className=\"hello-card-1\" style={{ position: 'relative'"));
        assert!(markup.body.contains("display: 'flex', flexDirection: 'column'"));
    }

    #[test]
    fn test_semantic_elements() {
        let markup = html(&fixtures::showcase(), StyleMode::External);
        let body = &markup.body;
        assert!(body.contains("<button class=\"primary-button-"));
        assert!(body.contains(" type=\"button\">"));
        assert!(body.contains("<img class=\"hero-image-"));
        assert!(body.contains("src=\"assets/hero.png\""));
        assert!(body.contains("placeholder=\"you@example.com\">"));
        assert!(body.contains("<h1 "));
        assert!(!body.contains("Hidden"));
        assert!(body.contains("&lt;b&gt;Sale&lt;/b&gt;"));
        assert!(body.contains("<li>"));
    }

    #[test]
    fn test_template_braces_escaped() {
        let markup = render(
            &fixtures::showcase(),
            Dialect::Vue,
            StyleMode::Inline,
            &FormatConfig::default(),
        );
        assert!(markup.body.contains("&#123;&#123; price &#125;&#125;"));
        assert!(!markup.body.contains("{{ price }}"));
    }

    #[test]
    fn test_tailwind_classes() {
        let markup = html(&fixtures::hello_frame(), StyleMode::Tailwind);
        assert!(markup.body.contains("class=\"hello-card-1 relative [width:100%]"));
        assert!(markup.body.contains(" flex flex-col "));
        assert!(markup.body.contains("[gap:1rem]"));
    }
}
