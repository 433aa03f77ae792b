//! Static HTML page with CSS.

use super::engine_with;
use crate::context::{GenerationContext, OptionKey};
use crate::css::RESET;
use crate::error::Result;
use crate::escape;
use crate::markup::{self, Dialect, StyleMode};
use crate::naming;
use crate::serializer::{GeneratedFile, Language, Serializer};
use crate::templates::indent;
use scenegen_ir::IrNode;
use serde_json::json;

const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{{title}}</title>
{{indent head 2}}
</head>
<body>
{{indent body 2}}
</body>
</html>
"#;

const TAILWIND_CDN: &str = r#"<script src="https://cdn.tailwindcss.com"></script>"#;

const TEMPLATES: &[(&str, &str)] = &[("page", PAGE)];

/// HTML serializer.
#[derive(Debug, Default)]
pub struct HtmlSerializer;

impl HtmlSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl Serializer for HtmlSerializer {
    fn id(&self) -> &'static str {
        "html"
    }

    fn label(&self) -> &'static str {
        "HTML/CSS"
    }

    fn description(&self) -> &'static str {
        "Static HTML page with CSS"
    }

    fn supported_options(&self) -> &'static [OptionKey] {
        &[OptionKey::InlineCss, OptionKey::UseTailwind, OptionKey::ComponentName]
    }

    fn generate(&self, ir: &IrNode, ctx: &GenerationContext) -> Result<Vec<GeneratedFile>> {
        let engine = engine_with(TEMPLATES)?;
        let base_name = ctx.base_name(ir);
        let file_stem = naming::kebab_case(base_name);
        let mode = StyleMode::from_options(&ctx.options);
        let markup = markup::render(ir, Dialect::Html, mode, &ctx.format);
        let width = ctx.format.indent_width;

        let mut head = Vec::new();
        if mode == StyleMode::Tailwind {
            head.push(TAILWIND_CDN.to_string());
        }
        if mode == StyleMode::External {
            head.push(format!("<link rel=\"stylesheet\" href=\"{}.css\">", file_stem));
        } else {
            head.push(format!("<style>\n{}\n</style>", indent(RESET, width)));
        }

        let page = engine.render(
            "page",
            &json!({
                "title": escape::html_text(base_name),
                "head": head.join("\n"),
                "body": markup.body,
            }),
        )?;

        let mut files = vec![GeneratedFile::new(
            format!("{}.html", file_stem),
            page,
            Language::Html,
        )];
        if mode == StyleMode::External {
            let mut sheet = RESET.to_string();
            if !markup.rules.is_empty() {
                sheet.push_str("\n\n");
                sheet.push_str(&markup.stylesheet(width));
            }
            sheet.push('\n');
            files.push(GeneratedFile::new(format!("{}.css", file_stem), sheet, Language::Css));
        }
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::GenerationOptions;
    use crate::fixtures;

    fn generate(ir: &IrNode, options: GenerationOptions) -> Vec<GeneratedFile> {
        HtmlSerializer::new()
            .generate(ir, &GenerationContext::new(options))
            .unwrap()
    }

    #[test]
    fn test_heading_and_flex_column() {
        let files = generate(&fixtures::hello_frame(), GenerationOptions::default());
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].filename, "hello-card.html");
        let page = &files[0].code;
        assert!(page.starts_with("<!DOCTYPE html>\n"));
        assert!(page.contains("<title>Hello Card</title>"));
        assert!(page.contains("  <h2 class=\"title-2\""));
        assert!(page.contains("flex-direction: column"));
        assert!(page.contains("gap: 1rem"));
        assert!(page.contains("    box-sizing: border-box;"));
        assert!(page.ends_with("</html>\n"));
    }

    #[test]
    fn test_external_stylesheet() {
        let files = generate(
            &fixtures::hello_frame(),
            GenerationOptions::new().with_inline_css(false),
        );
        assert_eq!(files.len(), 2);
        assert_eq!(files[1].filename, "hello-card.css");
        assert_eq!(files[1].language, Language::Css);
        assert!(files[0].code.contains("<link rel=\"stylesheet\" href=\"hello-card.css\">"));
        assert!(!files[0].code.contains("style="));
        assert!(files[1].code.contains(".title-2 {\n  flex-shrink: 0;\n  width: 200px;\n"));
        assert!(files[1].code.contains("  font-family: 'Inter', sans-serif;\n"));
        assert!(files[1].code.contains("  gap: 1rem;"));
    }

    #[test]
    fn test_tailwind_stub() {
        let files = generate(&fixtures::hello_frame(), GenerationOptions::new().with_tailwind(true));
        assert_eq!(files.len(), 1);
        assert!(files[0].code.contains(TAILWIND_CDN));
        assert!(files[0].code.contains("flex flex-col"));
    }

    #[test]
    fn test_sibling_classes_unique_and_idempotent() {
        let ir = fixtures::twin_siblings();
        let first = generate(&ir, GenerationOptions::default());
        let second = generate(&ir, GenerationOptions::default());
        assert_eq!(first, second);
        assert!(first[0].code.contains("class=\"item-2\""));
        assert!(first[0].code.contains("class=\"item-3\""));
    }
}
