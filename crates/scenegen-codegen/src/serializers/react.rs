//! React function component in TypeScript.

use super::engine_with;
use crate::context::{GenerationContext, OptionKey};
use crate::error::Result;
use crate::markup::{self, Dialect, StyleMode};
use crate::naming;
use crate::serializer::{GeneratedFile, Language, Serializer};
use scenegen_ir::IrNode;
use serde_json::json;

const COMPONENT: &str = r#"{{imports}}

export default function {{name}}() {
  return (
{{indent body 4}}
  );
}
"#;

const ELEMENT: &str = r#"{{imports}}

const {{camel_case name}} = (
{{indent body 2}}
);

export default {{camel_case name}};
"#;

const TEMPLATES: &[(&str, &str)] = &[("component", COMPONENT), ("element", ELEMENT)];

/// React code serializer.
#[derive(Debug, Default)]
pub struct ReactSerializer;

impl ReactSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl Serializer for ReactSerializer {
    fn id(&self) -> &'static str {
        "react"
    }

    fn label(&self) -> &'static str {
        "React"
    }

    fn description(&self) -> &'static str {
        "React function component in TypeScript"
    }

    fn supported_options(&self) -> &'static [OptionKey] {
        &[
            OptionKey::InlineCss,
            OptionKey::UseTailwind,
            OptionKey::ExportAsComponent,
            OptionKey::ComponentName,
        ]
    }

    fn generate(&self, ir: &IrNode, ctx: &GenerationContext) -> Result<Vec<GeneratedFile>> {
        let engine = engine_with(TEMPLATES)?;
        let name = naming::pascal_case(ctx.base_name(ir));
        let mode = StyleMode::from_options(&ctx.options);
        let markup = markup::render(ir, Dialect::Jsx, mode, &ctx.format);

        let mut imports = vec!["import React from 'react';".to_string()];
        if mode == StyleMode::External {
            imports.push(format!("import './{}.css';", name));
        }

        let template = if ctx.options.export_as_component {
            "component"
        } else {
            "element"
        };
        let code = engine.render(
            template,
            &json!({
                "imports": imports.join("\n"),
                "name": name,
                "body": markup.body,
            }),
        )?;

        let mut files = vec![GeneratedFile::new(format!("{}.tsx", name), code, Language::Tsx)];
        if mode == StyleMode::External {
            let mut sheet = markup.stylesheet(ctx.format.indent_width);
            sheet.push('\n');
            files.push(GeneratedFile::new(format!("{}.css", name), sheet, Language::Css));
        }
        Ok(files)
    }
}
