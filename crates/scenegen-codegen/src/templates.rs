//! Template engine for component shells.

use crate::error::{CodegenError, Result};
use crate::naming;
use handlebars::{
    no_escape, Context, Handlebars, Helper, HelperResult, Output, RenderContext,
};
use serde::Serialize;

/// Template engine using Handlebars.
///
/// Output is source code, so HTML escaping is disabled; callers escape
/// values for their target before rendering.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create a new template engine.
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(no_escape);
        handlebars.set_strict_mode(true);

        // Register custom helpers
        Self::register_helpers(&mut handlebars);

        Self { handlebars }
    }

    /// Register a template.
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(CodegenError::InvalidTemplate)?;
        Ok(())
    }

    /// Render a template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        self.handlebars
            .render(name, data)
            .map_err(CodegenError::Template)
    }

    /// Render a template string directly.
    pub fn render_string<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        self.handlebars
            .render_template(template, data)
            .map_err(CodegenError::Template)
    }

    /// Register custom helpers.
    fn register_helpers(handlebars: &mut Handlebars) {
        handlebars.register_helper("pascal_case", Box::new(case_helper(naming::pascal_case)));
        handlebars.register_helper("camel_case", Box::new(case_helper(naming::camel_case)));

        // Indent every non-blank line of a block
        handlebars.register_helper(
            "indent",
            Box::new(
                |h: &Helper,
                 _r: &Handlebars,
                 _ctx: &Context,
                 _rc: &mut RenderContext,
                 out: &mut dyn Output|
                 -> HelperResult {
                    let content = h
                        .param(0)
                        .and_then(|v| v.value().as_str())
                        .unwrap_or("");
                    let spaces = h
                        .param(1)
                        .and_then(|v| v.value().as_u64())
                        .unwrap_or(4) as usize;

                    out.write(&indent(content, spaces))?;
                    Ok(())
                },
            ),
        );
    }
}

impl<'a> Default for TemplateEngine<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper applying a name conversion to its first parameter.
fn case_helper(
    convert: fn(&str) -> String,
) -> impl Fn(&Helper, &Handlebars, &Context, &mut RenderContext, &mut dyn Output) -> HelperResult
       + Send
       + Sync {
    move |h: &Helper,
          _r: &Handlebars,
          _ctx: &Context,
          _rc: &mut RenderContext,
          out: &mut dyn Output|
          -> HelperResult {
        let param = h
            .param(0)
            .and_then(|v| v.value().as_str())
            .unwrap_or("");
        out.write(&convert(param))?;
        Ok(())
    }
}

/// Prefix every non-blank line of `content` with `spaces` spaces.
pub fn indent(content: &str, spaces: usize) -> String {
    let prefix = " ".repeat(spaces);
    content
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{}{}", prefix, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
