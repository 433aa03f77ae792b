//! Vue single-file component.

use super::engine_with;
use crate::context::{GenerationContext, OptionKey};
use crate::error::Result;
use crate::markup::{self, Dialect, StyleMode};
use crate::naming;
use crate::serializer::{GeneratedFile, Language, Serializer};
use crate::templates::indent;
use scenegen_ir::IrNode;
use serde_json::json;

const SFC: &str = r#"<template>
{{indent body 2}}
</template>

<script lang="ts">
import { defineComponent } from 'vue';

export default defineComponent({
  name: '{{pascal_case base}}',
});
</script>
{{style}}"#;

const TEMPLATES: &[(&str, &str)] = &[("sfc", SFC)];

/// Vue serializer.
#[derive(Debug, Default)]
pub struct VueSerializer;

impl VueSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl Serializer for VueSerializer {
    fn id(&self) -> &'static str {
        "vue"
    }

    fn label(&self) -> &'static str {
        "Vue"
    }

    fn description(&self) -> &'static str {
        "Vue single-file component"
    }

    fn supported_options(&self) -> &'static [OptionKey] {
        &[OptionKey::InlineCss, OptionKey::UseTailwind, OptionKey::ComponentName]
    }

    fn generate(&self, ir: &IrNode, ctx: &GenerationContext) -> Result<Vec<GeneratedFile>> {
        let engine = engine_with(TEMPLATES)?;
        let name = naming::pascal_case(ctx.base_name(ir));
        let mode = StyleMode::from_options(&ctx.options);
        let markup = markup::render(ir, Dialect::Vue, mode, &ctx.format);

        let style = if mode == StyleMode::External && !markup.rules.is_empty() {
            format!(
                "\n<style scoped>\n{}\n</style>\n",
                indent(&markup.stylesheet(ctx.format.indent_width), ctx.format.indent_width)
            )
        } else {
            String::new()
        };

        let code = engine.render(
            "sfc",
            &json!({
                "base": ctx.base_name(ir),
                "body": markup.body,
                "style": style,
            }),
        )?;
        Ok(vec![GeneratedFile::new(format!("{}.vue", name), code, Language::Vue)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::GenerationOptions;
    use crate::fixtures;

    fn generate(ir: &IrNode, options: GenerationOptions) -> GeneratedFile {
        let mut files = VueSerializer::new()
            .generate(ir, &GenerationContext::new(options))
            .unwrap();
        assert_eq!(files.len(), 1);
        files.remove(0)
    }

    #[test]
    fn test_single_file_component() {
        let file = generate(&fixtures::hello_frame(), GenerationOptions::default());
        assert_eq!(file.filename, "HelloCard.vue");
        assert_eq!(file.language, Language::Vue);
        let code = &file.code;
        assert!(code.starts_with("<template>\n  <article class=\"hello-card-1\""));
        assert!(code.contains("    <h2 class=\"title-2\""));
        assert!(code.contains("name: 'HelloCard',"));
        assert!(code.ends_with("</script>\n"));
        assert!(!code.contains("<style"));
    }

    #[test]
    fn test_scoped_style_block() {
        let code = generate(&fixtures::hello_frame(), GenerationOptions::new().with_inline_css(false)).code;
        assert!(code.contains("</script>\n\n<style scoped>\n  .hello-card-1 {\n"));
        assert!(code.ends_with("</style>\n"));
        assert!(!code.contains("style=\""));
    }

    #[test]
    fn test_interpolation_is_escaped() {
        let code = generate(&fixtures::showcase(), GenerationOptions::default()).code;
        assert!(!code.contains("{{ price }}"));
        assert!(code.contains("&lt;b&gt;Sale&lt;/b&gt;"));
    }

    #[test]
    fn test_component_name_option() {
        let file = generate(
            &fixtures::hello_frame(),
            GenerationOptions::new().with_component_name("hero card"),
        );
        assert_eq!(file.filename, "HeroCard.vue");
        assert!(file.code.contains("name: 'HeroCard',"));
    }
}
