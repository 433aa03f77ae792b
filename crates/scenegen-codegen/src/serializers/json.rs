//! JSON serializer: the IR itself, pretty-printed.

use crate::context::{GenerationContext, OptionKey};
use crate::error::Result;
use crate::naming;
use crate::serializer::{GeneratedFile, Language, Serializer};
use scenegen_ir::stack::with_deep_stack;
use scenegen_ir::IrNode;

/// Emits the IR tree as `<name>.json`, hidden nodes included.
#[derive(Debug, Default)]
pub struct JsonSerializer;

impl JsonSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl Serializer for JsonSerializer {
    fn id(&self) -> &'static str {
        "json"
    }

    fn label(&self) -> &'static str {
        "JSON"
    }

    fn description(&self) -> &'static str {
        "Intermediate representation as JSON"
    }

    fn supported_options(&self) -> &'static [OptionKey] {
        &[OptionKey::ComponentName]
    }

    fn generate(&self, ir: &IrNode, ctx: &GenerationContext) -> Result<Vec<GeneratedFile>> {
        let mut code = with_deep_stack(|| ir.to_json_pretty())?;
        code.push('\n');
        let filename = format!("{}.json", naming::kebab_case(ctx.base_name(ir)));
        Ok(vec![GeneratedFile::new(filename, code, Language::Json)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::GenerationOptions;
    use crate::fixtures;

    #[test]
    fn test_round_trips() {
        let ir = fixtures::showcase();
        let files = JsonSerializer::new().generate(&ir, &GenerationContext::default()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].filename, "landing.json");
        assert_eq!(files[0].language, Language::Json);
        assert_eq!(IrNode::from_json(&files[0].code).unwrap(), ir);
        assert!(files[0].code.contains("\"Hidden\""));
    }

    #[test]
    fn test_component_name_override() {
        let ctx = GenerationContext::new(GenerationOptions::new().with_component_name("Promo Tile"));
        let files = JsonSerializer::new().generate(&fixtures::hello_frame(), &ctx).unwrap();
        assert_eq!(files[0].filename, "promo-tile.json");
    }
}
