//! Generation options and formatting configuration.

use scenegen_ir::IrNode;
use serde::{Deserialize, Serialize};

/// A user-facing generation option.
///
/// Serializers declare which keys they honor; unset or unsupported
/// options have no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OptionKey {
    /// Emit styles co-located with markup instead of a separate stylesheet.
    InlineCss,
    /// Emit utility classes instead of raw declarations.
    UseTailwind,
    /// Target-language null-safety.
    NullSafety,
    /// Platform compatibility mode for older iOS releases.
    IosCompat,
    /// Wrap the output in a component shell.
    ExportAsComponent,
    /// Override for the generated component identifier.
    ComponentName,
}

impl OptionKey {
    pub const ALL: [OptionKey; 6] = [
        Self::InlineCss,
        Self::UseTailwind,
        Self::NullSafety,
        Self::IosCompat,
        Self::ExportAsComponent,
        Self::ComponentName,
    ];

    /// Name as it appears in the caller's option record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InlineCss => "inlineCss",
            Self::UseTailwind => "useTailwind",
            Self::NullSafety => "nullSafety",
            Self::IosCompat => "iosCompat",
            Self::ExportAsComponent => "exportAsComponent",
            Self::ComponentName => "componentName",
        }
    }
}

impl std::fmt::Display for OptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options chosen by the user for one generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationOptions {
    pub inline_css: bool,
    pub use_tailwind: bool,
    pub null_safety: bool,
    pub ios_compat: bool,
    pub export_as_component: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            inline_css: true,
            use_tailwind: false,
            null_safety: true,
            ios_compat: false,
            export_as_component: true,
            component_name: None,
        }
    }
}

impl GenerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_component_name(mut self, name: impl Into<String>) -> Self {
        self.component_name = Some(name.into());
        self
    }

    pub fn with_inline_css(mut self, inline: bool) -> Self {
        self.inline_css = inline;
        self
    }

    pub fn with_tailwind(mut self, enabled: bool) -> Self {
        self.use_tailwind = enabled;
        self
    }

    pub fn with_null_safety(mut self, enabled: bool) -> Self {
        self.null_safety = enabled;
        self
    }

    pub fn with_ios_compat(mut self, enabled: bool) -> Self {
        self.ios_compat = enabled;
        self
    }

    pub fn with_export_as_component(mut self, enabled: bool) -> Self {
        self.export_as_component = enabled;
        self
    }

    /// Whether `key` differs from its default.
    pub fn is_set(&self, key: OptionKey) -> bool {
        let defaults = Self::default();
        match key {
            OptionKey::InlineCss => self.inline_css != defaults.inline_css,
            OptionKey::UseTailwind => self.use_tailwind != defaults.use_tailwind,
            OptionKey::NullSafety => self.null_safety != defaults.null_safety,
            OptionKey::IosCompat => self.ios_compat != defaults.ios_compat,
            OptionKey::ExportAsComponent => self.export_as_component != defaults.export_as_component,
            OptionKey::ComponentName => self.component_name.is_some(),
        }
    }
}

/// Formatting configuration shared by all serializers.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatConfig {
    /// Spaces per indentation level.
    pub indent_width: usize,
    /// Pixel size of one rem in web targets.
    pub rem_base: f64,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            rem_base: 16.0,
        }
    }
}

/// Everything a serializer receives besides the IR.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationContext {
    pub options: GenerationOptions,
    pub format: FormatConfig,
}

impl GenerationContext {
    pub fn new(options: GenerationOptions) -> Self {
        Self {
            options,
            format: FormatConfig::default(),
        }
    }

    pub fn with_format(mut self, format: FormatConfig) -> Self {
        self.format = format;
        self
    }

    /// Raw base name for output files and the component identifier.
    ///
    /// The `componentName` option wins, then the root node name, then
    /// `"Component"`.
    pub fn base_name<'a>(&'a self, root: &'a IrNode) -> &'a str {
        self.options
            .component_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .or_else(|| Some(root.name().trim()).filter(|name| !name.is_empty()))
            .unwrap_or("Component")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenegen_ir::Geometry;

    #[test]
    fn test_options_deserialize_camel_case() {
        let options: GenerationOptions = serde_json::from_str(
            r#"{"inlineCss": false, "useTailwind": true, "componentName": "Hero"}"#,
        )
        .unwrap();
        assert!(!options.inline_css);
        assert!(options.use_tailwind);
        assert!(options.null_safety);
        assert_eq!(options.component_name.as_deref(), Some("Hero"));
        assert!(options.is_set(OptionKey::UseTailwind));
        assert!(!options.is_set(OptionKey::IosCompat));
    }

    #[test]
    fn test_base_name_precedence() {
        let root = IrNode::fallback("1", "Landing Page", Geometry::default());
        let ctx = GenerationContext::default();
        assert_eq!(ctx.base_name(&root), "Landing Page");

        let ctx = GenerationContext::new(GenerationOptions::new().with_component_name("  Hero "));
        assert_eq!(ctx.base_name(&root), "Hero");

        let unnamed = IrNode::fallback("1", "  ", Geometry::default());
        let ctx = GenerationContext::new(GenerationOptions::new().with_component_name(""));
        assert_eq!(ctx.base_name(&unnamed), "Component");
    }
}
