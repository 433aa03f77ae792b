//! Built-in serializers, one per output format.

#[cfg(feature = "flutter")]
mod flutter;
#[cfg(feature = "html")]
mod html;
#[cfg(feature = "json")]
mod json;
#[cfg(feature = "react")]
mod react;
#[cfg(feature = "react-native")]
mod react_native;
#[cfg(feature = "swiftui")]
mod swiftui;
#[cfg(feature = "vue")]
mod vue;

#[cfg(feature = "flutter")]
pub use flutter::FlutterSerializer;
#[cfg(feature = "html")]
pub use html::HtmlSerializer;
#[cfg(feature = "json")]
pub use json::JsonSerializer;
#[cfg(feature = "react")]
pub use react::ReactSerializer;
#[cfg(feature = "react-native")]
pub use react_native::ReactNativeSerializer;
#[cfg(feature = "swiftui")]
pub use swiftui::SwiftUiSerializer;
#[cfg(feature = "vue")]
pub use vue::VueSerializer;

#[cfg(any(
    feature = "html",
    feature = "react",
    feature = "react-native",
    feature = "flutter",
    feature = "swiftui",
    feature = "vue"
))]
use crate::{error::Result, templates::TemplateEngine};

/// Template engine preloaded with a serializer's built-in templates.
#[cfg(any(
    feature = "html",
    feature = "react",
    feature = "react-native",
    feature = "flutter",
    feature = "swiftui",
    feature = "vue"
))]
pub(crate) fn engine_with(templates: &[(&str, &str)]) -> Result<TemplateEngine<'static>> {
    let mut engine = TemplateEngine::new();
    for (name, source) in templates {
        engine.register_template(name, source)?;
    }
    Ok(engine)
}

#[cfg(all(test, feature = "html"))]
mod tests {
    use super::*;
    use crate::error::CodegenError;
    use serde_json::json;

    #[test]
    fn test_engine_with_templates() {
        let engine = engine_with(&[("a", "<{{x}}>"), ("b", "[{{x}}]")]).unwrap();
        assert_eq!(engine.render("b", &json!({ "x": 1 })).unwrap(), "[1]");
    }

    #[test]
    fn test_engine_with_bad_template() {
        let err = engine_with(&[("ok", "{{x}}"), ("bad", "{{#if}}")]).err().unwrap();
        assert!(matches!(err, CodegenError::InvalidTemplate(_)));
    }
}
