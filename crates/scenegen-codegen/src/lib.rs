//! Code generation from scenegen IR to web and native UI frameworks.
//!
//! Every output format is a [`Serializer`]: a stateless, synchronous
//! transform from an [`IrNode`](scenegen_ir::IrNode) tree and a
//! [`GenerationContext`] to one or more [`GeneratedFile`]s. Serializers are
//! looked up by format id through a [`SerializerRegistry`].
//!
//! # Features
//!
//! - `json` - The IR itself, pretty-printed
//! - `html` - Static HTML page with inline, external or Tailwind styling
//! - `react` - React function component in TypeScript
//! - `react-native` - React Native component with a `StyleSheet`
//! - `flutter` - Flutter `StatelessWidget` in Dart
//! - `swiftui` - SwiftUI view in Swift
//! - `vue` - Vue single-file component
//!
//! # Example
//!
//! ```ignore
//! use scenegen_codegen::{GenerationContext, GenerationOptions, SerializerRegistry};
//!
//! let registry = SerializerRegistry::with_defaults();
//! let ctx = GenerationContext::new(GenerationOptions::new().with_component_name("Card"));
//! for file in registry.generate("react", &ir, &ctx)? {
//!     println!("{}:\n{}", file.filename, file.code);
//! }
//! ```

pub mod context;
pub mod css;
pub mod error;
pub mod escape;
pub mod markup;
pub mod naming;
pub mod registry;
pub mod semantic;
pub mod serializer;
pub mod serializers;
pub mod style;
pub mod templates;
pub mod traverse;
pub mod writer;

#[cfg(test)]
mod fixtures;

pub use context::{FormatConfig, GenerationContext, GenerationOptions, OptionKey};
pub use error::{CodegenError, ErrorReport, Result};
pub use registry::{format_info, FormatInfo, SerializerRegistry, FORMATS};
pub use semantic::SemanticRole;
pub use serializer::{GeneratedFile, Language, Serializer};
pub use templates::TemplateEngine;

// Re-export format-specific serializers
#[cfg(feature = "flutter")]
pub use serializers::FlutterSerializer;

#[cfg(feature = "html")]
pub use serializers::HtmlSerializer;

#[cfg(feature = "json")]
pub use serializers::JsonSerializer;

#[cfg(feature = "react")]
pub use serializers::ReactSerializer;

#[cfg(feature = "react-native")]
pub use serializers::ReactNativeSerializer;

#[cfg(feature = "swiftui")]
pub use serializers::SwiftUiSerializer;

#[cfg(feature = "vue")]
pub use serializers::VueSerializer;
