//! Serializer registry and the static format catalog.

use crate::context::{GenerationContext, OptionKey};
use crate::error::{CodegenError, Result};
use crate::serializer::{GeneratedFile, Serializer};
use indexmap::IndexMap;
use scenegen_ir::IrNode;
use serde::Serialize;
use std::panic::{self, AssertUnwindSafe};
use tracing::debug;

/// Catalog entry describing one output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormatInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// Every format this crate can produce, in presentation order.
pub const FORMATS: &[FormatInfo] = &[
    FormatInfo {
        id: "json",
        label: "JSON",
        description: "Intermediate representation as JSON",
    },
    FormatInfo {
        id: "html",
        label: "HTML/CSS",
        description: "Static HTML page with CSS",
    },
    FormatInfo {
        id: "react",
        label: "React",
        description: "React function component in TypeScript",
    },
    FormatInfo {
        id: "react-native",
        label: "React Native",
        description: "React Native component with StyleSheet",
    },
    FormatInfo {
        id: "flutter",
        label: "Flutter",
        description: "Flutter StatelessWidget in Dart",
    },
    FormatInfo {
        id: "swiftui",
        label: "SwiftUI",
        description: "SwiftUI view in Swift",
    },
    FormatInfo {
        id: "vue",
        label: "Vue",
        description: "Vue single-file component",
    },
];

/// Look up a catalog entry by id.
pub fn format_info(id: &str) -> Option<&'static FormatInfo> {
    FORMATS.iter().find(|f| f.id.eq_ignore_ascii_case(id))
}

/// Registry of serializers keyed by format id.
///
/// Registration is explicit; [`SerializerRegistry::with_defaults`] registers
/// every enabled serializer in catalog order.
pub struct SerializerRegistry {
    serializers: IndexMap<String, Box<dyn Serializer>>,
}

impl Default for SerializerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SerializerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            serializers: IndexMap::new(),
        }
    }

    /// Create a registry with the built-in serializers.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        #[cfg(feature = "json")]
        registry.register(crate::serializers::JsonSerializer::new());

        #[cfg(feature = "html")]
        registry.register(crate::serializers::HtmlSerializer::new());

        #[cfg(feature = "react")]
        registry.register(crate::serializers::ReactSerializer::new());

        #[cfg(feature = "react-native")]
        registry.register(crate::serializers::ReactNativeSerializer::new());

        #[cfg(feature = "flutter")]
        registry.register(crate::serializers::FlutterSerializer::new());

        #[cfg(feature = "swiftui")]
        registry.register(crate::serializers::SwiftUiSerializer::new());

        #[cfg(feature = "vue")]
        registry.register(crate::serializers::VueSerializer::new());

        registry
    }

    /// Register a serializer, replacing any previous one with the same id.
    pub fn register<S: Serializer + 'static>(&mut self, serializer: S) {
        let id = serializer.id().to_lowercase();
        self.serializers.insert(id, Box::new(serializer));
    }

    /// Get a serializer by format id.
    pub fn get(&self, id: &str) -> Option<&dyn Serializer> {
        self.serializers.get(&id.to_lowercase()).map(|s| s.as_ref())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Registered serializers in registration order.
    pub fn available(&self) -> impl Iterator<Item = &dyn Serializer> {
        self.serializers.values().map(|s| s.as_ref())
    }

    /// Registered format ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.serializers.keys().map(String::as_str)
    }

    /// Catalog entries for the registered serializers.
    pub fn formats(&self) -> Vec<FormatInfo> {
        self.available()
            .map(|s| FormatInfo {
                id: s.id(),
                label: s.label(),
                description: s.description(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.serializers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.serializers.is_empty()
    }

    /// Generate files with the serializer registered under `id`.
    ///
    /// Unknown ids and serializer panics come back as errors.
    pub fn generate(&self, id: &str, ir: &IrNode, ctx: &GenerationContext) -> Result<Vec<GeneratedFile>> {
        let serializer = self
            .get(id)
            .ok_or_else(|| CodegenError::SerializerNotFound(id.to_string()))?;

        for key in OptionKey::ALL {
            if ctx.options.is_set(key) && !serializer.supports(key) {
                debug!(format = serializer.id(), option = %key, "option not supported, ignoring");
            }
        }

        debug!(format = serializer.id(), root = ir.id(), "generating");
        let files = panic::catch_unwind(AssertUnwindSafe(|| serializer.generate(ir, ctx)))
            .map_err(|payload| {
                CodegenError::internal(
                    format!("{} serializer failed", serializer.label()),
                    panic_message(payload.as_ref()),
                )
            })??;
        debug!(format = serializer.id(), files = files.len(), "generated");
        Ok(files)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> Option<String> {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
}
