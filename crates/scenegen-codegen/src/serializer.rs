//! The serializer contract.

use crate::context::{GenerationContext, OptionKey};
use crate::error::Result;
use scenegen_ir::IrNode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Language tag of a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Json,
    Html,
    Css,
    Tsx,
    Dart,
    Swift,
    Vue,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Html => "html",
            Self::Css => "css",
            Self::Tsx => "tsx",
            Self::Dart => "dart",
            Self::Swift => "swift",
            Self::Vue => "vue",
        }
    }

    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}

/// A generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// File name, without directories.
    pub filename: String,
    /// File content.
    pub code: String,
    pub language: Language,
}

impl GeneratedFile {
    pub fn new(filename: impl Into<String>, code: impl Into<String>, language: Language) -> Self {
        Self {
            filename: filename.into(),
            code: code.into(),
            language,
        }
    }

    /// Write this file into `dir`, returning the written path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.code)?;
        Ok(path)
    }
}

/// Common trait for code serializers.
///
/// A serializer is a pure function of `(IR, context)`: the same input
/// yields byte-identical files.
pub trait Serializer: Send + Sync {
    /// Format id used for registry lookup (e.g. `"react-native"`).
    fn id(&self) -> &'static str;

    /// Human-readable label.
    fn label(&self) -> &'static str;

    /// One-line description for format pickers.
    fn description(&self) -> &'static str;

    /// Options this serializer honors.
    fn supported_options(&self) -> &'static [OptionKey];

    fn supports(&self, key: OptionKey) -> bool {
        self.supported_options().contains(&key)
    }

    /// Render `ir` into one or more files.
    fn generate(&self, ir: &IrNode, ctx: &GenerationContext) -> Result<Vec<GeneratedFile>>;
}
