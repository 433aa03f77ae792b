//! Normalization of host scene graphs into the scenegen IR.
//!
//! The host exports its scene graph as JSON objects whose shape varies by
//! node kind: not every node exposes every property, and some properties
//! carry the `"mixed"` sentinel. The [`Normalizer`] reads that tree through
//! a defaulting [`SceneView`] and produces a bounded, fully-serializable
//! [`IrNode`](scenegen_ir::IrNode) tree.
//!
//! # Guarantees
//!
//! - `normalize` never fails; failures degrade to fallback nodes.
//! - Output depth is at most [`MAX_DEPTH`](scenegen_ir::MAX_DEPTH) levels and
//!   no container keeps more than [`MAX_CHILDREN`](scenegen_ir::MAX_CHILDREN)
//!   children. Truncation is reported as a [`Diagnostic`], not an error.
//! - The result round-trips through the JSON interchange format.
//!
//! # Example
//!
//! ```ignore
//! use scenegen_normalize::normalize;
//!
//! let ir = normalize(&serde_json::json!({
//!     "id": "1:2",
//!     "name": "Card",
//!     "type": "FRAME",
//!     "width": 320,
//!     "height": 200,
//! }));
//! assert_eq!(ir.kind_name(), "FRAME");
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
mod extract;
mod normalizer;
pub mod view;

pub use config::NormalizeConfig;
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use error::{NormalizeError, Result};
pub use normalizer::{NodeOutcome, Normalized, Normalizer};
pub use view::{SceneKind, SceneView};

use scenegen_ir::IrNode;
use serde_json::Value;

/// Normalize a host node with the default configuration.
pub fn normalize(input: &Value) -> IrNode {
    Normalizer::new().normalize(input)
}

/// Normalize a host node and keep the diagnostics.
pub fn normalize_with_report(input: &Value) -> Normalized {
    Normalizer::new().normalize_with_report(input)
}
