//! Diagnostics recorded during normalization.

use serde::{Deserialize, Serialize};

/// What happened to a node during normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A container had more children than the bound; the tail was dropped.
    ChildrenTruncated { original: usize, kept: usize },
    /// A container sat at the depth bound; its children were dropped.
    DepthLimited { depth: usize, dropped: usize },
    /// A node failed to normalize and was replaced by a fallback.
    NodeFallback { reason: String },
    /// The host node kind is not modeled; it became a vector leaf.
    UnknownNodeType { kind: String },
    /// The assembled tree failed the round-trip check and was replaced.
    TreeReplaced { reason: String },
}

/// A diagnostic tied to the host node it concerns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub node_id: String,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(node_id: impl Into<String>, kind: DiagnosticKind) -> Self {
        Self {
            node_id: node_id.into(),
            kind,
        }
    }

    /// Whether the diagnostic records dropped content.
    pub fn is_truncation(&self) -> bool {
        matches!(
            self.kind,
            DiagnosticKind::ChildrenTruncated { .. } | DiagnosticKind::DepthLimited { .. }
        )
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DiagnosticKind::ChildrenTruncated { original, kept } => {
                write!(f, "{}: kept {} of {} children", self.node_id, kept, original)
            }
            DiagnosticKind::DepthLimited { depth, dropped } => {
                write!(f, "{}: depth {} reached, dropped {} children", self.node_id, depth, dropped)
            }
            DiagnosticKind::NodeFallback { reason } => {
                write!(f, "{}: replaced by fallback ({})", self.node_id, reason)
            }
            DiagnosticKind::UnknownNodeType { kind } => {
                write!(f, "{}: unsupported node type {}", self.node_id, kind)
            }
            DiagnosticKind::TreeReplaced { reason } => {
                write!(f, "{}: tree replaced ({})", self.node_id, reason)
            }
        }
    }
}
