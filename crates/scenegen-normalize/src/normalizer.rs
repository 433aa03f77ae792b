//! Depth-first normalization of host nodes into IR.

use crate::config::NormalizeConfig;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::error::{json_type, NormalizeError, Result};
use crate::extract;
use crate::view::{SceneKind, SceneView};
use scenegen_ir::stack::{ensure_sufficient_stack, with_deep_stack};
use scenegen_ir::{
    ContainerNode, Fill, Geometry, GroupNode, ImageNode, IrNode, NodeBase, ScaleMode, ShapeNode,
    TextNode,
};
use serde_json::Value;
use tracing::{debug, trace, warn};

/// Result of normalizing one node.
///
/// A failed node is still a usable node: the fallback keeps whatever
/// identity and geometry could be read.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeOutcome {
    Normalized(IrNode),
    Recovered { node: IrNode, error: NormalizeError },
}

impl NodeOutcome {
    pub fn node(&self) -> &IrNode {
        match self {
            Self::Normalized(node) | Self::Recovered { node, .. } => node,
        }
    }

    pub fn into_node(self) -> IrNode {
        match self {
            Self::Normalized(node) | Self::Recovered { node, .. } => node,
        }
    }

    pub fn is_recovered(&self) -> bool {
        matches!(self, Self::Recovered { .. })
    }
}

/// A normalized tree together with everything that was recovered on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub root: IrNode,
    pub diagnostics: Vec<Diagnostic>,
}

impl Normalized {
    /// Whether any content was dropped by the depth or width bounds.
    pub fn was_truncated(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_truncation)
    }
}

/// Converts host scene-graph nodes into IR trees.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizeConfig,
}

impl Normalizer {
    /// Create a normalizer with default bounds.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: NormalizeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NormalizeConfig {
        &self.config
    }

    /// Normalize a host node. Never fails; see [`Normalizer::normalize_with_report`].
    pub fn normalize(&self, input: &Value) -> IrNode {
        self.normalize_with_report(input).root
    }

    /// Normalize a host node, returning the IR and the recorded diagnostics.
    pub fn normalize_with_report(&self, input: &Value) -> Normalized {
        let mut walk = Walk {
            config: &self.config,
            diagnostics: Vec::new(),
        };
        let root = walk.node(input, 1).into_node();
        let root = walk.sanitize(root);
        debug!(
            nodes = root.node_count(),
            diagnostics = walk.diagnostics.len(),
            "normalized scene"
        );
        Normalized {
            root,
            diagnostics: walk.diagnostics,
        }
    }
}

/// State of one normalization pass.
struct Walk<'c> {
    config: &'c NormalizeConfig,
    diagnostics: Vec<Diagnostic>,
}

impl Walk<'_> {
    fn record(&mut self, node_id: &str, kind: DiagnosticKind) {
        let diagnostic = Diagnostic::new(node_id, kind);
        warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    /// Normalize one node at `depth` (root = 1), substituting a fallback on failure.
    fn node(&mut self, value: &Value, depth: usize) -> NodeOutcome {
        ensure_sufficient_stack(|| match self.try_node(value, depth) {
            Ok(node) => NodeOutcome::Normalized(node),
            Err(error) => {
                let node = fallback(value);
                self.record(
                    node.id(),
                    DiagnosticKind::NodeFallback {
                        reason: error.to_string(),
                    },
                );
                NodeOutcome::Recovered { node, error }
            }
        })
    }

    fn try_node(&mut self, value: &Value, depth: usize) -> Result<IrNode> {
        let view = SceneView::new(value)?;
        let kind = view.kind();
        trace!(id = view.id(), ?kind, depth, "normalizing node");

        if let SceneKind::Unknown(unknown) = &kind {
            self.record(
                view.id(),
                DiagnosticKind::UnknownNodeType {
                    kind: unknown.clone(),
                },
            );
            return Ok(fallback(value));
        }

        let base = base(&view)?;
        Ok(match kind {
            SceneKind::Frame => IrNode::Frame(self.container(&view, base, depth)?),
            SceneKind::Component => IrNode::Component(self.container(&view, base, depth)?),
            SceneKind::Instance => {
                let mut instance = self.container(&view, base, depth)?;
                instance.component_id = view
                    .object("mainComponent")
                    .and_then(|c| c.str("id"))
                    .or_else(|| view.str("componentId"))
                    .map(str::to_string);
                IrNode::Instance(instance)
            }
            SceneKind::Group => IrNode::Group(GroupNode {
                children: self.children(&view, depth)?,
                base,
            }),
            SceneKind::Text => IrNode::Text(TextNode {
                characters: characters(&view)?,
                style: extract::text_style(&view, self.config),
                base,
            }),
            SceneKind::Vector | SceneKind::Unknown(_) => IrNode::Vector(ShapeNode::new(base)),
            SceneKind::Star => IrNode::Star(ShapeNode {
                point_count: point_count(&view),
                inner_radius: view.f64("innerRadius").map(|r| r.clamp(0.0, 1.0)),
                base,
            }),
            SceneKind::Polygon => IrNode::Polygon(ShapeNode {
                point_count: point_count(&view),
                inner_radius: None,
                base,
            }),
            SceneKind::Ellipse => IrNode::Ellipse(ShapeNode::new(base)),
            SceneKind::Rectangle => IrNode::Rectangle(ShapeNode::new(base)),
            SceneKind::Image => image(&view, base),
        })
    }

    fn container(&mut self, view: &SceneView, base: NodeBase, depth: usize) -> Result<ContainerNode> {
        Ok(ContainerNode {
            layout: extract::layout(view),
            clips_content: view.bool_or("clipsContent", false),
            component_id: None,
            children: self.children(view, depth)?,
            base,
        })
    }

    /// Normalize children, enforcing the width and depth bounds.
    fn children(&mut self, view: &SceneView, depth: usize) -> Result<Vec<IrNode>> {
        let raw = view.array("children")?;
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        if depth >= self.config.max_depth {
            self.record(
                view.id(),
                DiagnosticKind::DepthLimited {
                    depth,
                    dropped: raw.len(),
                },
            );
            return Ok(Vec::new());
        }

        let kept = if raw.len() > self.config.max_children {
            self.record(
                view.id(),
                DiagnosticKind::ChildrenTruncated {
                    original: raw.len(),
                    kept: self.config.max_children,
                },
            );
            &raw[..self.config.max_children]
        } else {
            raw
        };

        Ok(kept
            .iter()
            .map(|child| self.node(child, depth + 1).into_node())
            .collect())
    }

    /// Replace the whole tree if it does not survive a JSON round-trip.
    fn sanitize(&mut self, root: IrNode) -> IrNode {
        match with_deep_stack(|| root.check_round_trip()) {
            Ok(()) => root,
            Err(err) => {
                let reason = NormalizeError::NotSerializable(err.to_string()).to_string();
                self.record(root.id(), DiagnosticKind::TreeReplaced { reason });
                IrNode::fallback(root.id(), root.name(), finite_geometry(root.geometry()))
            }
        }
    }
}

fn base(view: &SceneView) -> Result<NodeBase> {
    Ok(NodeBase {
        id: view.id().to_string(),
        name: view.name().to_string(),
        visible: view.bool_or("visible", true),
        locked: view.bool_or("locked", false),
        geometry: extract::geometry(view),
        opacity: extract::opacity(view),
        fills: extract::fills(view)?,
        strokes: extract::strokes(view)?,
        stroke_weight: view.non_negative_or("strokeWeight", 0.0),
        stroke_align: extract::stroke_align(view),
        effects: extract::effects(view)?,
        corner_radius: extract::corner_radius(view),
        constraints: extract::constraints(view),
        blend_mode: extract::blend_mode(view),
        export_settings: extract::export_settings(view),
        layout_child: extract::child_layout(view),
    })
}

fn characters(view: &SceneView) -> Result<String> {
    match view.field("characters") {
        None => Ok(String::new()),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(NormalizeError::InvalidField {
            field: "characters",
            expected: "a string",
            found: json_type(other),
        }),
    }
}

fn point_count(view: &SceneView) -> Option<u32> {
    view.f64("pointCount")
        .filter(|n| *n >= 3.0)
        .map(|n| n.min(u32::MAX as f64).round() as u32)
}

fn image(view: &SceneView, base: NodeBase) -> IrNode {
    let paint = base.fills.iter().find_map(|fill| match fill {
        Fill::Image(image) => Some(image),
        _ => None,
    });
    let image_ref = paint
        .and_then(|p| p.image_ref.clone())
        .or_else(|| view.str("imageHash").map(str::to_string));
    let scale_mode = paint.map(|p| p.scale_mode).unwrap_or(ScaleMode::Fill);
    IrNode::Image(ImageNode {
        base,
        image_ref,
        scale_mode,
    })
}

/// Minimal node for a host value: identity and geometry if readable.
fn fallback(value: &Value) -> IrNode {
    match SceneView::try_new(value) {
        Some(view) => IrNode::fallback(view.id(), view.name(), extract::geometry(&view)),
        None => IrNode::fallback("", "", Geometry::default()),
    }
}

fn finite_geometry(geometry: &Geometry) -> Geometry {
    let finite = |v: f64| if v.is_finite() { v } else { 0.0 };
    Geometry {
        x: finite(geometry.x),
        y: finite(geometry.y),
        width: finite(geometry.width),
        height: finite(geometry.height),
        rotation: finite(geometry.rotation),
    }
}
