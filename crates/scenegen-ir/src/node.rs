//! IR node variants.

use crate::effect::Effect;
use crate::errors::{IrError, Result};
use crate::geometry::{BlendMode, Constraints, CornerRadius, ExportSetting, Geometry};
use crate::layout::{ChildLayout, Layout};
use crate::paint::{Fill, ScaleMode, Stroke, StrokeAlign};
use crate::stack::ensure_sufficient_stack;
use crate::text::TextStyle;
use serde::{Deserialize, Serialize};

/// Attributes shared by every node variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeBase {
    pub id: String,
    pub name: String,
    pub visible: bool,
    pub locked: bool,
    pub geometry: Geometry,
    pub opacity: f64,
    pub fills: Vec<Fill>,
    pub strokes: Vec<Stroke>,
    pub stroke_weight: f64,
    pub stroke_align: StrokeAlign,
    pub effects: Vec<Effect>,
    pub corner_radius: CornerRadius,
    pub constraints: Constraints,
    pub blend_mode: BlendMode,
    pub export_settings: Vec<ExportSetting>,
    pub layout_child: ChildLayout,
}

impl NodeBase {
    pub fn new(id: impl Into<String>, name: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            visible: true,
            locked: false,
            geometry,
            opacity: 1.0,
            fills: Vec::new(),
            strokes: Vec::new(),
            stroke_weight: 0.0,
            stroke_align: StrokeAlign::Inside,
            effects: Vec::new(),
            corner_radius: CornerRadius::NONE,
            constraints: Constraints::default(),
            blend_mode: BlendMode::PassThrough,
            export_settings: Vec::new(),
            layout_child: ChildLayout::default(),
        }
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fills.push(fill);
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke, weight: f64) -> Self {
        self.strokes.push(stroke);
        self.stroke_weight = weight;
        self
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_corner_radius(mut self, radius: CornerRadius) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn visible_fills(&self) -> impl Iterator<Item = &Fill> {
        self.fills.iter().filter(|f| f.is_visible())
    }

    pub fn visible_strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter().filter(|s| s.is_visible())
    }

    pub fn visible_effects(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter().filter(|e| e.is_visible())
    }
}

/// Frame, component or instance payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerNode {
    #[serde(flatten)]
    pub base: NodeBase,
    pub layout: Layout,
    pub clips_content: bool,
    /// Main component id, for instances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
    pub children: Vec<IrNode>,
}

impl ContainerNode {
    pub fn new(base: NodeBase) -> Self {
        Self {
            base,
            layout: Layout::default(),
            clips_content: false,
            component_id: None,
            children: Vec::new(),
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_child(mut self, child: IrNode) -> Self {
        self.children.push(child);
        self
    }
}

/// Group payload. Groups have no layout of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupNode {
    #[serde(flatten)]
    pub base: NodeBase,
    pub children: Vec<IrNode>,
}

/// Text payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    #[serde(flatten)]
    pub base: NodeBase,
    pub characters: String,
    pub style: TextStyle,
}

/// Vector-family payload (vector, star, polygon, ellipse, rectangle).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeNode {
    #[serde(flatten)]
    pub base: NodeBase,
    /// Number of points, for stars and polygons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_count: Option<u32>,
    /// Inner radius ratio, for stars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_radius: Option<f64>,
}

impl ShapeNode {
    pub fn new(base: NodeBase) -> Self {
        Self {
            base,
            point_count: None,
            inner_radius: None,
        }
    }
}

/// Image payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageNode {
    #[serde(flatten)]
    pub base: NodeBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    pub scale_mode: ScaleMode,
}

/// A node of the IR tree. `type` discriminates the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IrNode {
    Frame(ContainerNode),
    Component(ContainerNode),
    Instance(ContainerNode),
    Group(GroupNode),
    Text(TextNode),
    Vector(ShapeNode),
    Star(ShapeNode),
    Polygon(ShapeNode),
    Ellipse(ShapeNode),
    Rectangle(ShapeNode),
    Image(ImageNode),
}

impl IrNode {
    /// Minimal valid node: a childless vector carrying identity and geometry.
    pub fn fallback(id: impl Into<String>, name: impl Into<String>, geometry: Geometry) -> Self {
        Self::Vector(ShapeNode::new(NodeBase::new(id, name, geometry)))
    }

    pub fn base(&self) -> &NodeBase {
        match self {
            Self::Frame(n) | Self::Component(n) | Self::Instance(n) => &n.base,
            Self::Group(n) => &n.base,
            Self::Text(n) => &n.base,
            Self::Vector(n) | Self::Star(n) | Self::Polygon(n) | Self::Ellipse(n) | Self::Rectangle(n) => {
                &n.base
            }
            Self::Image(n) => &n.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut NodeBase {
        match self {
            Self::Frame(n) | Self::Component(n) | Self::Instance(n) => &mut n.base,
            Self::Group(n) => &mut n.base,
            Self::Text(n) => &mut n.base,
            Self::Vector(n) | Self::Star(n) | Self::Polygon(n) | Self::Ellipse(n) | Self::Rectangle(n) => {
                &mut n.base
            }
            Self::Image(n) => &mut n.base,
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }

    pub fn geometry(&self) -> &Geometry {
        &self.base().geometry
    }

    /// Ordered children; empty for leaf variants.
    pub fn children(&self) -> &[IrNode] {
        match self {
            Self::Frame(n) | Self::Component(n) | Self::Instance(n) => &n.children,
            Self::Group(n) => &n.children,
            _ => &[],
        }
    }

    /// Frame-like payload (frame, component, instance).
    pub fn as_container(&self) -> Option<&ContainerNode> {
        match self {
            Self::Frame(n) | Self::Component(n) | Self::Instance(n) => Some(n),
            _ => None,
        }
    }

    /// Auto-layout of a frame-like node.
    pub fn layout(&self) -> Option<&Layout> {
        self.as_container().map(|c| &c.layout)
    }

    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Self::Frame(_) | Self::Component(_) | Self::Instance(_) | Self::Group(_)
        )
    }

    /// Whether this is one of the vector-family variants.
    pub fn is_shape(&self) -> bool {
        matches!(
            self,
            Self::Vector(_) | Self::Star(_) | Self::Polygon(_) | Self::Ellipse(_) | Self::Rectangle(_)
        )
    }

    /// The `type` tag as it appears in the interchange format.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Frame(_) => "FRAME",
            Self::Component(_) => "COMPONENT",
            Self::Instance(_) => "INSTANCE",
            Self::Group(_) => "GROUP",
            Self::Text(_) => "TEXT",
            Self::Vector(_) => "VECTOR",
            Self::Star(_) => "STAR",
            Self::Polygon(_) => "POLYGON",
            Self::Ellipse(_) => "ELLIPSE",
            Self::Rectangle(_) => "RECTANGLE",
            Self::Image(_) => "IMAGE",
        }
    }

    /// Number of levels in this tree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        ensure_sufficient_stack(|| 1 + self.children().iter().map(IrNode::depth).max().unwrap_or(0))
    }

    /// Total number of nodes in this tree.
    pub fn node_count(&self) -> usize {
        ensure_sufficient_stack(|| 1 + self.children().iter().map(IrNode::node_count).sum::<usize>())
    }

    /// Serialize to the JSON interchange format.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from the JSON interchange format.
    ///
    /// The recursion limit is lifted so trees at the maximum depth parse;
    /// callers handling very deep input should run this on a large stack.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut de = serde_json::Deserializer::from_str(json);
        de.disable_recursion_limit();
        let node = Self::deserialize(&mut de)?;
        de.end()?;
        Ok(node)
    }

    /// Serialize, parse back and compare against `self`.
    pub fn check_round_trip(&self) -> Result<()> {
        let parsed = Self::from_json(&self.to_json()?)?;
        if &parsed == self {
            Ok(())
        } else {
            Err(IrError::RoundTripMismatch {
                id: self.id().to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutMode;
    use crate::paint::Color;

    fn frame(name: &str) -> ContainerNode {
        ContainerNode::new(NodeBase::new("1:1", name, Geometry::sized(200.0, 100.0)))
    }

    #[test]
    fn test_fallback_is_vector() {
        let node = IrNode::fallback("9:9", "Broken", Geometry::sized(10.0, 10.0));
        assert_eq!(node.kind_name(), "VECTOR");
        assert!(node.children().is_empty());
        assert_eq!(node.geometry().width, 10.0);
    }

    #[test]
    fn test_depth_and_count() {
        let leaf = IrNode::Rectangle(ShapeNode::new(NodeBase::new("2", "r", Geometry::default())));
        let inner = IrNode::Frame(frame("inner").with_child(leaf.clone()));
        let root = IrNode::Frame(frame("root").with_child(inner).with_child(leaf));
        assert_eq!(root.depth(), 3);
        assert_eq!(root.node_count(), 4);
    }

    #[test]
    fn test_json_shape() {
        let node = IrNode::Frame(frame("Card").with_layout(Layout {
            mode: LayoutMode::Vertical,
            item_spacing: 16.0,
            ..Default::default()
        }));
        let value: serde_json::Value = serde_json::from_str(&node.to_json().unwrap()).unwrap();
        assert_eq!(value["type"], "FRAME");
        assert_eq!(value["name"], "Card");
        assert_eq!(value["layout"]["mode"], "VERTICAL");
        assert!(value["children"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_round_trip() {
        let text = IrNode::Text(TextNode {
            base: NodeBase::new("3", "Title", Geometry::new(4.0, 8.0, 120.5, 32.0))
                .with_fill(Fill::solid(Color::rgba(17, 34, 51, 0.8))),
            characters: "Hello <World>".to_string(),
            style: TextStyle::default(),
        });
        let root = IrNode::Frame(frame("root").with_child(text));
        root.check_round_trip().unwrap();
        assert_eq!(IrNode::from_json(&root.to_json().unwrap()).unwrap(), root);
    }

    #[test]
    fn test_non_finite_fails_round_trip() {
        let mut node = IrNode::fallback("1", "nan", Geometry::default());
        node.base_mut().opacity = f64::NAN;
        assert!(node.check_round_trip().is_err());
    }
}
