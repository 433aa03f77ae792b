//! Child placement shared by every code-emitting serializer.
//!
//! Each target maps a [`Placement`] onto its own primitives: flex items and
//! absolute offsets on the web, `Row`/`Column` children and `Positioned` in
//! Flutter, stack children and `.offset` in SwiftUI.

use scenegen_ir::{ChildAlign, IrNode, LayoutMode, Positioning, SizingMode};

/// Main axis of an auto-layout container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Main axis of a layout mode, if it is an auto layout.
    pub fn of(mode: LayoutMode) -> Option<Self> {
        match mode {
            LayoutMode::None => None,
            LayoutMode::Horizontal | LayoutMode::Wrap => Some(Self::Horizontal),
            LayoutMode::Vertical => Some(Self::Vertical),
        }
    }
}

/// How a node sits inside its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// The top-level node; sized responsively.
    Root,
    /// Item of an auto-layout parent.
    Flow { axis: Axis, grow: f64, stretch: bool },
    /// Absolutely positioned, offsets relative to the parent's origin.
    Absolute { left: f64, top: f64 },
}

/// A child together with its placement.
#[derive(Debug, Clone, Copy)]
pub struct Placed<'a> {
    pub node: &'a IrNode,
    pub placement: Placement,
}

/// Whether a node is rendered at all.
pub fn is_rendered(node: &IrNode) -> bool {
    node.base().visible
}

/// Visible children of `parent` with their placement.
///
/// Group children are offset by the group's own position, since groups
/// share their parent's coordinate space.
pub fn placed_children(parent: &IrNode) -> Vec<Placed<'_>> {
    let axis = parent.layout().and_then(|l| Axis::of(l.mode));
    let origin = match parent {
        IrNode::Group(group) => (group.base.geometry.x, group.base.geometry.y),
        _ => (0.0, 0.0),
    };

    parent
        .children()
        .iter()
        .filter(|child| is_rendered(child))
        .map(|child| {
            let flags = &child.base().layout_child;
            let placement = match axis {
                Some(axis) if flags.positioning == Positioning::Auto => Placement::Flow {
                    axis,
                    grow: flags.grow,
                    stretch: flags.align == ChildAlign::Stretch,
                },
                _ => {
                    let geometry = child.geometry();
                    Placement::Absolute {
                        left: geometry.x - origin.0,
                        top: geometry.y - origin.1,
                    }
                }
            };
            Placed { node: child, placement }
        })
        .collect()
}

/// Whether the node hugs its content horizontally and vertically.
pub fn hugs_content(node: &IrNode) -> (bool, bool) {
    let Some(layout) = node.layout() else {
        return (false, false);
    };
    let primary = layout.primary_sizing == SizingMode::Auto;
    let counter = layout.counter_sizing == SizingMode::Auto;
    match Axis::of(layout.mode) {
        Some(Axis::Horizontal) => (primary, counter),
        Some(Axis::Vertical) => (counter, primary),
        None => (false, false),
    }
}

/// Whether absolutely placed children need this node as their containing block.
pub fn has_absolute_children(node: &IrNode) -> bool {
    placed_children(node)
        .iter()
        .any(|child| matches!(child.placement, Placement::Absolute { .. }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenegen_ir::{ContainerNode, Geometry, GroupNode, Layout, NodeBase, ShapeNode};

    fn rect(id: &str, x: f64, y: f64) -> IrNode {
        IrNode::Rectangle(ShapeNode::new(NodeBase::new(id, id, Geometry::new(x, y, 10.0, 10.0))))
    }

    #[test]
    fn test_flow_children() {
        let mut hidden = rect("hidden", 0.0, 0.0);
        hidden.base_mut().visible = false;
        let mut absolute = rect("abs", 5.0, 6.0);
        absolute.base_mut().layout_child.positioning = Positioning::Absolute;

        let frame = IrNode::Frame(
            ContainerNode::new(NodeBase::new("f", "f", Geometry::sized(100.0, 100.0)))
                .with_layout(Layout {
                    mode: LayoutMode::Vertical,
                    ..Default::default()
                })
                .with_child(rect("a", 0.0, 0.0))
                .with_child(hidden)
                .with_child(absolute),
        );
        let children = placed_children(&frame);
        assert_eq!(children.len(), 2);
        assert!(matches!(
            children[0].placement,
            Placement::Flow { axis: Axis::Vertical, .. }
        ));
        assert_eq!(children[1].placement, Placement::Absolute { left: 5.0, top: 6.0 });
        assert!(has_absolute_children(&frame));
    }

    #[test]
    fn test_group_offsets() {
        let group = IrNode::Group(GroupNode {
            base: NodeBase::new("g", "g", Geometry::new(40.0, 20.0, 50.0, 50.0)),
            children: vec![rect("a", 50.0, 35.0)],
        });
        let children = placed_children(&group);
        assert_eq!(children[0].placement, Placement::Absolute { left: 10.0, top: 15.0 });
    }
}
