//! IR trees shared by serializer tests.

use scenegen_ir::{
    Color, ColorStop, ContainerNode, CornerRadius, Effect, Fill, Geometry, Gradient, GradientKind,
    GroupNode, ImageNode, ImagePaint, IrNode, Layout, LayoutMode, NodeBase, Offset, Padding,
    ScaleMode, Shadow, ShapeNode, Stroke, TextNode, TextStyle, Transform,
};

pub fn text(id: &str, name: &str, characters: &str, font_size: f64) -> IrNode {
    IrNode::Text(TextNode {
        base: NodeBase::new(id, name, Geometry::sized(200.0, font_size * 1.25))
            .with_fill(Fill::solid(Color::rgb(17, 24, 39))),
        characters: characters.into(),
        style: TextStyle {
            font_size,
            ..Default::default()
        },
    })
}

fn frame(id: &str, name: &str, geometry: Geometry) -> ContainerNode {
    ContainerNode::new(NodeBase::new(id, name, geometry))
}

fn vertical(spacing: f64) -> Layout {
    Layout {
        mode: LayoutMode::Vertical,
        item_spacing: spacing,
        ..Default::default()
    }
}

/// Vertical auto-layout card with one 24px title.
pub fn hello_frame() -> IrNode {
    let mut card = frame("1:1", "Hello Card", Geometry::sized(320.0, 200.0))
        .with_layout(Layout {
            padding: Padding::uniform(24.0),
            ..vertical(16.0)
        })
        .with_child(text("1:2", "Title", "Hello World", 24.0));
    card.base.fills.push(Fill::solid(Color::WHITE));
    IrNode::Frame(card)
}

/// Horizontal row whose two children share a name.
pub fn twin_siblings() -> IrNode {
    let item = |id: &str| {
        IrNode::Rectangle(ShapeNode::new(
            NodeBase::new(id, "Item", Geometry::sized(40.0, 40.0)).with_fill(Fill::solid(Color::BLACK)),
        ))
    };
    IrNode::Frame(
        frame("2:1", "Row", Geometry::sized(100.0, 40.0))
            .with_layout(Layout {
                mode: LayoutMode::Horizontal,
                item_spacing: 8.0,
                ..Default::default()
            })
            .with_child(item("2:2"))
            .with_child(item("2:3")),
    )
}

/// Free-form page exercising every node variant and semantic role.
pub fn showcase() -> IrNode {
    let gradient = Gradient {
        kind: GradientKind::Linear,
        stops: vec![
            ColorStop { position: 0.0, color: Color::rgb(255, 0, 128) },
            ColorStop { position: 1.0, color: Color::rgb(64, 0, 255) },
        ],
        transform: Some(Transform([[0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]])),
        opacity: None,
        visible: true,
    };
    let shadow = Effect::DropShadow(Shadow {
        color: Color::rgba(0, 0, 0, 0.25),
        offset: Offset { x: 0.0, y: 4.0 },
        radius: 8.0,
        spread: 0.0,
        visible: true,
    });

    let mut button = frame("3:3", "Primary Button", Geometry::new(24.0, 120.0, 160.0, 48.0))
        .with_layout(Layout {
            mode: LayoutMode::Horizontal,
            padding: Padding {
                top: 12.0,
                right: 24.0,
                bottom: 12.0,
                left: 24.0,
            },
            ..Default::default()
        })
        .with_child(text("3:4", "Label", "Buy now", 16.0));
    button.base.fills.push(Fill::Gradient(gradient.clone()));
    button.base.corner_radius = CornerRadius::Uniform { radius: 8.0 };
    button.base.effects.push(shadow.clone());

    let mut hero = NodeBase::new("3:5", "Hero Image", Geometry::new(400.0, 24.0, 376.0, 240.0));
    hero.fills.push(Fill::Image(ImagePaint {
        image_ref: Some("hero".into()),
        scale_mode: ScaleMode::Fill,
        opacity: None,
        visible: true,
    }));

    let mut field = frame("3:6", "Email Field", Geometry::new(24.0, 190.0, 320.0, 44.0))
        .with_child(text("3:7", "Hint", "you@example.com", 14.0));
    field.base.strokes.push(Stroke::solid(Color::rgb(209, 213, 219)));
    field.base.stroke_weight = 1.0;

    let mut hidden = ShapeNode::new(NodeBase::new("3:10", "Hidden", Geometry::sized(10.0, 10.0)));
    hidden.base.visible = false;

    let features = frame("3:11", "Feature List", Geometry::new(24.0, 300.0, 320.0, 80.0))
        .with_layout(vertical(8.0))
        .with_child(text("3:12", "Feature", "Fast", 16.0))
        .with_child(text("3:13", "Feature", "Safe", 16.0));

    let badge = ShapeNode::new(
        NodeBase::new("3:14", "Badge", Geometry::new(700.0, 400.0, 48.0, 48.0))
            .with_fill(Fill::Gradient(gradient))
            .with_effect(shadow),
    );

    let avatar = ImageNode {
        base: NodeBase::new("3:15", "Avatar", Geometry::new(24.0, 400.0, 64.0, 64.0)),
        image_ref: Some("avatar".into()),
        scale_mode: ScaleMode::Fit,
    };

    let star = ShapeNode {
        point_count: Some(5),
        inner_radius: Some(0.5),
        ..ShapeNode::new(
            NodeBase::new("3:17", "Spark", Geometry::new(110.0, 520.0, 20.0, 20.0))
                .with_fill(Fill::solid(Color::rgb(250, 204, 21))),
        )
    };
    let decor = GroupNode {
        base: NodeBase::new("3:16", "Decor", Geometry::new(100.0, 500.0, 40.0, 40.0)),
        children: vec![IrNode::Star(star)],
    };

    let mut page = frame("3:1", "Landing", Geometry::sized(800.0, 600.0))
        .with_child(text("3:2", "Headline", "Welcome", 40.0))
        .with_child(IrNode::Frame(button))
        .with_child(IrNode::Rectangle(ShapeNode::new(hero)))
        .with_child(IrNode::Frame(field))
        .with_child(text("3:8", "Promo", "<b>Sale</b>", 18.0))
        .with_child(text("3:9", "Price", "{{ price }}", 16.0))
        .with_child(IrNode::Rectangle(hidden))
        .with_child(IrNode::Frame(features))
        .with_child(IrNode::Ellipse(badge))
        .with_child(IrNode::Image(avatar))
        .with_child(IrNode::Group(decor));
    page.base.fills.push(Fill::solid(Color::rgb(249, 250, 251)));
    page.clips_content = true;
    IrNode::Frame(page)
}
