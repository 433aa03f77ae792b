//! Semantic role and heading inference.

use scenegen_ir::{Fill, IrNode};

/// Semantic role of a node in generated markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticRole {
    Container,
    Button,
    Navigation,
    Header,
    Footer,
    Card,
    Section,
    List,
    Input,
    Image,
}

/// Name keywords per role. Earlier entries win.
const ROLE_KEYWORDS: &[(SemanticRole, &[&str])] = &[
    (SemanticRole::Button, &["button", "btn"]),
    (SemanticRole::Navigation, &["nav"]),
    (SemanticRole::Header, &["header"]),
    (SemanticRole::Footer, &["footer"]),
    (SemanticRole::Card, &["card"]),
    (SemanticRole::Section, &["section"]),
    (SemanticRole::List, &["list"]),
    (SemanticRole::Input, &["input", "field"]),
];

impl SemanticRole {
    /// Role suggested by a container's name.
    pub fn from_name(name: &str) -> Self {
        let name = name.to_lowercase();
        ROLE_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| name.contains(k)))
            .map(|(role, _)| *role)
            .unwrap_or(Self::Container)
    }

    /// Role of an IR node.
    pub fn detect(node: &IrNode) -> Self {
        match node {
            IrNode::Image(_) => Self::Image,
            IrNode::Text(_) => Self::Container,
            n if n.is_container() => Self::from_name(n.name()),
            n if has_image_fill(n) => Self::Image,
            _ => Self::Container,
        }
    }

    /// HTML element for this role.
    pub fn html_tag(&self) -> &'static str {
        match self {
            Self::Container => "div",
            Self::Button => "button",
            Self::Navigation => "nav",
            Self::Header => "header",
            Self::Footer => "footer",
            Self::Card => "article",
            Self::Section => "section",
            Self::List => "ul",
            Self::Input => "input",
            Self::Image => "img",
        }
    }

    /// Accessibility role for native targets, if any.
    pub fn accessibility_role(&self) -> Option<&'static str> {
        match self {
            Self::Button => Some("button"),
            Self::Header => Some("header"),
            Self::Navigation => Some("menu"),
            Self::List => Some("list"),
            Self::Image => Some("image"),
            _ => None,
        }
    }

    /// Whether the element renders no children of its own.
    pub fn is_void(&self) -> bool {
        matches!(self, Self::Input | Self::Image)
    }
}

fn has_image_fill(node: &IrNode) -> bool {
    node.base()
        .visible_fills()
        .any(|fill| matches!(fill, Fill::Image(_)))
}

/// Heading level chosen from a text node's font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    Paragraph,
}

impl HeadingLevel {
    pub fn from_font_size(size: f64) -> Self {
        if size >= 32.0 {
            Self::H1
        } else if size >= 24.0 {
            Self::H2
        } else if size >= 20.0 {
            Self::H3
        } else if size >= 18.0 {
            Self::H4
        } else {
            Self::Paragraph
        }
    }

    pub fn html_tag(&self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::Paragraph => "p",
        }
    }

    pub fn is_heading(&self) -> bool {
        *self != Self::Paragraph
    }
}

/// Text used as an input placeholder: the first text descendant, else the name.
pub fn placeholder_text(node: &IrNode) -> String {
    fn first_text(node: &IrNode) -> Option<&str> {
        match node {
            IrNode::Text(text) if !text.characters.trim().is_empty() => Some(&text.characters),
            other => other.children().iter().find_map(first_text),
        }
    }
    first_text(node).unwrap_or(node.name()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenegen_ir::{ContainerNode, Geometry, ImagePaint, NodeBase, ScaleMode, ShapeNode, TextNode, TextStyle};

    fn frame(name: &str) -> IrNode {
        IrNode::Frame(ContainerNode::new(NodeBase::new("1", name, Geometry::sized(10.0, 10.0))))
    }

    #[test]
    fn test_heading_thresholds() {
        assert_eq!(HeadingLevel::from_font_size(48.0), HeadingLevel::H1);
        assert_eq!(HeadingLevel::from_font_size(32.0), HeadingLevel::H1);
        assert_eq!(HeadingLevel::from_font_size(24.0), HeadingLevel::H2);
        assert_eq!(HeadingLevel::from_font_size(20.0), HeadingLevel::H3);
        assert_eq!(HeadingLevel::from_font_size(18.0), HeadingLevel::H4);
        assert_eq!(HeadingLevel::from_font_size(16.0), HeadingLevel::Paragraph);
        assert_eq!(HeadingLevel::from_font_size(24.0).html_tag(), "h2");
    }

    #[test]
    fn test_role_from_name() {
        assert_eq!(SemanticRole::from_name("Primary Button"), SemanticRole::Button);
        assert_eq!(SemanticRole::from_name("cta-btn"), SemanticRole::Button);
        assert_eq!(SemanticRole::from_name("Top Nav"), SemanticRole::Navigation);
        assert_eq!(SemanticRole::from_name("Product Card"), SemanticRole::Card);
        assert_eq!(SemanticRole::from_name("Email Field"), SemanticRole::Input);
        assert_eq!(SemanticRole::from_name("Frame 12"), SemanticRole::Container);
        // first match wins
        assert_eq!(SemanticRole::from_name("Card Button"), SemanticRole::Button);
    }

    #[test]
    fn test_detect() {
        assert_eq!(SemanticRole::detect(&frame("Site Footer")), SemanticRole::Footer);

        let mut base = NodeBase::new("2", "Photo", Geometry::sized(10.0, 10.0));
        base.fills.push(Fill::Image(ImagePaint {
            image_ref: Some("abc".into()),
            scale_mode: ScaleMode::Fill,
            opacity: None,
            visible: true,
        }));
        assert_eq!(SemanticRole::detect(&IrNode::Rectangle(ShapeNode::new(base))), SemanticRole::Image);

        let text = IrNode::Text(TextNode {
            base: NodeBase::new("3", "Button label", Geometry::default()),
            characters: "Go".into(),
            style: TextStyle::default(),
        });
        assert_eq!(SemanticRole::detect(&text), SemanticRole::Container);
    }

    #[test]
    fn test_placeholder_text() {
        let text = IrNode::Text(TextNode {
            base: NodeBase::new("3", "Hint", Geometry::default()),
            characters: "you@example.com".into(),
            style: TextStyle::default(),
        });
        let field = match frame("Email Field") {
            IrNode::Frame(c) => IrNode::Frame(c.with_child(text)),
            other => other,
        };
        assert_eq!(placeholder_text(&field), "you@example.com");
        assert_eq!(placeholder_text(&frame("Search Input")), "Search Input");
    }
}
