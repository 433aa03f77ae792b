//! Defaulting view over host scene-graph objects.
//!
//! The host object model is structurally heterogeneous: a text node has no
//! `layoutMode`, a group has no `cornerRadius`, and mixed-value properties
//! report the string `"mixed"`. `SceneView` centralizes those checks so the
//! normalizer reads typed values with explicit defaults.

use crate::error::{json_type, NormalizeError, Result};
use serde_json::{Map, Value};

/// Sentinel the host reports for properties with mixed values.
pub const MIXED: &str = "mixed";

/// Node kinds the IR models, plus a catch-all for everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneKind {
    Frame,
    Component,
    Instance,
    Group,
    Text,
    Vector,
    Star,
    Polygon,
    Ellipse,
    Rectangle,
    Image,
    Unknown(String),
}

impl SceneKind {
    /// Parse the host `type` field.
    pub fn parse(kind: &str) -> Self {
        match kind {
            "FRAME" => Self::Frame,
            "COMPONENT" => Self::Component,
            "INSTANCE" => Self::Instance,
            "GROUP" => Self::Group,
            "TEXT" => Self::Text,
            "VECTOR" => Self::Vector,
            "STAR" => Self::Star,
            "POLYGON" => Self::Polygon,
            "ELLIPSE" => Self::Ellipse,
            "RECTANGLE" => Self::Rectangle,
            "IMAGE" => Self::Image,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Read-only view over one host object (a node, paint, effect, ...).
#[derive(Debug, Clone, Copy)]
pub struct SceneView<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> SceneView<'a> {
    /// Wrap a host value, which must be a JSON object.
    pub fn new(value: &'a Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(NormalizeError::NotAnObject {
                found: json_type(other),
            }),
        }
    }

    /// View a value if it is an object.
    pub fn try_new(value: &'a Value) -> Option<Self> {
        Self::new(value).ok()
    }

    /// Raw field, with `null` and the mixed sentinel treated as absent.
    pub fn field(&self, key: &str) -> Option<&'a Value> {
        match self.fields.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s == MIXED => None,
            Some(value) => Some(value),
        }
    }

    pub fn has(&self, key: &str) -> bool {
        self.field(key).is_some()
    }

    pub fn str(&self, key: &str) -> Option<&'a str> {
        self.field(key).and_then(Value::as_str)
    }

    pub fn str_or(&self, key: &str, default: &'a str) -> &'a str {
        self.str(key).unwrap_or(default)
    }

    /// Numeric field; non-finite or non-numeric values count as absent.
    pub fn f64(&self, key: &str) -> Option<f64> {
        self.field(key)
            .and_then(Value::as_f64)
            .filter(|v| v.is_finite())
    }

    pub fn f64_or(&self, key: &str, default: f64) -> f64 {
        self.f64(key).unwrap_or(default)
    }

    /// Non-negative numeric field.
    pub fn non_negative_or(&self, key: &str, default: f64) -> f64 {
        self.f64(key).map(|v| v.max(0.0)).unwrap_or(default)
    }

    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.field(key).and_then(Value::as_bool).unwrap_or(default)
    }

    /// Nested object field.
    pub fn object(&self, key: &str) -> Option<SceneView<'a>> {
        self.field(key).and_then(SceneView::try_new)
    }

    /// Array field. Absent fields yield an empty slice; present fields of
    /// another type are an error.
    pub fn array(&self, key: &'static str) -> Result<&'a [Value]> {
        match self.field(key) {
            None => Ok(&[]),
            Some(Value::Array(items)) => Ok(items.as_slice()),
            Some(other) => Err(NormalizeError::InvalidField {
                field: key,
                expected: "an array",
                found: json_type(other),
            }),
        }
    }

    /// Array field read leniently: anything but an array yields nothing.
    pub fn array_lenient(&self, key: &str) -> &'a [Value] {
        match self.field(key) {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        }
    }

    /// Host node id, or empty when absent.
    pub fn id(&self) -> &'a str {
        self.str_or("id", "")
    }

    /// Host node name, or empty when absent.
    pub fn name(&self) -> &'a str {
        self.str_or("name", "")
    }

    pub fn kind(&self) -> SceneKind {
        SceneKind::parse(self.str_or("type", ""))
    }
}
