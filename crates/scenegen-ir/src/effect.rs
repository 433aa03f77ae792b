//! Shadows and blurs.

use crate::paint::Color;
use serde::{Deserialize, Serialize};

/// A 2D offset in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

/// Parameters of a drop or inner shadow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub color: Color,
    pub offset: Offset,
    pub radius: f64,
    pub spread: f64,
    pub visible: bool,
}

/// Parameters of a layer or background blur.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Blur {
    pub radius: f64,
    pub visible: bool,
}

/// A visual post-process attached to a node.
///
/// Invisible effects are kept in the IR; consumers skip them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Effect {
    DropShadow(Shadow),
    InnerShadow(Shadow),
    Blur(Blur),
    BackgroundBlur(Blur),
}

impl Effect {
    pub fn is_visible(&self) -> bool {
        match self {
            Self::DropShadow(s) | Self::InnerShadow(s) => s.visible,
            Self::Blur(b) | Self::BackgroundBlur(b) => b.visible,
        }
    }

    pub fn shadow(&self) -> Option<&Shadow> {
        match self {
            Self::DropShadow(s) | Self::InnerShadow(s) => Some(s),
            _ => None,
        }
    }
}
