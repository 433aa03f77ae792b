//! Intermediate representation for design scene graphs.
//!
//! This crate provides the closed, serializable tree format shared by the
//! normalizer and every code serializer:
//! - Node variants (frames, text, vector shapes, images, groups)
//! - Value objects (colors, paints, effects, layout, text style)
//! - Error types for the JSON interchange format
//!
//! An [`IrNode`] is a strict tree: it owns its children, holds no
//! back-references and can be cloned or serialized at any point.

pub mod effect;
pub mod errors;
pub mod geometry;
pub mod layout;
pub mod node;
pub mod paint;
pub mod stack;
pub mod text;

pub use effect::*;
pub use errors::*;
pub use geometry::*;
pub use layout::*;
pub use node::*;
pub use paint::*;
pub use text::*;

/// Maximum tree depth (in levels, root = 1) the normalizer will produce.
pub const MAX_DEPTH: usize = 100;

/// Maximum number of direct children kept on any container.
pub const MAX_CHILDREN: usize = 1000;
