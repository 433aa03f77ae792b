//! Target-agnostic style conversion.
//!
//! Pure functions turning IR paints, effects, radii and lengths into the
//! strings generated code needs. Every serializer goes through these so
//! colors and gradient angles agree across targets.

pub mod color;
pub mod effect;
pub mod paint;
pub mod radius;
pub mod units;

pub use color::{color_to_argb, color_to_css, color_to_hex};
pub use effect::{backdrop_filter, box_shadow, filter, shadow_to_css, text_shadow};
pub use paint::{background, fill_to_css, gradient_angle, gradient_to_css, stroke_to_border};
pub use radius::radius_to_css;
pub use units::{format_number, px, px_to_rem, rem};
