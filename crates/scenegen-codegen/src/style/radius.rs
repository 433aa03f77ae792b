//! Corner radius conversion.

use super::units::px;
use scenegen_ir::CornerRadius;

/// CSS `border-radius` shorthand.
///
/// Collapses to a single value when all four corners match; otherwise the
/// four-value form in top-left, top-right, bottom-right, bottom-left order.
pub fn radius_to_css(radius: &CornerRadius) -> Option<String> {
    if radius.is_zero() {
        return None;
    }
    if let Some(uniform) = radius.uniform() {
        return Some(px(uniform));
    }
    let [tl, tr, br, bl] = radius.corners();
    Some(format!("{} {} {} {}", px(tl), px(tr), px(br), px(bl)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_corners_collapse() {
        let radius = CornerRadius::PerCorner {
            top_left: 8.0,
            top_right: 8.0,
            bottom_right: 8.0,
            bottom_left: 8.0,
        };
        assert_eq!(radius_to_css(&radius).as_deref(), Some("8px"));
        assert_eq!(radius_to_css(&CornerRadius::Uniform { radius: 8.0 }).as_deref(), Some("8px"));
    }

    #[test]
    fn test_mixed_corners() {
        let radius = CornerRadius::PerCorner {
            top_left: 8.0,
            top_right: 8.0,
            bottom_right: 0.0,
            bottom_left: 0.0,
        };
        assert_eq!(radius_to_css(&radius).as_deref(), Some("8px 8px 0px 0px"));
        assert_eq!(radius_to_css(&CornerRadius::NONE), None);
    }
}
