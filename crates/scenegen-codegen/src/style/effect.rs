//! Shadow and blur conversion.

use super::color::color_to_css;
use super::units::px;
use scenegen_ir::{Effect, Shadow};

/// One CSS shadow, e.g. `0px 4px 8px 0px rgba(0, 0, 0, 0.25)`.
pub fn shadow_to_css(shadow: &Shadow, inset: bool) -> String {
    format!(
        "{}{} {} {} {} {}",
        if inset { "inset " } else { "" },
        px(shadow.offset.x),
        px(shadow.offset.y),
        px(shadow.radius),
        px(shadow.spread),
        color_to_css(&shadow.color)
    )
}

/// CSS `box-shadow` for the visible drop and inner shadows.
pub fn box_shadow(effects: &[Effect]) -> Option<String> {
    let shadows: Vec<String> = effects
        .iter()
        .filter(|e| e.is_visible())
        .filter_map(|effect| match effect {
            Effect::DropShadow(s) => Some(shadow_to_css(s, false)),
            Effect::InnerShadow(s) => Some(shadow_to_css(s, true)),
            _ => None,
        })
        .collect();
    (!shadows.is_empty()).then(|| shadows.join(", "))
}

/// CSS `text-shadow` for the visible drop shadows. Text shadows have no spread.
pub fn text_shadow(effects: &[Effect]) -> Option<String> {
    let shadows: Vec<String> = effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::DropShadow(s) if s.visible => Some(format!(
                "{} {} {} {}",
                px(s.offset.x),
                px(s.offset.y),
                px(s.radius),
                color_to_css(&s.color)
            )),
            _ => None,
        })
        .collect();
    (!shadows.is_empty()).then(|| shadows.join(", "))
}

/// CSS `filter` for a visible layer blur.
pub fn filter(effects: &[Effect]) -> Option<String> {
    effects.iter().find_map(|effect| match effect {
        Effect::Blur(b) if b.visible => Some(format!("blur({})", px(b.radius))),
        _ => None,
    })
}

/// CSS `backdrop-filter` for a visible background blur.
pub fn backdrop_filter(effects: &[Effect]) -> Option<String> {
    effects.iter().find_map(|effect| match effect {
        Effect::BackgroundBlur(b) if b.visible => Some(format!("blur({})", px(b.radius))),
        _ => None,
    })
}

/// First visible drop shadow, for targets with a single native shadow.
pub fn primary_shadow(effects: &[Effect]) -> Option<&Shadow> {
    effects.iter().find_map(|effect| match effect {
        Effect::DropShadow(s) if s.visible => Some(s),
        _ => None,
    })
}

/// Radius of the first visible layer blur.
pub fn layer_blur(effects: &[Effect]) -> Option<f64> {
    effects.iter().find_map(|effect| match effect {
        Effect::Blur(b) if b.visible => Some(b.radius),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenegen_ir::{Blur, Color, Offset};

    fn shadow(visible: bool) -> Shadow {
        Shadow {
            color: Color::rgba(0, 0, 0, 0.25),
            offset: Offset { x: 0.0, y: 4.0 },
            radius: 8.0,
            spread: 0.0,
            visible,
        }
    }

    #[test]
    fn test_box_shadow() {
        let effects = vec![
            Effect::DropShadow(shadow(true)),
            Effect::InnerShadow(shadow(true)),
            Effect::DropShadow(shadow(false)),
        ];
        assert_eq!(
            box_shadow(&effects).unwrap(),
            "0px 4px 8px 0px rgba(0, 0, 0, 0.25), inset 0px 4px 8px 0px rgba(0, 0, 0, 0.25)"
        );
        assert_eq!(text_shadow(&effects).unwrap(), "0px 4px 8px rgba(0, 0, 0, 0.25)");
        assert_eq!(box_shadow(&[]), None);
    }

    #[test]
    fn test_blurs() {
        let effects = vec![
            Effect::Blur(Blur { radius: 4.0, visible: true }),
            Effect::BackgroundBlur(Blur { radius: 12.0, visible: true }),
        ];
        assert_eq!(filter(&effects).as_deref(), Some("blur(4px)"));
        assert_eq!(backdrop_filter(&effects).as_deref(), Some("blur(12px)"));
        assert_eq!(layer_blur(&effects), Some(4.0));
        assert!(primary_shadow(&effects).is_none());
    }
}
