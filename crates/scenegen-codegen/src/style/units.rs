//! Number formatting and unit conversion.

/// Format a number for generated code: at most three decimals, no
/// trailing zeros, no negative zero.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    // Past 1e15 an f64 has no fractional digits, and scaling could overflow.
    let rounded = if value.abs() < 1e15 {
        (value * 1000.0).round() / 1000.0
    } else {
        value
    };
    if rounded == 0.0 {
        return "0".to_string();
    }
    let text = format!("{:.3}", rounded);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Pixel length, e.g. `12px`.
pub fn px(value: f64) -> String {
    format!("{}px", format_number(value))
}

/// Pixels converted to rem against `base`.
pub fn px_to_rem(value: f64, base: f64) -> f64 {
    if base > 0.0 {
        value / base
    } else {
        value
    }
}

/// Relative length, e.g. `1.5rem`. Zero is written without a unit.
pub fn rem(value: f64, base: f64) -> String {
    let converted = px_to_rem(value, base);
    if format_number(converted) == "0" {
        "0".to_string()
    } else {
        format!("{}rem", format_number(converted))
    }
}

/// Degrees, e.g. `90deg`.
pub fn deg(value: f64) -> String {
    format!("{}deg", format_number(value))
}

/// A unit fraction as a percentage, e.g. `0.5` to `50%`.
pub fn percent(value: f64) -> String {
    format!("{}%", format_number(value * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(16.0), "16");
        assert_eq!(format_number(0.875), "0.875");
        assert_eq!(format_number(1.0 / 3.0), "0.333");
        assert_eq!(format_number(-0.0001), "0");
        assert_eq!(format_number(-2.5), "-2.5");
        assert_eq!(format_number(f64::NAN), "0");
    }

    #[test]
    fn test_format_huge_number() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        let max = format_number(f64::MAX);
        assert!(!max.contains("inf"));
        assert!(!max.contains('.'));
        assert_eq!(max.len(), 309);
        assert!(format_number(-f64::MAX).starts_with("-179769"));
    }

    #[test]
    fn test_units() {
        assert_eq!(px(8.0), "8px");
        assert_eq!(px(0.0), "0px");
        assert_eq!(rem(16.0, 16.0), "1rem");
        assert_eq!(rem(24.0, 16.0), "1.5rem");
        assert_eq!(rem(0.0, 16.0), "0");
        assert_eq!(deg(90.0), "90deg");
        assert_eq!(percent(0.25), "25%");
    }
}
