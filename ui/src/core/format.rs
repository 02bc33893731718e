//! Formatting helpers for presenting metrics.

pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.1}%")
    } else {
        "—".to_string()
    }
}

pub fn format_number(value: f64, decimals: usize) -> String {
    if value.is_finite() {
        format!("{value:.decimals$}")
    } else {
        "—".to_string()
    }
}

/// Width of a progress bar fill, clamped to `0..=100`.
pub fn bar_width(value: f64) -> String {
    let clamped = if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    };
    format!("{clamped}%")
}

/// Upper-cases the first character ("partly cloudy" -> "Partly cloudy").
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_uses_one_decimal() {
        assert_eq!(format_percent(72.24), "72.2%");
        assert_eq!(format_percent(f64::NAN), "—");
    }

    #[test]
    fn bar_width_is_clamped() {
        assert_eq!(bar_width(140.0), "100%");
        assert_eq!(bar_width(-3.0), "0%");
        assert_eq!(bar_width(42.5), "42.5%");
    }

    #[test]
    fn capitalize_handles_empty_and_words() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("gray"), "Gray");
    }
}
