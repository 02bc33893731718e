//! Capture timestamps.
//!
//! The pipeline names snapshots `YYYY-MM-DD_HH-MM-SS` in local (Berlin) time
//! without an offset, so they are handled as `PrimitiveDateTime` and never
//! shifted into the viewer's zone.

use time::{macros::format_description, PrimitiveDateTime};

pub fn parse(raw: &str) -> Option<PrimitiveDateTime> {
    PrimitiveDateTime::parse(
        raw.trim(),
        &format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]"),
    )
    .ok()
}

/// `Sunday, 16 March 2025`
pub fn format_long_date(raw: &str) -> String {
    format_with(raw, |ts| {
        ts.format(&format_description!(
            "[weekday], [day padding:none] [month repr:long] [year]"
        ))
        .ok()
    })
}

/// `16:21:35`
pub fn format_long_time(raw: &str) -> String {
    format_with(raw, |ts| {
        ts.format(&format_description!("[hour]:[minute]:[second]")).ok()
    })
}

/// `16:21`
pub fn format_short_time(raw: &str) -> String {
    format_with(raw, |ts| ts.format(&format_description!("[hour]:[minute]")).ok())
}

/// `Mar 16, 16:21`
pub fn format_date_time(raw: &str) -> String {
    format_with(raw, |ts| {
        ts.format(&format_description!(
            "[month repr:short] [day padding:none], [hour]:[minute]"
        ))
        .ok()
    })
}

// Unparseable stamps are shown verbatim rather than hidden.
fn format_with(raw: &str, f: impl FnOnce(PrimitiveDateTime) -> Option<String>) -> String {
    parse(raw).and_then(f).unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn parses_pipeline_format() {
        assert_eq!(parse("2025-03-16_16-21-35"), Some(datetime!(2025-03-16 16:21:35)));
        assert_eq!(parse("2025-03-16T16:21:35Z"), None);
        assert_eq!(parse(""), None);
    }

    #[test]
    fn formats_for_display() {
        let raw = "2025-03-16_16-21-35";
        assert_eq!(format_long_date(raw), "Sunday, 16 March 2025");
        assert_eq!(format_long_time(raw), "16:21:35");
        assert_eq!(format_short_time(raw), "16:21");
        assert_eq!(format_date_time(raw), "Mar 16, 16:21");
    }

    #[test]
    fn malformed_stamps_pass_through() {
        assert_eq!(format_short_time("yesterday"), "yesterday");
    }
}
