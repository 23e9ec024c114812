//! Format - Formatting Utilities

use chrono::{DateTime, Local, NaiveDateTime};

/// Parse a backend timestamp.
///
/// RFC 3339 values are converted to local time; zone-less ISO values are
/// taken as already local.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Format a backend timestamp for display; unparsable input is returned as-is
pub fn format_timestamp(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Hours between two backend timestamps
pub fn duration_hours(start: &str, stop: &str) -> Option<f64> {
    let start = parse_timestamp(start)?;
    let stop = parse_timestamp(stop)?;
    Some((stop - start).num_seconds() as f64 / 3600.0)
}

/// Format an hour count, e.g. `12.50 hrs`
pub fn format_hours(hours: f64, decimals: usize, suffix: &str) -> String {
    format!("{hours:.decimals$} {suffix}")
}

/// Truncate a string to `max_chars` characters with ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    let count = s.chars().count();
    if count <= max_chars {
        s.to_string()
    } else if max_chars <= 3 {
        s.chars().take(max_chars).collect()
    } else {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{head}...")
    }
}

/// Pad or truncate to exactly `width` characters
pub fn fit(s: &str, width: usize) -> String {
    let truncated = truncate(s, width);
    let pad = width.saturating_sub(truncated.chars().count());
    format!("{truncated}{}", " ".repeat(pad))
}
