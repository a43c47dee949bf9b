use chrono::{DateTime, NaiveDateTime, Utc};

const DISPLAY_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// Accepts RFC 3339 timestamps as well as the naive ISO form the API emits
/// for some columns (treated as UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|naive| naive.and_utc())
}

pub fn format_timestamp(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|ts| ts.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}

pub fn format_optional_timestamp(raw: Option<&str>, missing: &str) -> String {
    match raw {
        Some(value) if !value.trim().is_empty() => format_timestamp(value),
        _ => missing.to_string(),
    }
}
