/*
[INPUT]:  Timestamp strings as sent by the Task Service
[OUTPUT]: Short display strings for tables and CLI output
[POS]:    Presentation helpers shared by TUI and CLI
[UPDATE]: When the service changes its timestamp format
*/

use chrono::{DateTime, NaiveDateTime};

pub const MISSING_VALUE: &str = "—";
pub const DISPLAY_FORMAT: &str = "%d/%m/%y %H:%M";

/// Render a timestamp as `dd/mm/yy HH:MM`.
///
/// Accepts RFC 3339 and zone-less ISO 8601 (with or without fractional
/// seconds). Unparseable input is shown verbatim.
pub fn format_timestamp(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return MISSING_VALUE.to_string();
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format(DISPLAY_FORMAT).to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, pattern) {
            return parsed.format(DISPLAY_FORMAT).to_string();
        }
    }
    raw.to_string()
}

/// Display an optional text field, `—` when absent or blank
pub fn or_missing(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map_or_else(|| MISSING_VALUE.to_string(), str::to_string)
}
