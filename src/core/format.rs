//! Display formatting for backend figures. Values are rendered, never derived.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

/// `$` plus two fixed decimals.
pub fn format_money(amount: f64) -> String {
    format!("${amount:.2}")
}

/// A rate as a percentage: `0.1` → `"10%"`, `0.075` → `"7.5%"`.
pub fn format_percent(rate: f64) -> String {
    let fixed = format!("{:.2}", rate * 100.0);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    // "-0" from tiny negative rates
    let trimmed = if trimmed == "-0" { "0" } else { trimmed };
    format!("{trimmed}%")
}

/// Local date and time, or the raw text when it can't be parsed.
pub fn format_timestamp(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Local date only, or the raw text when it can't be parsed.
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Accepts RFC 3339 and naive ISO timestamps (treated as UTC).
fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive).with_timezone(&Local))
}
