use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));
// ASCII digits only; `\d` in the regex crate also matches other scripts.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern compiles"));
// Unanchored: any http(s) link inside the value is enough.
static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+").expect("url pattern compiles"));

const DATE_TIME_FORMATS: [&str; 8] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub(crate) fn looks_like_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub(crate) fn is_phone_number(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

pub(crate) fn is_web_url(value: &str) -> bool {
    URL_PATTERN.is_match(value)
}

/// Finite decimal such as `3`, `2.5` or `1e1`.
///
/// The experience input is numeric, so `Infinity`, `NaN` and hex literals like `0x10` are
/// rejected rather than coerced.
pub(crate) fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

/// Accepts the `datetime-local` shape (`2025-10-01T09:30`), space- and slash-separated
/// variants, RFC 3339 timestamps, and a bare date taken as midnight.
pub fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
