//! Best-effort field parsing. Nothing here returns an error: a value that
//! cannot be understood becomes `None`.

use chrono::{NaiveDate, NaiveDateTime};

/// Date-only formats, tried in order. Month-first precedes day-first so that
/// ambiguous slash dates ("05/01/2019") read as May 1st; an unambiguous
/// day-first date ("15/01/2019") fails the month-first pattern and falls
/// through.
const DATE_FORMATS: [&str; 9] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%B %d, %Y",
];

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse a free-text date cell.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    None
}

/// Parse an amount cell (Crore INR).
///
/// Thousands separators are stripped. Negative and non-finite values are not
/// valid amounts.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    let cleaned: String = s.chars().filter(|c| *c != ',').collect();
    let v = cleaned.parse::<f64>().ok()?;
    if v.is_finite() && v >= 0.0 {
        Some(v)
    } else {
        None
    }
}

/// Trimmed text cell; blank → `None`.
pub fn parse_text(raw: Option<&str>) -> Option<String> {
    let s = raw?.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
