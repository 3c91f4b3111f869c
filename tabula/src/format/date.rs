//! Date pattern translation and lenient date parsing.

use std::fmt::Write;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use log::debug;

use crate::model::Value;

const PATTERN_LETTERS: &str = "yYMdDEHhmsa";
const DATE_LETTERS: &str = "yYMdD";

/// Returns `true` if `spec` reads like a date pattern such as `dd/MM/yyyy`.
///
/// Every letter outside single quotes must be a pattern letter, and at least
/// one must be a year, month or day.
pub fn looks_like_pattern(spec: &str) -> bool {
    let mut has_date = false;
    let mut quoted = false;

    for ch in spec.chars() {
        if ch == '\'' {
            quoted = !quoted;
        } else if !quoted && ch.is_alphabetic() {
            if !PATTERN_LETTERS.contains(ch) {
                return false;
            }
            has_date |= DATE_LETTERS.contains(ch);
        }
    }
    has_date
}

/// Translate a `yyyy-MM-dd` style pattern into a chrono strftime string.
///
/// Text between single quotes is copied literally.
pub fn to_strftime(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if ch == '\'' {
            i += 1;
            while i < chars.len() && chars[i] != '\'' {
                push_literal(&mut out, chars[i]);
                i += 1;
            }
            i += 1;
            continue;
        }

        let mut run = 1;
        while i + run < chars.len() && chars[i + run] == ch {
            run += 1;
        }

        let spec = match (ch, run) {
            ('y' | 'Y', 2) => Some("%y"),
            ('y' | 'Y', _) => Some("%Y"),
            ('M', 1) => Some("%-m"),
            ('M', 2) => Some("%m"),
            ('M', 3) => Some("%b"),
            ('M', _) => Some("%B"),
            ('d' | 'D', 1) => Some("%-d"),
            ('d' | 'D', _) => Some("%d"),
            ('E', 1..=3) => Some("%a"),
            ('E', _) => Some("%A"),
            ('H', 1) => Some("%-H"),
            ('H', _) => Some("%H"),
            ('h', 1) => Some("%-I"),
            ('h', _) => Some("%I"),
            ('m', _) => Some("%M"),
            ('s', _) => Some("%S"),
            ('a', _) => Some("%p"),
            _ => None,
        };

        match spec {
            Some(s) => out.push_str(s),
            None => {
                for _ in 0..run {
                    push_literal(&mut out, ch);
                }
            }
        }
        i += run;
    }

    out
}

fn push_literal(out: &mut String, ch: char) {
    if ch == '%' {
        out.push_str("%%");
    } else {
        out.push(ch);
    }
}

/// Interpret a value as a point in time.
///
/// Accepts native dates, RFC 3339 strings, `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS`
/// and integer epoch milliseconds. Timestamps are read in UTC.
pub fn parse(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::Date(d) => d.and_hms_opt(0, 0, 0),
        Value::DateTime(dt) => Some(dt.naive_utc()),
        Value::Int(ms) => DateTime::from_timestamp_millis(*ms).map(|dt| dt.naive_utc()),
        Value::String(s) => parse_str(s.trim()),
        Value::Json(serde_json::Value::String(s)) => parse_str(s.trim()),
        _ => None,
    }
}

fn parse_str(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Format `value` with a `yyyy-MM-dd` style pattern.
///
/// Returns `None` when the value cannot be read as a date.
pub fn format(value: &Value, pattern: &str) -> Option<String> {
    let Some(at) = parse(value) else {
        debug!("'{value}' is not a date, showing it as-is");
        return None;
    };
    let mut out = String::new();
    write!(out, "{}", at.format(&to_strftime(pattern))).ok()?;
    Some(out)
}
