//! Item id normalisation.
//!
//! Clients address items through a path segment, which is always text,
//! while stored ids are JSON values (normally numbers). `ItemKey` parses the
//! segment once so that `/items/1` finds the item whose id is `1`, and an id
//! rewritten to the string `"abc"` is still reachable at `/items/abc`.
//!
//! # Matching Rules
//! - stored number: equal to the numeric reading of the segment
//! - stored string: identical to the raw segment
//! - stored boolean: `true` is `1`, `false` is `0`
//! - stored array / object: its text form equals the raw segment, where an
//!   array joins its elements with `,` and an object reads `[object Object]`
//! - stored null: never matches
//!
//! The numeric reading accepts surrounding whitespace, decimal and exponent
//! notation, `0x`/`0o`/`0b` integer prefixes and `Infinity`. An empty or
//! all-whitespace segment reads as `0`.

use std::fmt;

use serde_json::Value;

/// A normalised item id taken from a request path.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemKey {
    raw: String,
    numeric: Option<f64>,
}

impl ItemKey {
    /// Normalise a raw path segment.
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            numeric: numeric_value(raw),
        }
    }

    /// Numeric reading of the segment, if it has one.
    pub fn numeric(&self) -> Option<f64> {
        self.numeric
    }

    /// Whether a stored `id` value is addressed by this key.
    pub fn matches(&self, id: &Value) -> bool {
        match id {
            Value::Number(n) => match (n.as_f64(), self.numeric) {
                (Some(stored), Some(wanted)) => stored == wanted,
                _ => false,
            },
            Value::String(s) => *s == self.raw,
            Value::Bool(b) => self.numeric == Some(if *b { 1.0 } else { 0.0 }),
            Value::Array(_) | Value::Object(_) => text_form(id) == self.raw,
            Value::Null => false,
        }
    }
}

impl From<u64> for ItemKey {
    fn from(id: u64) -> Self {
        Self::parse(&id.to_string())
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Text form of a stored value, as used when comparing containers to text.
fn text_form(value: &Value) -> String {
    match value {
        // Inside an array, null becomes an empty element.
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(elements) => elements
            .iter()
            .map(text_form)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_text(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

fn numeric_value(raw: &str) -> Option<f64> {
    let text = raw.trim();
    if text.is_empty() {
        return Some(0.0);
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = text.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix).ok().map(|v| v as f64);
        }
    }

    let unsigned = text.trim_start_matches(['+', '-']);
    if unsigned == "Infinity" && text.len() - unsigned.len() <= 1 {
        return Some(if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    // f64::from_str also takes "inf" and "NaN", which are not numbers here.
    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return None;
    }
    text.parse::<f64>().ok()
}
