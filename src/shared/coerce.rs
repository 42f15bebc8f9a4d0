//! Lenient coercion helpers for untyped wire fields.
//!
//! The backend is not strict about the shape of several deal fields, so the
//! mappers type them as raw [`serde_json::Value`] and coerce here. The
//! contract across all helpers: never panic, never error — return `None`
//! (or `false`) when the value does not fit.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// Extract a string and uppercase it, for enum-ish fields the backend sends
/// in inconsistent casing.
pub fn as_uppercase_str(raw: &Value) -> Option<String> {
    raw.as_str().map(|s| s.trim().to_ascii_uppercase())
}

/// JS-style truthiness: `null`/`false`/`0`/`""` are false, everything else
/// (non-empty strings, non-zero numbers, arrays, objects) is true.
pub fn truthy(raw: &Value) -> bool {
    match raw {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Extract a money amount from a string or number field.
///
/// Prices arrive as decimal strings in the documented schema but show up as
/// raw JSON numbers (sometimes nano-unit integers) in practice.
pub fn as_decimal(raw: &Value) -> Option<Decimal> {
    match raw {
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Decimal::from(i))
            } else {
                n.as_f64().and_then(|f| Decimal::try_from(f).ok())
            }
        }
        _ => None,
    }
}

/// Parse an RFC 3339 timestamp string; anything else is `None`.
pub fn as_timestamp(raw: &Value) -> Option<DateTime<Utc>> {
    raw.as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}
