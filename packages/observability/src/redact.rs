//! Secret redaction for structured log fields.

use serde_json::{Map, Value};
use std::collections::HashMap;

const REDACTED: &str = "[REDACTED]";

const DENYLIST_KEYS: [&str; 6] = [
    "token",
    "authorization",
    "cookie",
    "password",
    "secret",
    "credential",
];

/// Replace sensitive values in event fields with `[REDACTED]`.
///
/// A value is sensitive if its key contains a denylisted word, or if the
/// value itself looks like a bearer header or a JWT.
pub fn redact_fields(fields: HashMap<String, Value>) -> HashMap<String, Value> {
    fields
        .into_iter()
        .map(|(key, value)| {
            let value = redact_value(&key, value);
            (key, value)
        })
        .collect()
}

fn redact_value(key: &str, value: Value) -> Value {
    if is_sensitive_key(key) {
        return Value::String(REDACTED.to_string());
    }

    match value {
        Value::String(s) if looks_like_sensitive_value(&s) => Value::String(REDACTED.to_string()),
        Value::Object(map) => {
            let mut out = Map::new();
            for (k, v) in map {
                let v = redact_value(&k, v);
                out.insert(k, v);
            }
            Value::Object(out)
        }
        Value::Array(items) => {
            Value::Array(items.into_iter().map(|v| redact_value(key, v)).collect())
        }
        other => other,
    }
}

fn is_sensitive_key(key: &str) -> bool {
    let lower = key.to_ascii_lowercase();
    DENYLIST_KEYS.iter().any(|entry| lower.contains(entry))
}

fn looks_like_sensitive_value(raw: &str) -> bool {
    if raw.to_ascii_lowercase().starts_with("bearer ") {
        return true;
    }
    // header.payload.signature
    raw.matches('.').count() == 2 && raw.len() > 40 && !raw.contains(' ')
}
