//! Envelope resolution for list responses.
//!
//! The upstream service is inconsistent about how it wraps lists: some
//! endpoints return a bare array, some wrap it under a named key
//! (`{"students": [...]}`), some under a generic `data` key. Callers never
//! see the difference.

use serde_json::Value;
use tracing::warn;

/// The generic envelope key some endpoints wrap lists under.
const DATA_KEY: &str = "data";

/// Resolve which of the known response shapes holds the record list.
///
/// Accepted shapes, in fixed priority order for keyed envelopes:
///
/// 1. a bare array - returned unchanged;
/// 2. an object with `plural_key` holding an array;
/// 3. an object with `"data"` holding an array.
///
/// Anything else - including `null` - resolves to an empty slice, never an
/// error. Callers must treat an empty result as "no records"; a genuinely
/// malformed payload is indistinguishable from an empty one at this layer.
/// That leniency is deliberate (an upstream error page must not take a
/// whole screen down), so the degradation is logged to keep it observable.
#[must_use]
pub fn resolve_list<'a>(raw: &'a Value, plural_key: &str) -> &'a [Value] {
    match raw {
        Value::Array(records) => records.as_slice(),
        Value::Object(envelope) => {
            for key in [plural_key, DATA_KEY] {
                if let Some(Value::Array(records)) = envelope.get(key) {
                    return records.as_slice();
                }
            }
            warn!(
                plural_key,
                keys = ?envelope.keys().collect::<Vec<_>>(),
                "envelope has no recognized list key; treating as empty"
            );
            &[]
        }
        Value::Null => &[],
        other => {
            warn!(
                plural_key,
                got = %value_kind(other),
                "unexpected envelope shape; treating as empty"
            );
            &[]
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
