//! Wire-to-canonical normalization.
//!
//! One generic routine walks an entity's schema table: read the first
//! present non-null source key, coerce numerics, substitute the declared
//! default when absent. Presence is what matters, not truthiness - an
//! explicit `credits: 0` is a balance of zero, not "no balance".
//!
//! Read paths never fail. A record that cannot produce a canonical value
//! (required field missing, required field uncoercible) yields `None` and
//! a warning; list normalization drops such elements rather than failing
//! the whole list.

use serde_json::{Map, Value};
use tracing::warn;

use crate::envelope::resolve_list;
use crate::schema::{FieldKind, WireEntity};

/// Normalize one wire record into a canonical record.
///
/// Returns `None` for `null` input (not an error - a missing detail
/// response reads as absence) and for records the schema cannot account
/// for. Values the service should not produce, like a member carrying both
/// owner references, pass through untouched; exclusivity is the service's
/// invariant, not this layer's.
#[must_use]
pub fn normalize<T: WireEntity>(raw: &Value) -> Option<T> {
    let Value::Object(record) = raw else {
        if !raw.is_null() {
            warn!(entity = %T::SCHEMA.kind, "wire record is not an object; dropping");
        }
        return None;
    };

    let mut canonical = Map::new();
    for field in T::SCHEMA.fields {
        // First present, non-null source key wins. An explicit wire null
        // reads the same as absence: the declared default.
        let source = field
            .read
            .iter()
            .filter_map(|key| record.get(*key))
            .find(|value| !value.is_null());

        let resolved = source.and_then(|value| {
            let coerced = coerce(field.kind, value);
            if coerced.is_none() {
                warn!(
                    entity = %T::SCHEMA.kind,
                    field = field.canonical,
                    "uncoercible wire value; falling back to default"
                );
            }
            coerced
        });

        match resolved.or_else(|| field.default.to_value()) {
            Some(value) => {
                canonical.insert(field.canonical.to_owned(), value);
            }
            None => {
                warn!(
                    entity = %T::SCHEMA.kind,
                    field = field.canonical,
                    "required field missing; dropping record"
                );
                return None;
            }
        }
    }

    match serde_json::from_value(Value::Object(canonical)) {
        Ok(record) => Some(record),
        Err(err) => {
            warn!(entity = %T::SCHEMA.kind, %err, "canonical record rejected; dropping");
            None
        }
    }
}

/// Normalize a list response, whatever envelope it arrived in.
///
/// Applies [`resolve_list`] then [`normalize`] per element, preserving
/// input order. A corrupt element is dropped; it must not fail the rest of
/// the list.
#[must_use]
pub fn normalize_list<T: WireEntity>(raw: &Value) -> Vec<T> {
    resolve_list(raw, T::SCHEMA.plural_key)
        .iter()
        .filter_map(|record| normalize(record))
        .collect()
}

/// Best-effort coercion of a wire value into the field's declared kind.
///
/// Numeric kinds accept JSON numbers and numeric strings (the service has
/// been seen quoting numbers on some endpoints). Strings and booleans pass
/// through untouched; a number where a string belongs is stringified.
/// `None` means the value cannot inhabit the field - the caller falls back
/// to the default or drops the record.
fn coerce(kind: FieldKind, value: &Value) -> Option<Value> {
    match kind {
        FieldKind::Int => match value {
            Value::Number(n) => n.as_i64().map(Value::from).or_else(|| {
                // Tolerate integral floats (`7.0`) from sloppy emitters.
                let f = n.as_f64().filter(|f| f.fract() == 0.0)?;
                #[allow(clippy::cast_possible_truncation)]
                let i = f as i64;
                Some(Value::from(i))
            }),
            Value::String(s) => s.trim().parse::<i64>().ok().map(Value::from),
            _ => None,
        },
        FieldKind::Float => match value {
            Value::Number(_) => Some(value.clone()),
            Value::String(s) => s.trim().parse::<f64>().ok().map(Value::from),
            _ => None,
        },
        FieldKind::Bool => match value {
            Value::Bool(_) => Some(value.clone()),
            _ => None,
        },
        FieldKind::Str => match value {
            Value::String(_) => Some(value.clone()),
            Value::Number(n) => Some(Value::from(n.to_string())),
            _ => None,
        },
    }
}
