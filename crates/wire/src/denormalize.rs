//! Canonical-to-wire payload projection.
//!
//! Two operations with different completeness rules: create payloads must
//! carry every mandatory field (the one place this crate signals an
//! error), update payloads carry exactly what changed. Both walk the
//! schema table in declared order, so payload key order is stable.

use serde_json::{Map, Value};
use tracing::debug;

use crate::changeset::{ChangeSet, Patch};
use crate::schema::{CreateRule, FieldSpec, WireEntity};
use crate::WireError;

/// Build the wire payload for creating a record.
///
/// Every field the schema marks mandatory-on-create must be present in
/// `changes`; a missing one is reported as
/// [`WireError::MissingRequiredField`] naming the field, because creation
/// payloads have real server-side validation consequences. Optional fields
/// are included only when explicitly supplied; fields never supplied are
/// omitted entirely, not sent as `null`. Server-assigned fields are
/// ignored even if supplied.
///
/// # Errors
///
/// Returns [`WireError::MissingRequiredField`] for the first mandatory
/// field (in schema order) with no supplied value.
pub fn denormalize_for_create<T: WireEntity>(
    changes: &ChangeSet,
) -> Result<Map<String, Value>, WireError> {
    report_unknown_names::<T>(changes);

    let mut payload = Map::new();
    for field in T::SCHEMA.fields {
        if field.create == CreateRule::Never {
            continue;
        }
        let Some(wire_key) = field.create_key() else {
            continue;
        };
        match first_patch(changes, field) {
            Patch::Keep => {
                if field.create == CreateRule::Required {
                    return Err(WireError::MissingRequiredField {
                        entity: T::SCHEMA.kind,
                        field: field.canonical,
                    });
                }
            }
            Patch::Clear => {
                payload.insert(wire_key.to_owned(), Value::Null);
            }
            Patch::Set(value) => {
                payload.insert(wire_key.to_owned(), value.clone());
            }
        }
    }
    Ok(payload)
}

/// Build the minimal PATCH-style payload for a partial update.
///
/// For each schema field, the first present (non-kept) synonym in the
/// declared precedence list wins; supplying several synonyms is not an
/// error, later ones are ignored. Cleared fields serialize as explicit
/// `null`; kept fields are omitted. Fields the service does not accept on
/// PATCH are never emitted.
///
/// An empty payload is a legal output - callers decide whether to skip the
/// network call, not this layer.
#[must_use]
pub fn denormalize_for_update<T: WireEntity>(changes: &ChangeSet) -> Map<String, Value> {
    report_unknown_names::<T>(changes);

    let mut payload = Map::new();
    for field in T::SCHEMA.fields {
        let Some(wire_key) = field.write else {
            continue;
        };
        match first_patch(changes, field) {
            Patch::Keep => {}
            Patch::Clear => {
                payload.insert(wire_key.to_owned(), Value::Null);
            }
            Patch::Set(value) => {
                payload.insert(wire_key.to_owned(), value.clone());
            }
        }
    }
    payload
}

/// The first non-kept patch among the field's accepted names, in declared
/// precedence order.
fn first_patch<'a>(changes: &'a ChangeSet, field: &FieldSpec) -> &'a Patch {
    field
        .accepted_names()
        .map(|name| changes.get(name))
        .find(|patch| !patch.is_keep())
        .unwrap_or(&crate::changeset::KEEP)
}

/// Log change-set names no schema field accepts; typos would otherwise
/// vanish silently into an omitted key.
fn report_unknown_names<T: WireEntity>(changes: &ChangeSet) {
    for name in changes.names() {
        if T::SCHEMA.field(name).is_none() {
            debug!(entity = %T::SCHEMA.kind, field = name, "change-set name matches no schema field; ignored");
        }
    }
}
