//! Rosterpay wire translation boundary.
//!
//! The record-keeping service the console talks to is inconsistent about
//! how it spells and wraps things: snake_case keys, renamed fields
//! (`rfid_id`, `credits`, `tope`), lists that arrive bare, under a named
//! key, or under a generic `data` key, and partial-update semantics where
//! an omitted field means "leave it alone". This crate is the single place
//! that vocabulary is allowed to exist. Everything above it works against
//! the canonical records in [`rosterpay_core`].
//!
//! # Architecture
//!
//! - [`schema`] - declarative per-entity field tables (rename, defaults,
//!   create/update rules). Data, not behavior.
//! - [`envelope`] - resolves which of the known response shapes holds the
//!   record list.
//! - [`normalize`] - one generic routine that walks a schema table and
//!   turns a wire record into a canonical record.
//! - [`changeset`] - tri-state field patches (`Keep`/`Clear`/`Set`) so
//!   "don't send" is distinct from "send null".
//! - [`denormalize`] - projects a change-set into the exact partial
//!   payload the service expects for create vs. update.
//! - [`session`] - the narrow adapter for the authenticated-user record.
//!
//! # Error policy
//!
//! Read paths never fail: absent input normalizes to `None`/empty, a
//! malformed envelope degrades to "no records", and a corrupt element is
//! dropped from a list rather than failing it. The only error this crate
//! can signal is a missing mandatory field when building a create payload,
//! because that payload has real server-side validation consequences.
//!
//! The whole crate is synchronous and referentially transparent: no I/O,
//! no shared state, safe from any number of threads.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod changeset;
pub mod denormalize;
pub mod envelope;
pub mod normalize;
pub mod schema;
pub mod session;

pub use changeset::{ChangeSet, Patch};
pub use denormalize::{denormalize_for_create, denormalize_for_update};
pub use envelope::resolve_list;
pub use normalize::{normalize, normalize_list};
pub use schema::{EntityKind, WireEntity};
pub use session::normalize_session;

use thiserror::Error;

/// Errors that can cross the translation boundary.
///
/// Read-path operations absorb malformed input instead of surfacing it;
/// only the create-path denormalizer signals an error, and only for a
/// missing mandatory field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WireError {
    /// A field the service requires on create was not supplied.
    #[error("missing required field `{field}` for {entity} create")]
    MissingRequiredField {
        /// Entity kind the payload was being built for.
        entity: EntityKind,
        /// Canonical name of the missing field.
        field: &'static str,
    },
}
