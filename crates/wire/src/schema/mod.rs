//! Declarative field tables for every entity the service exchanges.
//!
//! Everything the boundary knows about an entity's wire shape lives in one
//! table - wire spellings, accepted synonyms, defaults, and create/update
//! rules - iterated by a single generic routine in [`crate::normalize`]
//! and [`crate::denormalize`]. No call site hand-checks fields; adding a
//! field to the service means adding a row here. The tables are pure data;
//! nothing in this module has behavior beyond small accessors.

use serde::de::DeserializeOwned;
use serde_json::Value;

mod tables;

/// The entity kinds the service exchanges.
///
/// Used for logging and error reporting; dispatch is by type, not by this
/// enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Member,
    Guardian,
    StaffMember,
    Branch,
    ClientAdmin,
    Transaction,
    SessionUser,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Member => "member",
            Self::Guardian => "guardian",
            Self::StaffMember => "staff_member",
            Self::Branch => "branch",
            Self::ClientAdmin => "client_admin",
            Self::Transaction => "transaction",
            Self::SessionUser => "session_user",
        };
        write!(f, "{name}")
    }
}

/// Declared type of a field, driving read coercion.
///
/// Numeric kinds are coerced on read (a JSON string holding a number
/// parses); strings and booleans pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Int,
    Float,
    Bool,
    Str,
}

/// Value substituted when every read key for a field is absent or null.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    /// No default: the field is required for the record to exist at all.
    Missing,
    /// Defaults to JSON `null` (nullable references).
    Null,
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(&'static str),
}

impl DefaultValue {
    /// The JSON value to substitute, or `None` when the field is required.
    #[must_use]
    pub fn to_value(self) -> Option<Value> {
        match self {
            Self::Missing => None,
            Self::Null => Some(Value::Null),
            Self::Int(n) => Some(Value::from(n)),
            Self::Float(n) => Some(Value::from(n)),
            Self::Bool(b) => Some(Value::from(b)),
            Self::Str(s) => Some(Value::from(s)),
        }
    }
}

/// How a field participates in create payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateRule {
    /// Must be supplied; its absence is the one error this crate signals.
    Required,
    /// Included only when explicitly supplied.
    Optional,
    /// Server-assigned (or assigned through a later action); ignored even
    /// if supplied.
    Never,
}

/// One canonical field and everything the boundary knows about it.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Canonical (camelCase) name, matching the record's serde spelling.
    pub canonical: &'static str,
    /// Additional accepted canonical-side spellings for change-sets, in
    /// precedence order after `canonical`. The first present synonym wins;
    /// supplying several is not an error, later ones are ignored.
    pub aliases: &'static [&'static str],
    /// Wire source keys in precedence order; the first present non-null
    /// key is read.
    pub read: &'static [&'static str],
    /// Wire key for update payloads; `None` means not updatable.
    pub write: Option<&'static str>,
    /// Wire key override for create payloads where it differs from
    /// `write` (the service reads a transaction's tag back as `rfid_used`
    /// but accepts it as `rfid` on create).
    pub write_create: Option<&'static str>,
    /// Declared type, driving read coercion.
    pub kind: FieldKind,
    /// Default substituted when absent on read.
    pub default: DefaultValue,
    /// Create-payload rule.
    pub create: CreateRule,
}

impl FieldSpec {
    /// Canonical name plus declared aliases, in precedence order.
    pub fn accepted_names(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.canonical).chain(self.aliases.iter().copied())
    }

    /// The wire key a create payload uses for this field, if any.
    #[must_use]
    pub fn create_key(&self) -> Option<&'static str> {
        self.write_create.or(self.write)
    }
}

/// The full wire schema for one entity kind.
#[derive(Debug)]
pub struct Schema {
    pub kind: EntityKind,
    /// Envelope key the service uses when it wraps this entity's lists
    /// under a named key (e.g. `"students"`).
    pub plural_key: &'static str,
    /// Ordered field list; payloads are emitted in this order.
    pub fields: &'static [FieldSpec],
}

impl Schema {
    /// Look up a field by canonical name or declared alias.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|f| f.accepted_names().any(|n| n == name))
    }
}

/// A canonical record type with a declared wire schema.
///
/// Implemented for every [`rosterpay_core`] record the service exchanges;
/// the generic normalize/denormalize routines are driven entirely by
/// `SCHEMA`.
pub trait WireEntity: DeserializeOwned {
    const SCHEMA: &'static Schema;
}
