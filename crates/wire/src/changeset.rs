//! Tri-state field patches for partial updates.
//!
//! The service's PATCH semantics give an omitted key and an explicit null
//! different meanings, so a plain `Option` per field cannot represent an
//! edit. The three states are explicit here: a field is kept (omitted from
//! the payload), cleared (an explicit JSON `null` is sent), or set to a
//! value.

use serde_json::Value;

/// Shared default returned for fields no entry was recorded for.
pub(crate) static KEEP: Patch = Patch::Keep;

/// The state of one field in a proposed edit.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Patch {
    /// Leave the field untouched; it is omitted from the payload. This is
    /// the "unset" sentinel - distinct from [`Patch::Clear`], since `null`
    /// is a legitimate value for nullable fields such as owner references.
    #[default]
    Keep,
    /// Clear the field: an explicit JSON `null` is sent.
    Clear,
    /// Replace the field with a new value.
    Set(Value),
}

impl Patch {
    /// Whether this patch contributes a key to the payload.
    #[must_use]
    pub const fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }
}

/// A sparse set of proposed field changes, keyed by canonical field name
/// (or a declared alias - `limit` and `tope` both reach a member's daily
/// limit).
///
/// A name absent from the set reads as [`Patch::Keep`]. Setting the same
/// name twice keeps the later entry.
///
/// # Example
///
/// ```rust
/// use rosterpay_wire::ChangeSet;
///
/// let changes = ChangeSet::new()
///     .set("name", "Juan")
///     .set("dailyLimit", 20)
///     .clear("ownerGuardianId");
/// assert_eq!(changes.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChangeSet {
    entries: Vec<(String, Patch)>,
}

impl ChangeSet {
    /// An empty change-set; every field reads as kept.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set a field to a new value.
    #[must_use]
    pub fn set(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(field.into(), Patch::Set(value.into()))
    }

    /// Clear a field: an explicit `null` is sent.
    #[must_use]
    pub fn clear(self, field: impl Into<String>) -> Self {
        self.push(field.into(), Patch::Clear)
    }

    /// Apply a prebuilt patch (useful when threading form state through).
    #[must_use]
    pub fn patch(self, field: impl Into<String>, patch: Patch) -> Self {
        self.push(field.into(), patch)
    }

    /// The patch recorded for `field`; [`Patch::Keep`] when absent.
    #[must_use]
    pub fn get(&self, field: &str) -> &Patch {
        // Later entries win, matching map-assignment intuition.
        self.entries
            .iter()
            .rev()
            .find_map(|(name, patch)| (name.as_str() == field).then_some(patch))
            .unwrap_or(&KEEP)
    }

    /// Names recorded in this change-set, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(mut self, field: String, patch: Patch) -> Self {
        self.entries.push((field, patch));
        self
    }
}
