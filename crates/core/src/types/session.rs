//! The authenticated-user record.

use serde::{Deserialize, Serialize};

use super::id::UserId;
use super::role::Role;

/// The authenticated console user.
///
/// Produced once per login by the session adapter and handed to the route
/// guard as an explicit value - screens never read session state from a
/// global on demand. `role` is the only authorization signal exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: UserId,
    /// Canonical role; the two wire spellings are reconciled before this
    /// value exists.
    pub role: Role,
    pub name: String,
    pub email: String,
}
