//! The member record - a person holding a prepaid balance.

use serde::{Deserialize, Serialize};

use super::id::{GuardianId, MemberId, StaffId};

/// A member holding a prepaid balance and an identity tag.
///
/// Ownership is exclusive: the service guarantees at most one of
/// `owner_guardian_id` / `owner_staff_id` is set. This layer passes both
/// references through as received and does not enforce the invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Service-assigned ID.
    pub id: MemberId,
    /// Physical tag identifier; `"Pending"` until the service assigns one.
    pub identity_tag: String,
    /// Display name.
    pub name: String,
    /// Prepaid balance in the client's currency.
    pub balance: f64,
    /// Maximum spend per day; 0 means no limit configured.
    pub daily_limit: f64,
    /// Whether the member can currently spend.
    pub active: bool,
    /// Owning guardian, when the member belongs to a family account.
    pub owner_guardian_id: Option<GuardianId>,
    /// Owning staff member, when owned directly by staff.
    pub owner_staff_id: Option<StaffId>,
    /// School the member attends.
    pub school: String,
    /// Course/group within the school.
    pub course: String,
}

/// Sentinel shown while the service has not yet assigned an identity tag.
pub const PENDING_IDENTITY_TAG: &str = "Pending";

impl Member {
    /// Whether the service has assigned a physical identity tag yet.
    #[must_use]
    pub fn has_identity_tag(&self) -> bool {
        self.identity_tag != PENDING_IDENTITY_TAG
    }
}
