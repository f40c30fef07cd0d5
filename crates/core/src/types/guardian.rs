//! Guardian and staff records.

use serde::{Deserialize, Serialize};

use super::id::{BranchId, GuardianId, StaffId};

/// A guardian managing members through a family relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guardian {
    pub id: GuardianId,
    pub name: String,
    pub email: String,
    /// Branch the guardian is registered with, if any.
    pub branch_id: Option<BranchId>,
}

/// A staff member who owns members directly rather than through a family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: StaffId,
    pub name: String,
    pub email: String,
    pub branch_id: Option<BranchId>,
}
