//! Branch and client-admin records.

use serde::{Deserialize, Serialize};

use super::id::{BranchId, ClientAdminId, UserId};

/// A branch - one point of sale operated for a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: BranchId,
    pub name: String,
    pub email: String,
    /// Free-form location label, when the client records one.
    pub location: Option<String>,
    /// Client admin this branch belongs to.
    pub owner_client_admin_id: Option<ClientAdminId>,
}

/// A client administrator - the account a set of branches hangs off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientAdmin {
    pub id: ClientAdminId,
    pub name: String,
    pub email: String,
    /// Super admin that provisioned this client.
    pub owner_super_admin_id: Option<UserId>,
    /// Subscription tier label, when assigned.
    pub tier: Option<String>,
    /// Member cap for the client's plan, when one applies.
    pub max_members: Option<i64>,
}
