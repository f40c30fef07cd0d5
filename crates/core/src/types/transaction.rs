//! The transaction record - one charge against a member's balance.

use serde::{Deserialize, Serialize};

use super::id::{MemberId, TransactionId};

/// A single purchase charged against a member's prepaid balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    /// Member whose balance was charged.
    pub member_id: MemberId,
    /// Identity tag presented at the point of sale.
    pub identity_tag_used: String,
    /// Product label as entered at the till.
    pub product: String,
    pub price: f64,
    /// Balance remaining after the charge; absent on older records.
    pub balance_after: Option<f64>,
    /// ISO-like timestamp string; opaque to this layer.
    pub timestamp: String,
}
