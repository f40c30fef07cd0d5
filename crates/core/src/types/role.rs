//! Console roles.

use serde::{Deserialize, Serialize};

/// Role of an authenticated console user.
///
/// The role is the sole authorization signal consumed by the route guard;
/// this crate only models the value, it performs no gating itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access across every client and branch.
    SuperAdmin,
    /// Manages the branches of one client.
    ClientAdmin,
    /// Point-of-sale operator for a single branch.
    Branch,
    /// A guardian managing their own members.
    Parent,
    /// Staff member owning members directly (no family relation).
    Staff,
}

impl Role {
    /// The wire spelling of this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::ClientAdmin => "client_admin",
            Self::Branch => "branch",
            Self::Parent => "parent",
            Self::Staff => "staff",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Self::SuperAdmin),
            "client_admin" => Ok(Self::ClientAdmin),
            "branch" => Ok(Self::Branch),
            "parent" => Ok(Self::Parent),
            "staff" => Ok(Self::Staff),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}
