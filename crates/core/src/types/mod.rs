//! Core types for Rosterpay.
//!
//! This module provides the canonical record shapes every console screen
//! renders from, plus type-safe wrappers for IDs and roles.

pub mod branch;
pub mod guardian;
pub mod id;
pub mod member;
pub mod role;
pub mod session;
pub mod transaction;

pub use branch::{Branch, ClientAdmin};
pub use guardian::{Guardian, StaffMember};
pub use id::*;
pub use member::{Member, PENDING_IDENTITY_TAG};
pub use role::Role;
pub use session::SessionUser;
pub use transaction::Transaction;
