//! Rosterpay Core - Canonical model library.
//!
//! This crate provides the canonical record types shared across all
//! Rosterpay components:
//! - `wire` - Translation boundary between the record-keeping service's
//!   wire formats and the canonical model
//! - `cli` - Operator tools for inspecting captured payloads
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no
//! knowledge of how the upstream service spells its fields. Every screen
//! and tool in the console works against these records and nothing else;
//! the wire crate is the only place that knows the service's vocabulary.
//!
//! All records are immutable value records: a normalization call produces
//! a fresh instance and nothing is mutated in place.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, the role enum, and the canonical records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
