//! Integration tests for the Rosterpay translation boundary.
//!
//! The fixtures here are captured from the record-keeping service's
//! actual responses (anonymized), one per envelope quirk: bare arrays,
//! named-key wrapping, the generic `data` key, and login bodies in both
//! role spellings. The tests in `tests/` drive the full boundary -
//! envelope resolution, normalization, change-set projection - the way
//! console screens do.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p rosterpay-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod fixtures;
