//! Normalize an authenticated-user record.
//!
//! Shows exactly what the route guard would see for a captured login
//! response - useful when a deployment still emits the legacy `rol` /
//! `nombre` spellings and a login "mysteriously" lands on the wrong
//! screen.

use std::io::{self, Write};
use std::path::Path;

use rosterpay_wire::normalize_session;
use serde_json::Value;
use thiserror::Error;

use super::normalize::read_input;

/// Errors that can occur while normalizing a session record.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Input could not be read.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    /// Input was not valid JSON.
    #[error("input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The record carries no role this console recognizes.
    #[error("record has no canonical role; the route guard would reject this session")]
    NoCanonicalRole,
}

/// Run the `session` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read, is not valid JSON, or
/// does not normalize to a session with a canonical role.
pub fn run(pretty: bool, file: Option<&Path>) -> Result<(), SessionError> {
    let raw = read_input(file)?;
    let value: Value = serde_json::from_str(&raw)?;

    let user = normalize_session(&value).ok_or(SessionError::NoCanonicalRole)?;
    tracing::info!(role = %user.role, "session normalized");

    let rendered = if pretty {
        serde_json::to_string_pretty(&user)?
    } else {
        serde_json::to_string(&user)?
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}
