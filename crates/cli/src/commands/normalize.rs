//! Normalize captured list responses.
//!
//! Reads a captured API payload (any of the service's envelope shapes),
//! runs it through the translation boundary, and prints the canonical
//! records as JSON. Corrupt elements are dropped with a warning, exactly
//! as the console would treat them.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use clap::ValueEnum;
use rosterpay_core::{Branch, ClientAdmin, Guardian, Member, StaffMember, Transaction};
use rosterpay_wire::{WireEntity, normalize_list};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Entity kinds the command understands, spelled the way operators do.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EntityArg {
    Member,
    Guardian,
    Staff,
    Branch,
    Client,
    Transaction,
}

/// Errors that can occur while normalizing a captured payload.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Input could not be read.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    /// Input was not JSON at all (a malformed *envelope* is tolerated,
    /// but non-JSON input is an operator mistake worth surfacing).
    #[error("input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Run the `normalize` command.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not valid JSON.
pub fn run(entity: EntityArg, pretty: bool, file: Option<&Path>) -> Result<(), NormalizeError> {
    let raw = read_input(file)?;
    let value: Value = serde_json::from_str(&raw)?;

    let rendered = match entity {
        EntityArg::Member => render::<Member>(&value, pretty)?,
        EntityArg::Guardian => render::<Guardian>(&value, pretty)?,
        EntityArg::Staff => render::<StaffMember>(&value, pretty)?,
        EntityArg::Branch => render::<Branch>(&value, pretty)?,
        EntityArg::Client => render::<ClientAdmin>(&value, pretty)?,
        EntityArg::Transaction => render::<Transaction>(&value, pretty)?,
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}

fn render<T: WireEntity + Serialize>(value: &Value, pretty: bool) -> Result<String, NormalizeError> {
    let records: Vec<T> = normalize_list(value);
    tracing::info!(count = records.len(), "normalized records");
    let rendered = if pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };
    Ok(rendered)
}

/// Read the payload from a file, or stdin when no file was given.
pub(crate) fn read_input(file: Option<&Path>) -> io::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
