//! Rosterpay CLI - payload inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # Normalize a captured list response (any of the service's envelopes)
//! rp-cli normalize --entity member captured/students.json
//!
//! # Pipe a payload through stdin, pretty-printed
//! curl -s "$API/parent/4/students" | rp-cli normalize -e member --pretty
//!
//! # Check what the route guard would see for a login response
//! rp-cli session captured/login.json
//! ```
//!
//! # Commands
//!
//! - `normalize` - Resolve the envelope and print canonical records
//! - `session` - Normalize an authenticated-user record

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

use commands::normalize::EntityArg;

#[derive(Parser)]
#[command(name = "rp-cli")]
#[command(author, version, about = "Rosterpay operator tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a captured API response into canonical records
    Normalize {
        /// Entity kind the payload holds
        #[arg(short, long, value_enum)]
        entity: EntityArg,

        /// Pretty-print the canonical JSON
        #[arg(long)]
        pretty: bool,

        /// Captured payload file (stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Normalize an authenticated-user record
    Session {
        /// Pretty-print the canonical JSON
        #[arg(long)]
        pretty: bool,

        /// Captured payload file (stdin when omitted)
        file: Option<PathBuf>,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Normalize {
            entity,
            pretty,
            file,
        } => commands::normalize::run(entity, pretty, file.as_deref())?,
        Commands::Session { pretty, file } => commands::session::run(pretty, file.as_deref())?,
    }
    Ok(())
}
