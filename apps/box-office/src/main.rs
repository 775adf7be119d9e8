//! # Box Office CLI
//!
//! Prices a batch of museum ticket purchases and prints the receipt.
//!
//! ## Usage
//! ```bash
//! # Print the receipt for the embedded sample batch
//! cargo run -p box-office
//!
//! # Use your own catalog and purchase files
//! cargo run -p box-office -- --catalog tickets.json --purchases today.json
//! ```
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  catalog JSON ──┐                                                       │
//! │                 ├──► museum_core::build_receipt ──► stdout              │
//! │  purchases JSON─┘                                                       │
//! │                                                                         │
//! │  An invalid purchase prints its validation message instead of a        │
//! │  receipt and exits non-zero. No partial receipt is ever printed.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use serde::de::DeserializeOwned;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use museum_core::{build_receipt, TicketCatalog, TicketRequest};

use crate::config::AppConfig;
use crate::error::AppError;

/// Development catalog: the Dinosaur Museum price table.
const DEV_CATALOG_JSON: &str = include_str!("../data/tickets.json");

/// Sample purchase batch used when no purchases file is given.
const SAMPLE_PURCHASES_JSON: &str = include_str!("../data/purchases.json");

const HELP: &str = "\
Museum POS Box Office

Usage: box-office [OPTIONS]

Options:
  -c, --catalog <PATH>    Ticket catalog JSON (default: built-in Dinosaur Museum table)
  -p, --purchases <PATH>  Purchase batch JSON (default: built-in sample batch)
  -h, --help              Show this help message

Environment:
  BOX_OFFICE_CATALOG      Same as --catalog
  BOX_OFFICE_PURCHASES    Same as --purchases";

fn main() -> ExitCode {
    // Initialize tracing; RUST_LOG overrides the default level.
    // Logs go to stderr so stdout stays a clean receipt.
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<ExitCode, AppError> {
    let config = AppConfig::from_args(args)?;
    if config.show_help {
        println!("{HELP}");
        return Ok(ExitCode::SUCCESS);
    }

    let catalog: TicketCatalog = load_json(config.catalog_path.as_deref(), DEV_CATALOG_JSON)?;
    info!(
        ticket_types = catalog.ticket_types.len(),
        extras = catalog.extras.len(),
        "Catalog loaded"
    );

    let purchases: Vec<TicketRequest> =
        load_json(config.purchases_path.as_deref(), SAMPLE_PURCHASES_JSON)?;
    info!(count = purchases.len(), "Purchases loaded");

    // A pricing failure is the user-visible output for the whole batch.
    match build_receipt(&catalog, &purchases) {
        Ok(receipt) => {
            println!("{receipt}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Loads and parses a JSON value from `path`, or from the embedded
/// fallback when no path was configured.
fn load_json<T: DeserializeOwned>(path: Option<&Path>, fallback: &str) -> Result<T, AppError> {
    let (text, label) = match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| AppError::ReadFile {
                path: path.display().to_string(),
                source,
            })?;
            (text, path.display().to_string())
        }
        None => (fallback.to_string(), "<built-in>".to_string()),
    };

    serde_json::from_str(&text).map_err(|source| AppError::ParseJson {
        path: label,
        source,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
