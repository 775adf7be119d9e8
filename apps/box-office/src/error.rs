//! Error types for the box-office CLI.

use crate::config::ConfigError;

/// Top-level application errors.
///
/// Pricing failures are deliberately NOT here: an invalid purchase is a
/// normal outcome whose message is the receipt output, not a crash (see
/// main.rs).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    ParseJson {
        path: String,
        source: serde_json::Error,
    },
}
