//! # Box Office Configuration
//!
//! Configuration is resolved in priority order:
//! 1. Command-line flags (`--catalog`, `--purchases`)
//! 2. Environment variables (`BOX_OFFICE_CATALOG`, `BOX_OFFICE_PURCHASES`)
//! 3. Built-in development data embedded in the binary
//!
//! Configuration is read-only after startup.

use std::env;
use std::path::PathBuf;

/// Resolved application configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Path to the catalog JSON file. `None` means use the embedded
    /// development catalog.
    pub catalog_path: Option<PathBuf>,

    /// Path to the purchases JSON file. `None` means use the embedded
    /// sample batch.
    pub purchases_path: Option<PathBuf>,

    /// Whether `--help` was requested.
    pub show_help: bool,
}

impl AppConfig {
    /// Parses configuration from an argument list (without the program
    /// name) and the process environment.
    pub fn from_args(args: &[String]) -> Result<Self, ConfigError> {
        let mut config = AppConfig {
            catalog_path: env::var("BOX_OFFICE_CATALOG").ok().map(PathBuf::from),
            purchases_path: env::var("BOX_OFFICE_PURCHASES").ok().map(PathBuf::from),
            show_help: false,
        };

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--catalog" | "-c" => {
                    let value = args
                        .get(i + 1)
                        .ok_or_else(|| ConfigError::MissingValue("--catalog".to_string()))?;
                    config.catalog_path = Some(PathBuf::from(value));
                    i += 1;
                }
                "--purchases" | "-p" => {
                    let value = args
                        .get(i + 1)
                        .ok_or_else(|| ConfigError::MissingValue("--purchases".to_string()))?;
                    config.purchases_path = Some(PathBuf::from(value));
                    i += 1;
                }
                "--help" | "-h" => {
                    config.show_help = true;
                }
                other => {
                    return Err(ConfigError::UnknownFlag(other.to_string()));
                }
            }
            i += 1;
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Unknown flag: {0}")]
    UnknownFlag(String),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_defaults_to_embedded_data() {
        let config = AppConfig::from_args(&[]).unwrap();
        // Env vars may be set in the test environment, but flags were not.
        assert!(!config.show_help);
    }

    #[test]
    fn test_parses_paths() {
        let config =
            AppConfig::from_args(&args(&["--catalog", "a.json", "-p", "b.json"])).unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("a.json")));
        assert_eq!(config.purchases_path, Some(PathBuf::from("b.json")));
    }

    #[test]
    fn test_missing_value_is_an_error() {
        let err = AppConfig::from_args(&args(&["--catalog"])).unwrap_err();
        assert_eq!(err.to_string(), "Missing value for --catalog");
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        let err = AppConfig::from_args(&args(&["--frobnicate"])).unwrap_err();
        assert_eq!(err.to_string(), "Unknown flag: --frobnicate");
    }

    #[test]
    fn test_help_flag() {
        assert!(AppConfig::from_args(&args(&["-h"])).unwrap().show_help);
    }
}
