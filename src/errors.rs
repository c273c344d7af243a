//! Error types for the Galaxy Book control tool

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for the Galaxy Book control tool
pub type Result<T> = std::result::Result<T, CliError>;

/// Main error type for the Galaxy Book control tool
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Missing {feature} subcommand. Use {choices}.")]
    MissingSubcommand {
        feature: &'static str,
        choices: &'static str,
    },

    #[error("Missing {what} for '{verb} set'")]
    MissingArgument {
        verb: &'static str,
        what: &'static str,
    },

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("Unknown {feature} subcommand '{subcommand}'")]
    UnknownSubcommand {
        feature: &'static str,
        subcommand: String,
    },

    #[error("{0}")]
    InvalidValue(String),

    #[error("Could not open {}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Permission denied. Run with sudo.")]
    PermissionDenied { path: PathBuf },

    #[error("Could not write to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Usage(String),
}
