//! Error types for the command-line front end.

use std::path::PathBuf;

use pn_import::ImportError;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    #[error("No pipes found in {}", path.display())]
    NoPipes { path: PathBuf },

    #[error("Failed to read config file: {}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid config: {what}")]
    Config { what: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
