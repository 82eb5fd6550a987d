//! pn-cli: command-line front end for importing and screening pipe networks.

pub mod commands;
pub mod config;
pub mod error;

pub use config::{ScreeningConfig, load_config};
pub use error::{CliError, CliResult};
