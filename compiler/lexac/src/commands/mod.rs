//! Command handlers for the `lexa` CLI.
//!
//! Handlers print their output and exit the process with status 1 on
//! failure. Loading is fallible and testable; only the handlers exit.

mod check;
mod lex;

pub use check::check_config;
pub use lex::lex_file;

use std::io;

use lexa_config::{ConfigErrors, LexerConfig, RawConfig};

/// Why a configuration file could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("cannot read configuration: {0}")]
    Io(#[from] io::Error),
    #[error("malformed configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] ConfigErrors),
}

/// Parse and validate a JSON configuration.
pub fn parse_config(json: &str) -> Result<LexerConfig, ConfigLoadError> {
    let raw: RawConfig = serde_json::from_str(json)?;
    Ok(LexerConfig::from_raw(raw)?)
}

/// Read, parse and validate the configuration file at `path`.
pub fn load_config_file(path: &str) -> Result<LexerConfig, ConfigLoadError> {
    let json = std::fs::read_to_string(path)?;
    parse_config(&json)
}

/// One-line description of a failed read of `path`.
pub(crate) fn read_error_message(path: &str, err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => format!("'{path}' does not exist"),
        io::ErrorKind::PermissionDenied => format!("'{path}' is not readable"),
        io::ErrorKind::InvalidData => format!("'{path}' is not UTF-8 text"),
        _ => format!("'{path}': {err}"),
    }
}

/// Print `msg` as an error and exit with status 1.
pub(crate) fn fail(msg: &str) -> ! {
    eprintln!("error: {msg}");
    std::process::exit(1);
}

/// The configuration at `path`, or exit reporting every problem with it.
pub(crate) fn load_config(path: &str) -> LexerConfig {
    match load_config_file(path) {
        Ok(config) => config,
        Err(ConfigLoadError::Io(err)) => fail(&read_error_message(path, &err)),
        Err(err) => fail(&format!("'{path}': {err}")),
    }
}
