//! Validated startup configuration

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::catalog::{Letter, NameCatalog};

/// Errors from turning command line arguments into an [`AppConfig`]
#[derive(Debug)]
pub enum ConfigError {
    /// `--letter` is not a letter, or the catalog has no names for it
    UnknownLetter(char),
    /// `--log-file` could not be opened for appending
    LogFile(io::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownLetter(c) => write!(f, "no names start with '{}'", c),
            ConfigError::LogFile(e) => write!(f, "could not open log file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::UnknownLetter(_) => None,
            ConfigError::LogFile(e) => Some(e),
        }
    }
}

/// Settings the app starts with
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Letter shown first; `None` starts on the first letter of the catalog
    pub start_letter: Option<Letter>,
    /// Where tracing output goes; `None` disables logging
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    /// Check raw arguments against the catalog.
    pub fn new(
        letter: Option<char>,
        log_file: Option<PathBuf>,
        catalog: &NameCatalog,
    ) -> Result<Self, ConfigError> {
        let start_letter = letter.map(|c| resolve_letter(c, catalog)).transpose()?;
        Ok(Self {
            start_letter,
            log_file,
        })
    }
}

fn resolve_letter(c: char, catalog: &NameCatalog) -> Result<Letter, ConfigError> {
    match Letter::new(c) {
        Ok(letter) if catalog.contains(letter) => Ok(letter),
        _ => Err(ConfigError::UnknownLetter(c)),
    }
}
