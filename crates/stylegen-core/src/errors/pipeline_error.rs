//! Pipeline errors.

use std::path::PathBuf;

use super::error_code::{self, StylegenErrorCode};
use super::{ConfigError, ScanError, WriteError};

/// Errors that abort a generation run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Cannot read theme '{theme}' at {path}: {source}")]
    ThemeRead {
        theme: String,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Write error: {0}")]
    Write(#[from] WriteError),
}

impl StylegenErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Scan(e) => e.error_code(),
            Self::ThemeRead { .. } => error_code::READ_ERROR,
            Self::Write(e) => e.error_code(),
        }
    }
}
