//! Theme discovery errors.

use std::path::PathBuf;

use super::error_code::{self, StylegenErrorCode};

/// Errors that can occur while discovering theme folders.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Themes directory not found: {path}")]
    RootNotFound { path: PathBuf },

    #[error("IO error scanning {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Walk error under {path}: {message}")]
    Walk { path: PathBuf, message: String },
}

impl StylegenErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        error_code::SCAN_ERROR
    }
}
