//! Artifact write errors.

use std::path::PathBuf;

use super::error_code::{self, StylegenErrorCode};

/// Errors that can occur while writing the generated artifact.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("Cannot create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot write artifact {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl StylegenErrorCode for WriteError {
    fn error_code(&self) -> &'static str {
        error_code::WRITE_ERROR
    }
}
