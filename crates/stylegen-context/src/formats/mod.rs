//! Artifact formats and the artifact writer.

pub mod typescript;

use std::path::Path;

use stylegen_core::errors::WriteError;

pub use typescript::TypeScriptFormatter;

/// Write `contents` to `path`, creating missing parent directories.
pub fn write_artifact(path: &Path, contents: &str) -> Result<(), WriteError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, contents).map_err(|source| WriteError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "artifact written");
    Ok(())
}
