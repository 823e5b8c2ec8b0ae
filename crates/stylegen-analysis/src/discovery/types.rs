//! Discovery types.

use std::path::PathBuf;

/// A theme folder that contains the expected page file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSource {
    /// Theme name, taken from the folder name.
    pub name: String,
    /// Path to the page document inside the folder.
    pub page_path: PathBuf,
}
