//! Theme discovery configuration.

use serde::{Deserialize, Serialize};

/// Where theme folders live and which file marks a folder as a theme.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Directory whose immediate subdirectories are candidate themes.
    /// Relative paths resolve against the project root. Default: `src/app/themes`.
    pub themes_dir: Option<String>,
    /// File name a theme folder must contain. Default: `page.tsx`.
    pub page_file: Option<String>,
}

impl DiscoveryConfig {
    pub const DEFAULT_THEMES_DIR: &'static str = "src/app/themes";
    pub const DEFAULT_PAGE_FILE: &'static str = "page.tsx";

    /// Returns the effective themes directory, defaulting to `src/app/themes`.
    pub fn effective_themes_dir(&self) -> &str {
        self.themes_dir.as_deref().unwrap_or(Self::DEFAULT_THEMES_DIR)
    }

    /// Returns the effective page file name, defaulting to `page.tsx`.
    pub fn effective_page_file(&self) -> &str {
        self.page_file.as_deref().unwrap_or(Self::DEFAULT_PAGE_FILE)
    }
}
