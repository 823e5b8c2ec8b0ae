//! Artifact output configuration.

use serde::{Deserialize, Serialize};

/// Where the generated module is written and how it tells readers to rebuild it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Artifact path, relative to the project root.
    /// Default: `src/lib/generated/style-prompts.ts`.
    pub path: Option<String>,
    /// Command named in the artifact's header comment.
    pub regenerate_command: Option<String>,
}

impl OutputConfig {
    pub const DEFAULT_PATH: &'static str = "src/lib/generated/style-prompts.ts";
    pub const DEFAULT_REGENERATE_COMMAND: &'static str =
        "cargo run -p stylegen --bin generate-style-prompts";

    pub fn effective_path(&self) -> &str {
        self.path.as_deref().unwrap_or(Self::DEFAULT_PATH)
    }

    pub fn effective_regenerate_command(&self) -> &str {
        self.regenerate_command
            .as_deref()
            .unwrap_or(Self::DEFAULT_REGENERATE_COMMAND)
    }
}
