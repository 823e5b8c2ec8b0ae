//! Discovery → extraction → synthesis → artifact, for every theme.
//!
//! Themes are processed one at a time in discovery order. Any unreadable
//! page aborts the run before the artifact is touched, so a failed run
//! never leaves a partially regenerated module behind.

use std::path::{Path, PathBuf};

use stylegen_analysis::{discover_themes, extract_description, ThemeFacts};
use stylegen_context::formats::{write_artifact, TypeScriptFormatter};
use stylegen_context::{synthesize, PromptCatalog};
use stylegen_core::config::StylegenConfig;
use stylegen_core::errors::PipelineError;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub theme_count: usize,
    pub output_path: PathBuf,
}

/// Generate the catalog for the project rooted at `root` without writing it.
pub fn build_catalog(root: &Path, config: &StylegenConfig) -> Result<PromptCatalog, PipelineError> {
    let themes_dir = config.themes_dir(root);
    let themes = discover_themes(&themes_dir, config.discovery.effective_page_file())?;
    if themes.is_empty() {
        tracing::warn!(dir = %themes_dir.display(), "no themes found; artifact will be empty");
    }

    let mut catalog = PromptCatalog::new();
    for theme in &themes {
        let source = std::fs::read_to_string(&theme.page_path).map_err(|source| {
            PipelineError::ThemeRead {
                theme: theme.name.clone(),
                path: theme.page_path.clone(),
                source,
            }
        })?;

        let description = extract_description(&source, &theme.name);
        let facts = ThemeFacts::extract(&source);
        tracing::debug!(
            theme = %theme.name,
            colors = facts.colors.len(),
            fonts = facts.fonts.handles.len(),
            effects = facts.effects.labels.len(),
            keyframes = facts.keyframes.keyframes.len(),
            "extracted theme facts"
        );

        catalog.insert(synthesize(&theme.name, &description, &facts, &config.defaults));
    }

    Ok(catalog)
}

/// Full rebuild: generate every prompt, then write the artifact once.
pub fn run(root: &Path, config: &StylegenConfig) -> Result<PipelineReport, PipelineError> {
    let catalog = build_catalog(root, config)?;

    let output_path = config.output_path(root);
    let module = TypeScriptFormatter::new(config.output.effective_regenerate_command()).format(&catalog);
    write_artifact(&output_path, &module)?;

    tracing::info!(
        themes = catalog.len(),
        output = %output_path.display(),
        "style prompts written"
    );

    Ok(PipelineReport {
        theme_count: catalog.len(),
        output_path,
    })
}
