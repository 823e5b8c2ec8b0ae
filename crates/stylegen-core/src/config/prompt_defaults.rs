//! Fallback literals rendered when extraction finds nothing.
//!
//! Every "value or default" decision in the synthesizer reads from this
//! table. Individual entries can be overridden from `[defaults]` in
//! `stylegen.toml`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptDefaults {
    pub background: String,
    pub text_color: String,
    pub accent_color: String,
    pub palette: String,
    pub fonts: String,
    pub hero_size: String,
    pub hero_weight: String,
    pub hero_letter_spacing: String,
    pub hero_line_height: String,
    pub label_transform: String,
    pub label_style: String,
    pub max_width: String,
    pub grid: String,
    pub navigation: String,
    pub project_layout: String,
    pub background_pattern: String,
    pub motion: String,
    pub effects: String,
    pub decorative: String,
}

impl Default for PromptDefaults {
    fn default() -> Self {
        Self {
            background: "#0a0a0a".into(),
            text_color: "#f5f5f5".into(),
            accent_color: "#ff4d2e".into(),
            palette: "No explicit color table; derive a restrained palette from the background".into(),
            fonts: "a neutral system sans-serif stack".into(),
            hero_size: "clamp(3rem, 8vw, 7rem)".into(),
            hero_weight: "700".into(),
            hero_letter_spacing: "-0.02em".into(),
            hero_line_height: "1".into(),
            label_transform: "uppercase".into(),
            label_style: "uppercase with wide letter-spacing".into(),
            max_width: "1200px".into(),
            grid: "single-column flow".into(),
            navigation: "minimal text navigation".into(),
            project_layout: "stacked sections".into(),
            background_pattern: "solid color field".into(),
            motion: "static composition with subtle transitions".into(),
            effects: "flat surfaces with minimal ornamentation".into(),
            decorative: "typography-led composition without ornamental graphics".into(),
        }
    }
}
