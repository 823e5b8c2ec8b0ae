//! Fact sets produced by the extractors.

use serde::Serialize;

/// Color table entries in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColorFacts {
    entries: Vec<(String, String)>,
}

impl ColorFacts {
    /// Insert a color. A repeated key keeps its original position and takes
    /// the later value, matching object-literal semantics.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries whose value is not an `rgba(...)` value.
    pub fn solid(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(_, v)| !is_transparent(v))
    }

    /// Entries whose value is an `rgba(...)` value.
    pub fn transparent(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(_, v)| is_transparent(v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_transparent(value: &str) -> bool {
    value.starts_with("rgba")
}

/// Distinct `--font-<handle>` tokens in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FontFacts {
    pub handles: Vec<String>,
}

impl FontFacts {
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// Letter-spacing bucket for small uppercase labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LabelTracking {
    Wide,
    Moderate,
}

impl LabelTracking {
    pub fn description(self) -> &'static str {
        match self {
            Self::Wide => "wide tracking (0.25–0.3em)",
            Self::Moderate => "moderate tracking (0.15–0.2em)",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TypographyFacts {
    pub hero_size: Option<String>,
    pub hero_weight: Option<String>,
    pub hero_italic: bool,
    pub hero_letter_spacing: Option<String>,
    pub hero_line_height: Option<String>,
    pub label_transform: Option<String>,
    pub label_tracking: Option<LabelTracking>,
}

/// How the project list is arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectLayout {
    GridCards,
    ListRows,
}

impl ProjectLayout {
    pub fn description(self) -> &'static str {
        match self {
            Self::GridCards => "grid cards",
            Self::ListRows => "list rows",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LayoutFacts {
    pub grain: bool,
    pub grid_background: bool,
    pub svg_decorations: bool,
    pub scroll_reveal: bool,
    pub parallax: bool,
    pub hover_interactions: bool,
    pub grid_columns: Option<u32>,
    /// Max content width in pixels.
    pub max_width: Option<u32>,
    pub nav_style: Option<String>,
    pub project_layout: Option<ProjectLayout>,
}

/// Fired effect labels, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EffectsFacts {
    pub labels: Vec<&'static str>,
}

impl EffectsFacts {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Keyframe {
    pub name: String,
    pub purpose: &'static str,
}

/// `@keyframes` blocks in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeyframeFacts {
    pub keyframes: Vec<Keyframe>,
}

impl KeyframeFacts {
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }
}
