//! Six independent extractors, each a pure function of page source text.

pub mod colors;
pub mod effects;
pub mod fonts;
pub mod keyframes;
pub mod layout;
pub mod types;
pub mod typography;

use std::sync::LazyLock;

use regex::Regex;

pub use types::*;

/// Declare a lazily compiled probe. A pattern that fails to compile yields
/// `None` and the probe simply never matches.
macro_rules! probe {
    ($name:ident, $regex_str:expr) => {
        static $name: std::sync::LazyLock<Option<regex::Regex>> =
            std::sync::LazyLock::new(|| regex::Regex::new($regex_str).ok());
    };
}
pub(crate) use probe;

/// True when the probe compiled and matches anywhere in `text`.
pub(crate) fn probe_matches(probe: &LazyLock<Option<Regex>>, text: &str) -> bool {
    probe.as_ref().is_some_and(|re| re.is_match(text))
}

/// First non-empty capture group of the first match, if any.
pub(crate) fn probe_capture(probe: &LazyLock<Option<Regex>>, text: &str) -> Option<String> {
    let caps = probe.as_ref()?.captures(text)?;
    caps.iter()
        .skip(1)
        .flatten()
        .map(|m| m.as_str().trim())
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// All six fact sets for one theme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeFacts {
    pub colors: ColorFacts,
    pub fonts: FontFacts,
    pub typography: TypographyFacts,
    pub layout: LayoutFacts,
    pub effects: EffectsFacts,
    pub keyframes: KeyframeFacts,
}

impl ThemeFacts {
    /// Run every extractor over `source`.
    pub fn extract(source: &str) -> Self {
        Self {
            colors: colors::extract_colors(source),
            fonts: fonts::extract_fonts(source),
            typography: typography::analyze_typography(source),
            layout: layout::analyze_layout(source),
            effects: effects::classify_effects(source),
            keyframes: keyframes::extract_keyframes(source),
        }
    }
}
