//! Font reference collection: `var(--font-<handle>)`.
//!
//! Handles are collected verbatim. Resolving them to display names happens
//! at synthesis time through [`crate::font_names`].

use rustc_hash::FxHashSet;

use super::probe;
use super::types::FontFacts;

probe!(RE_FONT_VAR, r"var\(\s*--font-([\w-]+)\s*\)");

pub fn extract_fonts(source: &str) -> FontFacts {
    let Some(re) = RE_FONT_VAR.as_ref() else {
        return FontFacts::default();
    };

    let mut seen = FxHashSet::default();
    let handles = re
        .captures_iter(source)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|handle| seen.insert(*handle))
        .map(str::to_string)
        .collect();

    FontFacts { handles }
}
