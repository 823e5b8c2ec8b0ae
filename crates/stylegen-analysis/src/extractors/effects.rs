//! Visual effects classification against a fixed catalog.

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashSet;

use super::types::EffectsFacts;
use super::{probe, probe_matches};

// A plain `filter` property; `backdrop-filter` and `backdropFilter` belong to backdrop blur.
probe!(RE_BLUR_FILTER, r#"(?:^|[^-\w])filter\s*:\s*["'`]?blur\("#);

/// One catalog entry: fires when any trigger appears verbatim in the source,
/// or when its pattern matches.
#[derive(Debug, Clone, Copy)]
pub struct EffectDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub triggers: &'static [&'static str],
    pub pattern: Option<&'static LazyLock<Option<Regex>>>,
}

impl EffectDefinition {
    fn fires(&self, source: &str) -> bool {
        self.triggers.iter().any(|t| source.contains(t))
            || self.pattern.is_some_and(|p| probe_matches(p, source))
    }
}

/// Catalog order is output order.
pub static EFFECT_CATALOG: &[EffectDefinition] = &[
    EffectDefinition {
        id: "backdrop-blur",
        label: "glassmorphism/backdrop blur",
        triggers: &["backdropFilter", "backdrop-filter", "backdrop-blur"],
        pattern: None,
    },
    EffectDefinition {
        id: "gradients",
        label: "gradient backgrounds",
        triggers: &["linear-gradient", "radial-gradient", "conic-gradient"],
        pattern: None,
    },
    EffectDefinition {
        id: "shadows",
        label: "drop shadows",
        triggers: &["boxShadow", "box-shadow", "drop-shadow"],
        pattern: None,
    },
    EffectDefinition {
        id: "text-glow",
        label: "text glow/shadow",
        triggers: &["textShadow", "text-shadow"],
        pattern: None,
    },
    EffectDefinition {
        id: "blend-modes",
        label: "blend mode layering",
        triggers: &["mixBlendMode", "mix-blend-mode", "mix-blend-"],
        pattern: None,
    },
    EffectDefinition {
        id: "blur",
        label: "blur filters",
        triggers: &[],
        pattern: Some(&RE_BLUR_FILTER),
    },
    EffectDefinition {
        id: "clip-path",
        label: "clip-path masking",
        triggers: &["clipPath", "clip-path"],
        pattern: None,
    },
    EffectDefinition {
        id: "grain",
        label: "film grain/noise texture",
        triggers: &["grain", "feTurbulence", "noise"],
        pattern: None,
    },
    EffectDefinition {
        id: "text-stroke",
        label: "outlined text strokes",
        triggers: &["WebkitTextStroke", "-webkit-text-stroke"],
        pattern: None,
    },
    EffectDefinition {
        id: "translucency",
        label: "translucent overlays",
        triggers: &["rgba("],
        pattern: None,
    },
    EffectDefinition {
        id: "hairlines",
        label: "hairline borders",
        triggers: &["1px solid", "border-b ", "border-t "],
        pattern: None,
    },
];

pub fn classify_effects(source: &str) -> EffectsFacts {
    let mut seen = FxHashSet::default();
    let labels = EFFECT_CATALOG
        .iter()
        .filter(|def| def.fires(source))
        .inspect(|def| tracing::trace!(effect = def.id, "effect rule fired"))
        .map(|def| def.label)
        .filter(|label| seen.insert(*label))
        .collect();

    EffectsFacts { labels }
}
