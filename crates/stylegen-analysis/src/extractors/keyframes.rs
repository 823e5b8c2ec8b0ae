//! `@keyframes` extraction and purpose classification.

use super::probe;
use super::types::{Keyframe, KeyframeFacts};

probe!(
    RE_KEYFRAMES,
    r"@keyframes\s+([\w-]+)\s*\{(?:[^{}]|\{[^{}]*\})*\}"
);

/// Ordered keyword buckets. The first bucket with a keyword contained in the
/// lower-cased keyframe name decides its purpose.
pub const PURPOSE_BUCKETS: &[(&[&str], &str)] = &[
    (&["shimmer", "shine"], "shimmer/shine effect"),
    (&["float", "bob"], "floating/bobbing motion"),
    (&["pulse", "glow"], "pulsing/glowing"),
    (&["rotate", "spin"], "continuous rotation"),
    (&["flow", "wave"], "flowing/wave motion"),
    (&["fade"], "fade in/out"),
    (&["slide", "reveal"], "slide/reveal entrance"),
    (&["blink", "cursor"], "blinking cursor"),
    (&["drip", "drop"], "dripping motion"),
    (&["rise", "fall"], "rising/falling motion"),
    (&["morph", "blob"], "morphing blob shape"),
    (&["marquee", "scroll"], "marquee scrolling"),
];

pub const FALLBACK_PURPOSE: &str = "decorative animation";

pub fn extract_keyframes(source: &str) -> KeyframeFacts {
    let Some(re) = RE_KEYFRAMES.as_ref() else {
        return KeyframeFacts::default();
    };

    let keyframes = re
        .captures_iter(source)
        .filter_map(|caps| caps.get(1))
        .map(|name| Keyframe {
            name: name.as_str().to_string(),
            purpose: classify_purpose(name.as_str()),
        })
        .collect();

    KeyframeFacts { keyframes }
}

pub fn classify_purpose(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    PURPOSE_BUCKETS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map_or(FALLBACK_PURPOSE, |(_, purpose)| *purpose)
}
