//! Typography probes.
//!
//! Each field of [`TypographyFacts`] comes from its own probe, so a page can
//! match any subset. Hero weight, letter-spacing and line-height are looked
//! up in the first `<h1>` opening tag before falling back to the whole page.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{LabelTracking, TypographyFacts};
use super::{probe, probe_capture, probe_matches};

probe!(RE_CLAMP, r"clamp\((?:[^()]|\([^()]*\))*\)");
probe!(RE_HERO_TAG, r"<h1\b[^>]*>");
probe!(RE_FONT_WEIGHT, r#"fontWeight\s*:\s*["']?(\d{3}|bold|black)\b"#);
probe!(RE_LETTER_SPACING, r#"letterSpacing\s*:\s*["']?(-?\d*\.?\d+(?:em|px|rem)?)"#);
probe!(RE_TIGHT_LETTER_SPACING, r#"letterSpacing\s*:\s*["'](-\d*\.?\d+(?:em|px|rem))"#);
probe!(RE_LINE_HEIGHT, r#"lineHeight\s*:\s*["']?(\d*\.?\d+)"#);
probe!(
    RE_ITALIC_HEADING,
    r#"<h[12]\b[^>]*(?:fontStyle\s*:\s*["']italic|className=["'][^"']*\bitalic\b)"#
);
probe!(
    RE_LABEL_TRANSFORM,
    r#"textTransform\s*:\s*["'](uppercase|lowercase|capitalize)["']|className=["'][^"']*\b(uppercase|lowercase|capitalize)\b"#
);
probe!(RE_WIDE_TRACKING, r#"(?:letterSpacing\s*:\s*["']|tracking-\[)0?\.(?:25|30?)em"#);
probe!(RE_MODERATE_TRACKING, r#"(?:letterSpacing\s*:\s*["']|tracking-\[)0?\.(?:15|20?)em"#);

pub fn analyze_typography(source: &str) -> TypographyFacts {
    let hero = RE_HERO_TAG
        .as_ref()
        .and_then(|re| re.find(source))
        .map(|m| m.as_str());
    let in_hero = |probe: &LazyLock<Option<Regex>>| hero.and_then(|tag| probe_capture(probe, tag));

    TypographyFacts {
        hero_size: RE_CLAMP
            .as_ref()
            .and_then(|re| re.find(source))
            .map(|m| m.as_str().to_string()),
        hero_weight: in_hero(&RE_FONT_WEIGHT).or_else(|| probe_capture(&RE_FONT_WEIGHT, source)),
        hero_italic: probe_matches(&RE_ITALIC_HEADING, source)
            || (source.contains("italic") && source.contains("fontStyle")),
        hero_letter_spacing: in_hero(&RE_LETTER_SPACING)
            .or_else(|| probe_capture(&RE_TIGHT_LETTER_SPACING, source)),
        hero_line_height: in_hero(&RE_LINE_HEIGHT).or_else(|| probe_capture(&RE_LINE_HEIGHT, source)),
        label_transform: probe_capture(&RE_LABEL_TRANSFORM, source),
        label_tracking: label_tracking(source),
    }
}

fn label_tracking(source: &str) -> Option<LabelTracking> {
    if probe_matches(&RE_WIDE_TRACKING, source) {
        Some(LabelTracking::Wide)
    } else if probe_matches(&RE_MODERATE_TRACKING, source) {
        Some(LabelTracking::Moderate)
    } else {
        None
    }
}
