//! Layout feature flags and measurements.

use super::types::{LayoutFacts, ProjectLayout};
use super::{probe, probe_capture};

probe!(RE_GRID_COLUMNS, r"repeat\(\s*(\d+)\s*,|grid-cols-(\d+)\b");
// Only unitless or px widths; `%`, `vw` and `ch` values leave the field unset.
probe!(
    RE_MAX_WIDTH,
    r#"maxWidth\s*:\s*["']?(\d+)(?:px)?(?:["',\s}]|$)|max-w-\[(\d+)px\]"#
);

pub fn analyze_layout(source: &str) -> LayoutFacts {
    let has = |token: &str| source.contains(token);
    let has_nav = has("<nav");

    LayoutFacts {
        grain: has("grain"),
        grid_background: (has("backgroundImage") || has("background-image")) && has("linear-gradient"),
        svg_decorations: has("<svg"),
        scroll_reveal: has("whileInView") || has("useInView") || has("IntersectionObserver"),
        parallax: has("parallax") || (has("useScroll") && has("useTransform")),
        hover_interactions: has("whileHover") || has("onMouseEnter") || has(":hover") || has("hover:"),
        grid_columns: parse_number(probe_capture(&RE_GRID_COLUMNS, source)),
        max_width: parse_number(probe_capture(&RE_MAX_WIDTH, source)),
        // Page-wide co-occurrence: a fixed overlay elsewhere also marks the nav as fixed.
        nav_style: if has_nav && has("fixed") {
            Some("fixed navigation bar".to_string())
        } else if has_nav && has("sticky") {
            Some("sticky navigation bar".to_string())
        } else {
            None
        },
        project_layout: if has("grid") && has("project") {
            Some(ProjectLayout::GridCards)
        } else if has("flex") && has("project") {
            Some(ProjectLayout::ListRows)
        } else {
            None
        },
    }
}

/// Overflowing or otherwise unparseable numbers leave the field unset.
fn parse_number(raw: Option<String>) -> Option<u32> {
    raw.and_then(|s| s.parse().ok())
}
