//! Free-text theme description from the page's comment banner.
//!
//! The description is the first sentence of the first comment line that
//! follows a banner divider such as `// ========` or `/* ──────── */`.

use std::sync::LazyLock;

use regex::Regex;

static DIVIDER_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:\{/\*|/\*+|//+|\*+)[ \t]*[=\-─━]{4,}[^\n]*$").ok()
});

/// Description for `theme`, or `"<theme> portfolio theme"` when the page has
/// no banner or the banner is not followed by comment text.
pub fn extract_description(source: &str, theme: &str) -> String {
    banner_sentence(source).unwrap_or_else(|| format!("{theme} portfolio theme"))
}

fn banner_sentence(source: &str) -> Option<String> {
    let divider = DIVIDER_RE.as_ref()?.find(source)?;
    let rest = &source[divider.end()..];
    // Lines of an unclosed block banner are comment text even without a `*`.
    let mut in_block = opens_block(divider.as_str());

    for line in rest.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !in_block && !is_comment_line(trimmed) {
            return None;
        }
        if trimmed.contains("*/") {
            in_block = false;
        }
        let text = strip_comment_markers(trimmed);
        if text.is_empty() || is_divider_text(text) {
            continue;
        }
        let sentence = match text.find('.') {
            Some(idx) => &text[..=idx],
            None => text,
        };
        return Some(sentence.trim().to_string());
    }
    None
}

fn opens_block(divider: &str) -> bool {
    let line = divider.trim_start();
    (line.starts_with("/*") || line.starts_with("{/*")) && !line.contains("*/")
}

fn is_comment_line(line: &str) -> bool {
    line.starts_with("//") || line.starts_with("/*") || line.starts_with('*') || line.starts_with("{/*")
}

fn strip_comment_markers(line: &str) -> &str {
    let mut text = line;
    for prefix in ["{/*", "/*", "//"] {
        if let Some(stripped) = text.strip_prefix(prefix) {
            text = stripped;
            break;
        }
    }
    text = text.trim_start_matches(['/', '*']);
    for suffix in ["*/}", "*/"] {
        if let Some(stripped) = text.trim_end().strip_suffix(suffix) {
            text = stripped;
            break;
        }
    }
    text.trim()
}

fn is_divider_text(text: &str) -> bool {
    text.chars().all(|c| matches!(c, '=' | '-' | '─' | '━' | ' '))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sentence_after_divider() {
        let src = "// ==========================\n\
                   // Neon noir with rain-slick reflections. Built for night owls.\n\
                   // ==========================\n\
                   export default function Page() {}";
        assert_eq!(
            extract_description(src, "noir"),
            "Neon noir with rain-slick reflections."
        );
    }

    #[test]
    fn test_block_comment_banner() {
        let src = "/* ━━━━━━━━━━━━━━━━\n * Quiet editorial serif layout\n */\n";
        assert_eq!(extract_description(src, "paper"), "Quiet editorial serif layout");
    }

    #[test]
    fn test_block_banner_without_leading_stars() {
        let src = "/* ==========\n   Quiet editorial serif layout. More.\n   ========== */\nexport default function Page() {}";
        assert_eq!(extract_description(src, "paper"), "Quiet editorial serif layout.");
    }

    #[test]
    fn test_closed_block_banner_stops_at_code() {
        let src = "/* ==========\n   ========== */\nconst C = {};\n// Not a description.";
        assert_eq!(extract_description(src, "paper"), "paper portfolio theme");
    }

    #[test]
    fn test_fallback_without_banner() {
        assert_eq!(extract_description("const x = 1;", "terminal"), "terminal portfolio theme");
        assert_eq!(extract_description("", "empty"), "empty portfolio theme");
    }

    #[test]
    fn test_code_after_divider_falls_back() {
        let src = "// ======\nconst C = { bg: \"#000\" };\n// Not a description.";
        assert_eq!(extract_description(src, "raw"), "raw portfolio theme");
    }
}
