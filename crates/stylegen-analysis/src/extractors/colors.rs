//! Color table extraction.
//!
//! Finds the first `const C = { ... }` style table (also `COLORS`, `colors`,
//! `palette`, `theme`) and reads every `key: "value"` pair inside it. The
//! body may contain one level of nested braces; anything deeper stops the
//! table from matching at all rather than producing partial pairs.

use super::types::ColorFacts;
use super::probe;

probe!(
    RE_COLOR_TABLE,
    r"const\s+(?:C|COLORS|colors|palette|theme)\s*(?::\s*[\w<>\[\],\s]+)?=\s*\{((?:[^{}]|\{[^{}]*\})*)\}"
);
probe!(
    RE_COLOR_PAIR,
    r#"["']?([A-Za-z_$][\w$]*)["']?\s*:\s*(?:"([^"]*)"|'([^']*)'|`([^`]*)`)"#
);

/// Extract the color table. Values are kept verbatim, without validation.
pub fn extract_colors(source: &str) -> ColorFacts {
    let mut facts = ColorFacts::default();

    let (Some(table_re), Some(pair_re)) = (RE_COLOR_TABLE.as_ref(), RE_COLOR_PAIR.as_ref()) else {
        return facts;
    };
    let Some(body) = table_re.captures(source).and_then(|c| c.get(1)) else {
        return facts;
    };

    for caps in pair_re.captures_iter(body.as_str()) {
        let Some(key) = caps.get(1) else { continue };
        let value = caps.get(2).or_else(|| caps.get(3)).or_else(|| caps.get(4));
        if let Some(value) = value {
            facts.insert(key.as_str(), value.as_str());
        }
    }

    facts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_order_is_preserved() {
        let src = r##"const C = { accent: "#FF3D00", bg: "#0A0A0A", text: "#F2F2F2" };"##;
        let facts = extract_colors(src);
        let keys: Vec<&str> = facts.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["accent", "bg", "text"]);
        assert_eq!(facts.get("bg"), Some("#0A0A0A"));
    }

    #[test]
    fn test_nested_block_and_quote_styles() {
        let src = r##"
            const COLORS: Record<string, string> = {
                bg: '#111',
                "card": "rgba(255,255,255,0.06)",
                glow: { soft: `rgba(0, 255, 200, 0.2)` },
                ink: "not-a-color",
            } as const;
        "##;
        let facts = extract_colors(src);
        assert_eq!(facts.len(), 4);
        assert_eq!(facts.get("ink"), Some("not-a-color"));

        let solid: Vec<&str> = facts.solid().map(|(k, _)| k).collect();
        let transparent: Vec<&str> = facts.transparent().map(|(k, _)| k).collect();
        assert_eq!(solid, vec!["bg", "ink"]);
        assert_eq!(transparent, vec!["card", "soft"]);
    }

    #[test]
    fn test_repeated_key_keeps_first_position() {
        let src = r##"const C = { bg: "#000", fg: "#fff", bg: "#111" }"##;
        let facts = extract_colors(src);
        let entries: Vec<(&str, &str)> = facts.iter().collect();
        assert_eq!(entries, vec![("bg", "#111"), ("fg", "#fff")]);
    }

    #[test]
    fn test_missing_or_too_deep_table_is_empty() {
        assert!(extract_colors("const styles = { bg: \"#000\" }").is_empty());
        let deep = r##"const C = { a: { b: { c: "#000" } } }"##;
        assert!(extract_colors(deep).is_empty());
    }
}
