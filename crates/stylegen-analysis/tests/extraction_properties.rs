//! Property tests: extraction is total and deterministic.

use proptest::prelude::*;
use stylegen_analysis::extractors::keyframes::classify_purpose;
use stylegen_analysis::ThemeFacts;

proptest! {
    #[test]
    fn extraction_never_panics_and_is_deterministic(source in "\\PC{0,400}") {
        let first = ThemeFacts::extract(&source);
        let second = ThemeFacts::extract(&source);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn color_table_preserves_declaration_order(
        keys in proptest::collection::vec("[a-z]{2,8}", 1..8)
    ) {
        let mut unique: Vec<String> = Vec::new();
        for key in keys {
            if !unique.contains(&key) {
                unique.push(key);
            }
        }
        let body: Vec<String> = unique.iter().map(|k| format!("{k}: \"#123456\"")).collect();
        let source = format!("const C = {{ {} }};", body.join(", "));

        let facts = ThemeFacts::extract(&source);
        let extracted: Vec<&str> = facts.colors.iter().map(|(k, _)| k).collect();
        let expected: Vec<&str> = unique.iter().map(String::as_str).collect();
        prop_assert_eq!(extracted, expected);
    }

    #[test]
    fn shimmer_prefix_always_wins(suffix in "[A-Za-z]{0,12}") {
        let name = format!("shimmer{suffix}");
        prop_assert_eq!(classify_purpose(&name), "shimmer/shine effect");
    }
}
