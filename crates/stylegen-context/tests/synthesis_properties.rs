//! Property tests: synthesis is total and the artifact escapes any prompt text.

use proptest::prelude::*;
use stylegen_analysis::ThemeFacts;
use stylegen_context::formats::TypeScriptFormatter;
use stylegen_context::{synthesize, GeneratedDocument, PromptCatalog};
use stylegen_core::config::PromptDefaults;

proptest! {
    #[test]
    fn synthesis_frames_every_prompt(source in "\\PC{0,300}", theme in "[a-z][a-z0-9-]{0,15}") {
        let defaults = PromptDefaults::default();
        let facts = ThemeFacts::extract(&source);
        let first = synthesize(&theme, "d", &facts, &defaults);
        let second = synthesize(&theme, "d", &facts, &defaults);

        let title = format!("# Style Prompt: {}\n", theme);
        prop_assert!(first.text.starts_with(&title));
        prop_assert!(first.text.contains("## Reproduction Instructions\n"));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_entry_stays_on_one_line(
        texts in proptest::collection::vec("[\\PC\n\r\"\\\\`$]{0,60}", 0..6)
    ) {
        let mut catalog = PromptCatalog::new();
        for (i, text) in texts.iter().enumerate() {
            catalog.insert(GeneratedDocument {
                theme: format!("theme-{i}"),
                text: text.clone(),
            });
        }

        let module = TypeScriptFormatter::new("regen").format(&catalog);
        let start = module.find("= {\n").unwrap() + "= {\n".len();
        let end = module.find("\n};\n").unwrap();
        let body = &module[start..end.max(start)];
        let entries = if body.is_empty() { 0 } else { body.lines().count() };
        prop_assert_eq!(entries, catalog.len());

        for (line, text) in body.lines().zip(&texts) {
            let (_, literal) = line.split_once(": ").unwrap();
            let literal = literal.trim_end_matches(',');
            let decoded: String = serde_json::from_str(literal).unwrap();
            prop_assert_eq!(&decoded, text);
        }
    }
}
