//! TypeScript module output.
//!
//! The module exports the prompt map and a `getStylePromptText` accessor
//! that returns `""` for unknown names. Keys keep catalog order and every
//! string is emitted as a JSON string literal, which is also a valid
//! TypeScript string literal.

use crate::catalog::PromptCatalog;

pub struct TypeScriptFormatter {
    regenerate_command: String,
}

impl TypeScriptFormatter {
    pub fn new(regenerate_command: impl Into<String>) -> Self {
        Self {
            regenerate_command: regenerate_command.into(),
        }
    }

    /// Render the catalog as a TypeScript module.
    pub fn format(&self, catalog: &PromptCatalog) -> String {
        let mut ts = String::with_capacity(catalog.iter().map(|d| d.text.len() + 64).sum::<usize>() + 512);
        ts.push_str("// AUTO-GENERATED FILE. DO NOT EDIT.\n");
        ts.push_str("// Style prompts extracted from each theme's page source.\n");
        ts.push_str(&format!("// Regenerate with: {}\n\n", single_line(&self.regenerate_command)));

        ts.push_str("export const STYLE_PROMPTS: Record<string, string> = {\n");
        for document in catalog.iter() {
            ts.push_str(&format!(
                "  {}: {},\n",
                string_literal(&document.theme),
                string_literal(&document.text)
            ));
        }
        ts.push_str("};\n\n");

        ts.push_str("export function getStylePromptText(themeName: string): string {\n");
        ts.push_str("  return Object.prototype.hasOwnProperty.call(STYLE_PROMPTS, themeName)\n");
        ts.push_str("    ? STYLE_PROMPTS[themeName]\n");
        ts.push_str("    : \"\";\n");
        ts.push_str("}\n");
        ts
    }
}

fn string_literal(value: &str) -> String {
    serde_json::Value::String(value.to_owned()).to_string()
}

/// Keep header comments on one line.
fn single_line(value: &str) -> String {
    value.replace(['\n', '\r'], " ")
}
