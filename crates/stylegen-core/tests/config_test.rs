//! Tests for the stylegen configuration system.

use stylegen_core::config::stylegen_config::CONFIG_FILE_NAME;
use stylegen_core::config::{PromptDefaults, StylegenConfig};
use stylegen_core::errors::ConfigError;

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempdir();
    let config = StylegenConfig::load(dir.path()).unwrap();

    assert_eq!(config.discovery.effective_themes_dir(), "src/app/themes");
    assert_eq!(config.discovery.effective_page_file(), "page.tsx");
    assert_eq!(config.output.effective_path(), "src/lib/generated/style-prompts.ts");
    assert_eq!(config.defaults, PromptDefaults::default());
    assert_eq!(config.defaults.background, "#0a0a0a");
}

#[test]
fn test_project_file_overrides_defaults() {
    let dir = tempdir();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        r##"
[discovery]
themes_dir = "themes"
page_file = "index.tsx"

[output]
path = "out/prompts.ts"

[defaults]
background = "#ffffff"
"##,
    )
    .unwrap();

    let config = StylegenConfig::load(dir.path()).unwrap();
    assert_eq!(config.themes_dir(dir.path()), dir.path().join("themes"));
    assert_eq!(config.discovery.effective_page_file(), "index.tsx");
    assert_eq!(config.output_path(dir.path()), dir.path().join("out/prompts.ts"));
    assert_eq!(config.defaults.background, "#ffffff");
    // Untouched defaults survive a partial table.
    assert_eq!(config.defaults.label_style, "uppercase with wide letter-spacing");
    // Untouched sections keep their compiled fallbacks.
    assert_eq!(
        config.output.effective_regenerate_command(),
        "cargo run -p stylegen --bin generate-style-prompts"
    );
}

#[test]
fn test_invalid_toml_is_a_parse_error() {
    let dir = tempdir();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[discovery\nthemes_dir = 1").unwrap();

    let err = StylegenConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }), "got {err:?}");
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = StylegenConfig::from_toml(
        r#"
[discovery]
themes_dir = "themes"
future_option = true

[telemetry]
enabled = false
"#,
    )
    .unwrap();
    assert_eq!(config.discovery.effective_themes_dir(), "themes");
}

#[test]
fn test_page_file_must_be_a_plain_name() {
    let err = StylegenConfig::from_toml(
        r#"
[discovery]
page_file = "nested/page.tsx"
"#,
    )
    .unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "discovery.page_file"),
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[test]
fn test_empty_output_path_rejected() {
    let err = StylegenConfig::from_toml(
        r#"
[output]
path = "  "
"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "output.path"));
}
