//! # stylegen-analysis
//!
//! Discovery and extraction for the style-prompt generator.
//! Every extractor is a pure function of a theme's page source: absence of
//! a pattern yields an empty or default fact, never an error.

pub mod discovery;
pub mod extractors;
pub mod font_names;

pub use discovery::{discover_themes, extract_description, ThemeSource};
pub use extractors::ThemeFacts;
