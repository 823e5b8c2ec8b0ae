//! Theme discovery: which folders are themes, and what each one says about itself.

pub mod description;
pub mod types;
pub mod walker;

pub use description::extract_description;
pub use types::ThemeSource;
pub use walker::discover_themes;
