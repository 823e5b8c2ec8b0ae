//! Style prompt synthesis.

pub mod builder;
pub mod mood;

pub use builder::synthesize;

/// The finished style prompt for one theme. Never mutated after synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    pub theme: String,
    pub text: String,
}

impl GeneratedDocument {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}
