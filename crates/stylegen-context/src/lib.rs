//! # stylegen-context
//!
//! Turns extracted theme facts into style prompts and packages the prompts
//! into the loadable artifact the portfolio app imports.

pub mod catalog;
pub mod formats;
pub mod synthesis;

pub use catalog::PromptCatalog;
pub use synthesis::{synthesize, GeneratedDocument};
