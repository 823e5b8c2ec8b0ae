//! # stylegen-core
//!
//! Shared foundation for the style-prompt generator: error enums with
//! stable error codes, TOML configuration (including the fallback-defaults
//! table the synthesizer renders from), and tracing setup.

pub mod config;
pub mod errors;
pub mod tracing;
