//! Configuration system for stylegen.
//! TOML-based, 2-layer resolution: project `stylegen.toml` > compiled defaults.

pub mod discovery_config;
pub mod output_config;
pub mod prompt_defaults;
pub mod stylegen_config;

pub use discovery_config::DiscoveryConfig;
pub use output_config::OutputConfig;
pub use prompt_defaults::PromptDefaults;
pub use stylegen_config::StylegenConfig;
