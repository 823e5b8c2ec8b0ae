//! Error handling for stylegen.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod pipeline_error;
pub mod scan_error;
pub mod write_error;

pub use config_error::ConfigError;
pub use error_code::StylegenErrorCode;
pub use pipeline_error::PipelineError;
pub use scan_error::ScanError;
pub use write_error::WriteError;
