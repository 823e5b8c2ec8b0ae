//! StylegenErrorCode trait for coded error output.

/// Every error enum implements this to provide a stable, grep-able code
/// alongside its human-readable message.
pub trait StylegenErrorCode {
    /// Returns the error code string (e.g., "SCAN_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const READ_ERROR: &str = "READ_ERROR";
pub const WRITE_ERROR: &str = "WRITE_ERROR";
