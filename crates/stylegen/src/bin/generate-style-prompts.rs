//! Regenerate the style prompt module from the current project tree.
//!
//! Takes no arguments: run it from the project root.

use std::process::ExitCode;

use stylegen_core::config::StylegenConfig;
use stylegen_core::errors::{PipelineError, ScanError, StylegenErrorCode};
use stylegen_core::tracing::{init_tracing, LOG_TARGET};

fn main() -> ExitCode {
    init_tracing();

    match generate() {
        Ok(report) => {
            println!("Generated detailed style prompts for {} themes", report.theme_count);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(target: LOG_TARGET, code = err.error_code(), "{err}");
            eprintln!("{}", err.coded_string());
            ExitCode::FAILURE
        }
    }
}

fn generate() -> Result<stylegen::PipelineReport, PipelineError> {
    let root = std::env::current_dir().map_err(|source| {
        PipelineError::from(ScanError::IoError {
            path: ".".into(),
            source,
        })
    })?;
    let config = StylegenConfig::load(&root)?;
    stylegen::run(&root, &config)
}
