//! Tracing setup for the generator binary.

pub mod setup;

pub use setup::{init_tracing, LOG_TARGET};
