//! # stylegen
//!
//! Batch driver: discover themes, extract their design facts, synthesize a
//! style prompt per theme, and write the prompt module in one piece.

pub mod pipeline;

pub use pipeline::{run, PipelineReport};
