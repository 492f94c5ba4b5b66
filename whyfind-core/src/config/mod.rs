//! Configuration for the extraction pipeline.

mod defaults;
mod extraction_config;

pub use extraction_config::{ExtractionConfig, WindowMode};
