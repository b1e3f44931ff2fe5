//! Data models for extraction results and configuration.

pub mod config;
pub mod report;

pub use config::CapexConfig;
pub use report::{ExtractionResult, GeographyShare, SegmentValue};
