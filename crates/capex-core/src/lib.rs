//! Core library for capital-plan report scraping.
//!
//! This crate provides:
//! - PDF page text extraction and needle-based page location
//! - Regex field extraction for the geography and renewables investment pages
//! - Report result models and configuration

pub mod error;
pub mod models;
pub mod pdf;
pub mod report;

pub use error::{CapexError, Result};
pub use models::config::{CapexConfig, HandlerConfig, ReportConfig};
pub use models::report::{ExtractionResult, GeographyShare, SegmentValue};
pub use pdf::{locate, locate_page, NormalizedText, PageSource, PdfExtractor};
pub use report::{GeographyExtractor, RenewablesExtractor, ReportExtractor};
