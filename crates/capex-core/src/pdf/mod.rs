//! PDF processing module.

mod extractor;
mod locator;

pub use extractor::PdfExtractor;
pub use locator::{locate, locate_page, normalize_whitespace, NormalizedText};

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// A document that can hand out the text of its pages in order.
pub trait PageSource {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Extract the text of every page, in page order.
    ///
    /// A page without extractable text yields `None`.
    fn page_texts(&self) -> Result<Vec<Option<String>>>;
}
