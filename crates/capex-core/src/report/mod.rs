//! Investment report field extraction.

mod geography;
mod renewables;
pub mod rules;

pub use geography::{GeographyExtractor, GEOGRAPHY_LABELS};
pub use renewables::{RenewablesExtractor, RENEWABLES_LABELS};

use std::path::Path;

use tracing::debug;

use crate::models::report::ExtractionResult;
use crate::pdf::{locate, locate_page, PageSource};

/// Trait for report page extractors.
///
/// Locating the page is the only step that can fail; every field is
/// extracted best-effort and a pattern miss just leaves its value absent.
pub trait ReportExtractor {
    /// Record type of the `data` list.
    type Record;

    /// Substring identifying the page this extractor reads.
    fn needle(&self) -> &str;

    /// Extract the report fields from whitespace-normalized page text.
    fn extract_from_text(&self, text: &str) -> ExtractionResult<Self::Record>;

    /// Locate the page in `source` and extract it.
    fn extract_from_source<S: PageSource + ?Sized>(
        &self,
        source: &S,
    ) -> crate::Result<ExtractionResult<Self::Record>> {
        let page = locate_page(source, self.needle())?;
        debug!("Page {} text: {}", page.page, page);
        Ok(self.extract_from_text(page.as_str()))
    }

    /// Open the PDF at `path`, locate the page and extract it.
    fn extract_from_path(&self, path: &Path) -> crate::Result<ExtractionResult<Self::Record>> {
        let page = locate(path, self.needle())?;
        debug!("Page {} text: {}", page.page, page);
        Ok(self.extract_from_text(page.as_str()))
    }
}
