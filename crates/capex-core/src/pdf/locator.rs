//! Locating the page of interest by a search needle.

use std::fmt;
use std::path::Path;

use tracing::{debug, info};

use super::{PageSource, PdfExtractor};
use crate::error::ExtractionError;

/// Text of a single page with every whitespace run collapsed to one space.
///
/// Line breaks in the extracted text split numbers and words that the field
/// patterns expect to be contiguous, so all matching runs on this form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    /// Page number the text came from (1-indexed).
    pub page: u32,
    text: String,
}

impl NormalizedText {
    /// Normalize raw page text.
    pub fn new(page: u32, raw: &str) -> Self {
        Self {
            page,
            text: normalize_whitespace(raw),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Split on any whitespace run and rejoin with single spaces.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Return the normalized text of the first page whose raw text contains
/// `needle` (case-sensitive).
pub fn locate_page<S: PageSource + ?Sized>(
    source: &S,
    needle: &str,
) -> crate::Result<NormalizedText> {
    let pages = source.page_texts()?;
    debug!("Scanning {} pages for '{}'", pages.len(), needle);

    for (idx, text) in pages.iter().enumerate() {
        let Some(text) = text else {
            continue;
        };
        if text.contains(needle) {
            let page = idx as u32 + 1;
            info!("Found '{}' on page {}", needle, page);
            return Ok(NormalizedText::new(page, text));
        }
    }

    Err(ExtractionError::PageNotFound {
        needle: needle.to_string(),
    }
    .into())
}

/// Open the PDF at `path` and locate the page containing `needle`.
///
/// The document is only held for the duration of the call.
pub fn locate(path: impl AsRef<Path>, needle: &str) -> crate::Result<NormalizedText> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    let extractor = PdfExtractor::load(&data)?;
    debug!("Opened {} ({} pages)", path.display(), extractor.page_count());
    locate_page(&extractor, needle)
}
