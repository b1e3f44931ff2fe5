//! PDF page text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::{debug, trace};

use super::{PageSource, Result};
use crate::error::PdfError;

/// PDF page extractor backed by lopdf and pdf-extract.
///
/// The document is held in memory for the lifetime of the extractor and
/// released when it is dropped.
pub struct PdfExtractor {
    page_count: u32,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Load a PDF from bytes.
    ///
    /// PDFs encrypted with an empty user password are decrypted up front so
    /// that pdf-extract can read them.
    pub fn load(data: &[u8]) -> Result<Self> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        let raw_data = if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            decrypted_data
        } else {
            data.to_vec()
        };

        let page_count = doc.get_pages().len() as u32;
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        Ok(Self {
            page_count,
            raw_data,
        })
    }
}

impl PageSource for PdfExtractor {
    fn page_count(&self) -> u32 {
        self.page_count
    }

    fn page_texts(&self) -> Result<Vec<Option<String>>> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;

        Ok(pages
            .into_iter()
            .enumerate()
            .map(|(idx, text)| {
                if text.trim().is_empty() {
                    trace!("Page {} has no extractable text", idx + 1);
                    None
                } else {
                    Some(text)
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_rejects_garbage() {
        let result = PdfExtractor::load(b"definitely not a pdf");
        assert!(matches!(result, Err(PdfError::Parse(_))));
    }

    #[test]
    fn test_load_rejects_empty_input() {
        assert!(PdfExtractor::load(&[]).is_err());
    }
}
