//! Error types for the capex-core library.

use thiserror::Error;

/// Main error type for the capex library.
#[derive(Error, Debug)]
pub enum CapexError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Report extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to report field extraction.
///
/// A pattern that does not match is not an error; it only leaves the
/// corresponding value absent.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// No page of the document contains the search needle.
    #[error("could not find '{needle}' in PDF")]
    PageNotFound { needle: String },
}

/// Result type for the capex library.
pub type Result<T> = std::result::Result<T, CapexError>;
