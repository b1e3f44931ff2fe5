//! Extraction result models.

use serde::{Deserialize, Serialize};

/// Result of extracting one report page.
///
/// Records keep the order the extractor produced them in; they are never
/// sorted by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult<R> {
    /// Human readable title of the extracted chart.
    pub title: String,

    /// Reported total in billions of euros, if it could be found.
    pub total_investments_eur_bn: Option<f64>,

    /// Labeled values.
    pub data: Vec<R>,

    /// One-sentence summary derived from the values.
    pub summary: String,
}

/// Share of gross investments allocated to one geography.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeographyShare {
    pub label: String,

    /// Percentage of the total; `None` when the pattern did not match.
    pub value_percent: Option<f64>,
}

/// Investment in one renewables segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentValue {
    pub label: String,

    /// Amount in billions of euros.
    pub value_eur_bn: f64,
}

/// Uniform view over the record types for tabular output.
pub trait FieldRecord {
    /// Label of the record.
    fn label(&self) -> &str;

    /// Numeric value, if present.
    fn value(&self) -> Option<f64>;
}

impl FieldRecord for GeographyShare {
    fn label(&self) -> &str {
        &self.label
    }

    fn value(&self) -> Option<f64> {
        self.value_percent
    }
}

impl FieldRecord for SegmentValue {
    fn label(&self) -> &str {
        &self.label
    }

    fn value(&self) -> Option<f64> {
        Some(self.value_eur_bn)
    }
}
