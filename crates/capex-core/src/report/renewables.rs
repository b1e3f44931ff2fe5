//! Gross investments in renewable power & customers.

use tracing::{debug, info};

use crate::models::config::ReportConfig;
use crate::models::report::{ExtractionResult, SegmentValue};

use super::rules::{
    ExtractionMatch, FieldExtractor, NumberExtractor, BILLIONS_VALUE, INVESTING_TOTAL,
};
use super::ReportExtractor;

/// Segment labels, zipped positionally against the values on the page.
pub const RENEWABLES_LABELS: [&str; 5] = [
    "Offshore Wind",
    "Onshore Wind",
    "Solar PV",
    "Customers & Maintenance",
    "Storage",
];

const UNDETERMINED_SUMMARY: &str =
    "Largest renewables segment could not be determined from the text.";

/// Extractor for the renewable power & customers investment page.
pub struct RenewablesExtractor {
    needle: String,
    title: String,
}

impl RenewablesExtractor {
    /// Create an extractor with the default needle and title.
    pub fn new() -> Self {
        Self::from_config(&ReportConfig::renewables())
    }

    pub fn from_config(config: &ReportConfig) -> Self {
        Self {
            needle: config.needle.clone(),
            title: config.title.clone(),
        }
    }

    /// Segment values in document order, without the reading that belongs
    /// to the total itself.
    ///
    /// Only values overlapping the total's match are dropped, so a segment
    /// that happens to equal the total is kept.
    fn segment_values(&self, text: &str, total: Option<&ExtractionMatch<f64>>) -> Vec<f64> {
        NumberExtractor::new(&BILLIONS_VALUE)
            .extract_all(text)
            .into_iter()
            .filter(|m| match total {
                Some(total) if total.overlaps(m) => {
                    debug!("Skipping total reading '{}'", m.source.trim());
                    false
                }
                _ => true,
            })
            .map(|m| m.value)
            .collect()
    }
}

impl Default for RenewablesExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// The largest segment; the earliest one wins a tie.
fn largest_segment(data: &[SegmentValue]) -> Option<&SegmentValue> {
    data.iter().fold(None, |best: Option<&SegmentValue>, seg| match best {
        Some(b) if b.value_eur_bn >= seg.value_eur_bn => Some(b),
        _ => Some(seg),
    })
}

fn summarize(total: Option<f64>, data: &[SegmentValue]) -> String {
    match (total, largest_segment(data)) {
        (Some(total), Some(largest)) => format!(
            "Gross investments in Renewable Power & Customers total ~{:.0} Bn EUR, with {} being the largest segment.",
            total, largest.label
        ),
        _ => UNDETERMINED_SUMMARY.to_string(),
    }
}

impl ReportExtractor for RenewablesExtractor {
    type Record = SegmentValue;

    fn needle(&self) -> &str {
        &self.needle
    }

    fn extract_from_text(&self, text: &str) -> ExtractionResult<SegmentValue> {
        let total = NumberExtractor::new(&INVESTING_TOTAL).extract(text);
        let values = self.segment_values(text, total.as_ref());

        if values.len() > RENEWABLES_LABELS.len() {
            debug!(
                "Ignoring {} values beyond the known segments",
                values.len() - RENEWABLES_LABELS.len()
            );
        }

        let data: Vec<SegmentValue> = RENEWABLES_LABELS
            .iter()
            .zip(values)
            .map(|(label, value)| SegmentValue {
                label: (*label).to_string(),
                value_eur_bn: value,
            })
            .collect();

        let total = total.map(|m| m.value);
        info!("Renewables: total={:?}, {} segments found", total, data.len());

        ExtractionResult {
            title: self.title.clone(),
            total_investments_eur_bn: total,
            summary: summarize(total, &data),
            data,
        }
    }
}
