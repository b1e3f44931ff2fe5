//! Gross investments by geography.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, info};

use crate::models::config::ReportConfig;
use crate::models::report::{ExtractionResult, GeographyShare};

use super::rules::{
    first_match, round_half_up, FieldExtractor, NumberExtractor, BILLIONS_FALLBACK,
    GROSS_INVESTMENTS_TOTAL, SHARE_AUSTRALIA, SHARE_BRAZIL, SHARE_IBERIA, SHARE_UK, SHARE_US,
};
use super::ReportExtractor;

/// Output labels, in output order.
pub const GEOGRAPHY_LABELS: [&str; 5] = [
    "United Kingdom",
    "United States",
    "Iberia",
    "Brazil",
    "Other EU & Australia",
];

lazy_static! {
    static ref SHARE_PATTERNS: [(&'static str, &'static Regex); 5] = [
        (GEOGRAPHY_LABELS[0], &*SHARE_UK),
        (GEOGRAPHY_LABELS[1], &*SHARE_US),
        (GEOGRAPHY_LABELS[2], &*SHARE_IBERIA),
        (GEOGRAPHY_LABELS[3], &*SHARE_BRAZIL),
        (GEOGRAPHY_LABELS[4], &*SHARE_AUSTRALIA),
    ];
}

const UNDETERMINED_SUMMARY: &str =
    "UK and US combined share could not be fully determined from the text.";

/// Extractor for the "Gross Investments by geography" page.
pub struct GeographyExtractor {
    needle: String,
    title: String,
}

impl GeographyExtractor {
    /// Create an extractor with the default needle and title.
    pub fn new() -> Self {
        Self::from_config(&ReportConfig::geography())
    }

    pub fn from_config(config: &ReportConfig) -> Self {
        Self {
            needle: config.needle.clone(),
            title: config.title.clone(),
        }
    }

    /// Gross investment total, falling back to any "N Bn" figure.
    fn extract_total(&self, text: &str) -> Option<f64> {
        first_match(&[&*GROSS_INVESTMENTS_TOTAL, &*BILLIONS_FALLBACK], text).map(|m| {
            debug!("Total matched '{}'", m.source);
            m.value
        })
    }

    fn extract_shares(&self, text: &str) -> Vec<GeographyShare> {
        SHARE_PATTERNS
            .iter()
            .map(|(label, pattern)| GeographyShare {
                label: (*label).to_string(),
                value_percent: NumberExtractor::new(pattern).extract(text).map(|m| m.value),
            })
            .collect()
    }
}

impl Default for GeographyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Combined UK + US share in percent, absent shares counting as zero.
fn uk_us_share(shares: &[GeographyShare]) -> f64 {
    shares
        .iter()
        .filter(|s| s.label == GEOGRAPHY_LABELS[0] || s.label == GEOGRAPHY_LABELS[1])
        .filter_map(|s| s.value_percent)
        .sum()
}

fn summarize(total: Option<f64>, share: f64) -> String {
    match total {
        Some(total) => {
            let approx = round_half_up(total * share / 100.0);
            format!(
                "Approximately {:.0}% of gross investments (~{} Bn EUR) are allocated to the UK and US combined.",
                share, approx
            )
        }
        None => UNDETERMINED_SUMMARY.to_string(),
    }
}

impl ReportExtractor for GeographyExtractor {
    type Record = GeographyShare;

    fn needle(&self) -> &str {
        &self.needle
    }

    fn extract_from_text(&self, text: &str) -> ExtractionResult<GeographyShare> {
        let total = self.extract_total(text);
        let data = self.extract_shares(text);
        let share = uk_us_share(&data);

        info!(
            "Geography: total={:?}, {} of {} shares found",
            total,
            data.iter().filter(|s| s.value_percent.is_some()).count(),
            data.len()
        );

        ExtractionResult {
            title: self.title.clone(),
            total_investments_eur_bn: total,
            data,
            summary: summarize(total, share),
        }
    }
}
