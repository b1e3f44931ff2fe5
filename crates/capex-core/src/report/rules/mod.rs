//! Rule-based field extractors for investment report pages.

pub mod numbers;
pub mod patterns;

pub use numbers::{parse_decimal, round_half_up};
pub use patterns::*;

use regex::Regex;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A value found in text, with where it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte range of the whole match in the source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }

    /// Whether the two matches share at least one byte of source text.
    pub fn overlaps<U>(&self, other: &ExtractionMatch<U>) -> bool {
        match (self.position, other.position) {
            (Some((a_start, a_end)), Some((b_start, b_end))) => a_start < b_end && b_start < a_end,
            _ => false,
        }
    }
}

/// Extracts the number captured by group 1 of a pattern.
pub struct NumberExtractor<'a> {
    pattern: &'a Regex,
}

impl<'a> NumberExtractor<'a> {
    pub fn new(pattern: &'a Regex) -> Self {
        Self { pattern }
    }
}

impl FieldExtractor for NumberExtractor<'_> {
    type Output = ExtractionMatch<f64>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for caps in self.pattern.captures_iter(text) {
            let (Some(full_match), Some(number)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if let Some(value) = parse_decimal(number.as_str()) {
                results.push(
                    ExtractionMatch::new(value, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }

        results
    }
}

/// Try each pattern in order and return the first match of the first
/// pattern that matches at all.
pub fn first_match(patterns: &[&Regex], text: &str) -> Option<ExtractionMatch<f64>> {
    patterns
        .iter()
        .find_map(|pattern| NumberExtractor::new(pattern).extract(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_all_keeps_document_order() {
        let extractor = NumberExtractor::new(&BILLIONS_VALUE);
        let values: Vec<f64> = extractor
            .extract_all("Offshore Wind 8 Bn Onshore Wind 5,5 Bn Solar PV ~4 Eur Bn")
            .into_iter()
            .map(|m| m.value)
            .collect();
        assert_eq!(values, vec![8.0, 5.5, 4.0]);
    }

    #[test]
    fn test_first_match_prefers_earlier_pattern() {
        let text = "Capex 12 Bn. Gross investments reach Eur ~58 Bn";
        let found = first_match(&[&*GROSS_INVESTMENTS_TOTAL, &*BILLIONS_FALLBACK], text).unwrap();
        assert_eq!(found.value, 58.0);

        let found = first_match(&[&*GROSS_INVESTMENTS_TOTAL, &*BILLIONS_FALLBACK], "Capex 12 Bn").unwrap();
        assert_eq!(found.value, 12.0);

        assert!(first_match(&[&*GROSS_INVESTMENTS_TOTAL], "nothing here").is_none());
    }

    #[test]
    fn test_overlaps() {
        let a = ExtractionMatch::new(1.0, "a").with_position(0, 10);
        let b = ExtractionMatch::new(2.0, "b").with_position(9, 12);
        let c = ExtractionMatch::new(3.0, "c").with_position(10, 12);
        let unpositioned = ExtractionMatch::new(4.0, "d");

        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(!a.overlaps(&unpositioned));
    }
}
