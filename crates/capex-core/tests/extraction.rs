//! End-to-end extraction over a multi-page document.
//!
//! Uses a `FakeReport` page source so no PDF backend is involved.

use capex_core::error::{CapexError, ExtractionError, PdfError};
use capex_core::pdf::PageSource;
use capex_core::{GeographyExtractor, RenewablesExtractor, ReportExtractor};
use pretty_assertions::assert_eq;

struct FakeReport {
    pages: Vec<Option<String>>,
}

impl FakeReport {
    fn new(pages: &[Option<&str>]) -> Self {
        Self {
            pages: pages.iter().map(|p| p.map(str::to_string)).collect(),
        }
    }
}

impl PageSource for FakeReport {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_texts(&self) -> Result<Vec<Option<String>>, PdfError> {
        Ok(self.pages.clone())
    }
}

fn strategic_plan() -> FakeReport {
    FakeReport::new(&[
        Some("Strategic plan update\n2025-2028"),
        None,
        Some(
            "Gross Investments by geography\n\
             Gross investments reach\nEur ~58 Bn\n\
             UK\n~10%   US ~15%\n\
             Iberia ~30%\nBrazil ~5%\n\
             Other EU &\nAustralia ~8%",
        ),
        Some(
            "Gross Investments in Renewable Power & Customers\n\
             Investing Eur 21\nBn\n\
             Offshore Wind 8 Bn\nOnshore Wind 5 Bn\n\
             Solar PV 4 Bn\nCustomers & Maintenance 3 Bn\nStorage 1 Bn",
        ),
    ])
}

#[test]
fn geography_page_to_json() {
    let result = GeographyExtractor::new()
        .extract_from_source(&strategic_plan())
        .unwrap();

    let expected = r#"{
  "title": "Gross Investments by Geography 2025-28",
  "total_investments_eur_bn": 58.0,
  "data": [
    {
      "label": "United Kingdom",
      "value_percent": 10.0
    },
    {
      "label": "United States",
      "value_percent": 15.0
    },
    {
      "label": "Iberia",
      "value_percent": 30.0
    },
    {
      "label": "Brazil",
      "value_percent": 5.0
    },
    {
      "label": "Other EU & Australia",
      "value_percent": 8.0
    }
  ],
  "summary": "Approximately 25% of gross investments (~15 Bn EUR) are allocated to the UK and US combined."
}"#;
    assert_eq!(serde_json::to_string_pretty(&result).unwrap(), expected);
}

#[test]
fn renewables_page_breakdown() {
    let result = RenewablesExtractor::new()
        .extract_from_source(&strategic_plan())
        .unwrap();

    assert_eq!(result.total_investments_eur_bn, Some(21.0));
    let labels: Vec<&str> = result.data.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Offshore Wind",
            "Onshore Wind",
            "Solar PV",
            "Customers & Maintenance",
            "Storage"
        ]
    );
    assert!(result.summary.ends_with("with Offshore Wind being the largest segment."));
}

#[test]
fn extraction_is_idempotent() {
    let report = strategic_plan();
    let extractor = GeographyExtractor::new();

    let first = serde_json::to_string_pretty(&extractor.extract_from_source(&report).unwrap()).unwrap();
    let second = serde_json::to_string_pretty(&extractor.extract_from_source(&report).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_page_is_not_found() {
    let report = FakeReport::new(&[Some("Nothing to see"), None]);

    let err = RenewablesExtractor::new()
        .extract_from_source(&report)
        .unwrap_err();
    assert!(matches!(
        err,
        CapexError::Extraction(ExtractionError::PageNotFound { .. })
    ));
    assert_eq!(
        err.to_string(),
        "extraction error: could not find 'Renewable Power & Customers' in PDF"
    );
}
