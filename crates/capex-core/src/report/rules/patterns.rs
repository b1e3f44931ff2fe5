//! Regex patterns for the investment report pages.
//!
//! Every value pattern captures the number in group 1. Matching runs on
//! whitespace-normalized page text.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Geography totals ("Gross investments reach Eur ~58 Bn")
    pub static ref GROSS_INVESTMENTS_TOTAL: Regex = Regex::new(
        r"(?i)Gross investments reach\s+Eur\s*~?(\d+(?:\.\d+)?)\s*Bn"
    ).unwrap();

    pub static ref BILLIONS_FALLBACK: Regex = Regex::new(
        r"(?i)~?\s*(\d+(?:\.\d+)?)\s*(?:Eur|EUR|€)?\s*Bn"
    ).unwrap();

    // Geography shares
    pub static ref SHARE_UK: Regex = Regex::new(
        r"(?i)\bUK\s*~?\s*(\d+(?:\.\d+)?)%"
    ).unwrap();

    pub static ref SHARE_US: Regex = Regex::new(
        r"(?i)\bUS\s*~?\s*(\d+(?:\.\d+)?)%"
    ).unwrap();

    pub static ref SHARE_IBERIA: Regex = Regex::new(
        r"(?i)\bIberia\s*~?\s*(\d+(?:\.\d+)?)%"
    ).unwrap();

    pub static ref SHARE_BRAZIL: Regex = Regex::new(
        r"(?i)\bBrazil\s*~?\s*(\d+(?:\.\d+)?)%"
    ).unwrap();

    // Only the Australia figure is printed for the "Other EU & Australia" bucket
    pub static ref SHARE_AUSTRALIA: Regex = Regex::new(
        r"(?i)\bAustralia\s*~?\s*(\d+(?:\.\d+)?)%"
    ).unwrap();

    // Renewables ("Investing Eur 21 Bn", decimal comma allowed)
    pub static ref INVESTING_TOTAL: Regex = Regex::new(
        r"Investing\s*(?:Eur|EUR|€)\s*~?\s*(\d+(?:[.,]\d+)?)\s*B[nN]"
    ).unwrap();

    pub static ref BILLIONS_VALUE: Regex = Regex::new(
        r"(?i)~?\s*(\d+(?:[.,]\d+)?)\s*(?:Eur|EUR|€)?\s*Bn"
    ).unwrap();
}
