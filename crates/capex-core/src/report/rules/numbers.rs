//! Numeric normalization for report values.

/// Parse a report number, accepting either `.` or `,` as the decimal
/// separator ("8,5" and "8.5" both give 8.5).
pub fn parse_decimal(s: &str) -> Option<f64> {
    let cleaned: String = s
        .trim()
        .trim_start_matches('~')
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    cleaned.replace(',', ".").parse::<f64>().ok()
}

/// Round to the nearest integer, halves away from zero (14.5 gives 15).
pub fn round_half_up(value: f64) -> i64 {
    value.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("58"), Some(58.0));
        assert_eq!(parse_decimal("8.5"), Some(8.5));
        assert_eq!(parse_decimal("8,5"), Some(8.5));
        assert_eq!(parse_decimal("~ 21"), Some(21.0));
        assert_eq!(parse_decimal("Bn"), None);
        assert_eq!(parse_decimal(""), None);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(14.5), 15);
        assert_eq!(round_half_up(14.49), 14);
        assert_eq!(round_half_up(0.0), 0);
        assert_eq!(round_half_up(2.5), 3);
    }
}
