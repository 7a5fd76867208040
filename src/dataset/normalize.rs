//! String-to-number cleanup for value cells.

/// Parses a cell that may be currency-formatted.
///
/// Trims the text, strips one leading `$` and all thousands-separator
/// commas, then parses as `f64`. Returns `None` when nothing parseable
/// remains.
///
/// # Examples
///
/// ```
/// use lineup_select::dataset::parse_numeric;
///
/// assert_eq!(parse_numeric("$1,234.56"), Some(1234.56));
/// assert_eq!(parse_numeric("  42 "), Some(42.0));
/// assert_eq!(parse_numeric("n/a"), None);
/// ```
pub fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let stripped = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let cleaned: String = stripped.chars().filter(|&c| c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_number() {
        assert_eq!(parse_numeric("12.5"), Some(12.5));
        assert_eq!(parse_numeric("7"), Some(7.0));
    }

    #[test]
    fn test_currency() {
        assert_eq!(parse_numeric("$455,690"), Some(455690.0));
        assert_eq!(parse_numeric("$1,234.56"), Some(1234.56));
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(parse_numeric("  3.25  "), Some(3.25));
    }

    #[test]
    fn test_negative() {
        assert_eq!(parse_numeric("-4.5"), Some(-4.5));
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("   "), None);
        assert_eq!(parse_numeric("abc"), None);
        assert_eq!(parse_numeric("$"), None);
        assert_eq!(parse_numeric("12.3.4"), None);
    }
}
