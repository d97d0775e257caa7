#[cfg(test)]
mod tests {
    use crate::models::symbol::{is_valid_symbol, normalize_symbol};

    #[test]
    fn normalizes_whitespace_and_case() {
        assert_eq!(normalize_symbol("  aapl "), "AAPL");
    }

    #[test]
    fn accepts_short_alphanumeric_tickers() {
        assert!(is_valid_symbol("AAPL"));
        assert!(is_valid_symbol("msft"));
        assert!(is_valid_symbol("A"));
        assert!(is_valid_symbol("BRK1"));
    }

    #[test]
    fn rejects_malformed_tickers() {
        assert!(!is_valid_symbol(""));
        assert!(!is_valid_symbol("GOOGLE"));
        assert!(!is_valid_symbol("BRK.B"));
        assert!(!is_valid_symbol("TSCO.LON"));
    }
}
