use std::sync::LazyLock;

use regex::Regex;

static SYMBOL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{1,5}$").expect("symbol pattern is valid"));

/// Trims surrounding whitespace and uppercases a user supplied ticker.
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

/// Plain US-style tickers only: 1-5 ASCII letters or digits after normalization.
pub fn is_valid_symbol(symbol: &str) -> bool {
    SYMBOL_PATTERN.is_match(&normalize_symbol(symbol))
}
