use std::str::FromStr;

use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Descriptive record for a listed company.
///
/// Market cap and ratios are kept exactly as the provider formats them. They can
/// be empty or hold placeholders such as `"None"` and `"-"`; use [`CompanyOverview::metric`]
/// to read one as a number.
#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct CompanyOverview {
    symbol: String,
    name: String,
    description: String,
    market_cap: String,
    pe_ratio: String,
    eps: String,
    book_value: String,
    dividend_per_share: String,
    payout_ratio: String,
    beta: String,
    industry: String,
    sector: String,
    currency: String,
}

impl CompanyOverview {
    pub fn metric(value: &str) -> Option<Decimal> {
        let trimmed = value.trim();
        match trimmed {
            "" | "None" | "-" | "N/A" => None,
            _ => Decimal::from_str(trimmed)
                .or_else(|_| Decimal::from_scientific(trimmed))
                .ok(),
        }
    }

    pub fn market_cap_value(&self) -> Option<Decimal> {
        Self::metric(&self.market_cap)
    }

    pub fn pe_ratio_value(&self) -> Option<Decimal> {
        Self::metric(&self.pe_ratio)
    }
}
