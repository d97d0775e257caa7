use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct SearchMatch {
    symbol: String,
    name: String,
    instrument_type: String,
    region: String,
    market_open: String,
    market_close: String,
    timezone: String,
    currency: String,
    match_score: Decimal,
}
