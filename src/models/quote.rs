use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Point-in-time price snapshot for a symbol.
///
/// `day_low <= price <= day_high` usually holds but the provider does not
/// guarantee it.
#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct Quote {
    symbol: String,
    price: Decimal,
    change_amount: Decimal,
    /// Percentage points, e.g. `2.50` for a provider value of `"2.50%"`.
    change_percent: Decimal,
    day_high: Decimal,
    day_low: Decimal,
    volume: u64,
    trading_day: NaiveDate,
}
