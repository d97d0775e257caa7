use chrono::{NaiveDate, NaiveDateTime};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of most recent trading days kept in a [`DailySeries`].
pub const DAILY_SERIES_LEN: usize = 30;

/// Number of most recent points kept in an [`IntradaySeries`].
pub const INTRADAY_SERIES_LEN: usize = 24;

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct DailyBar {
    date: NaiveDate,
    open: Decimal,
    high: Decimal,
    low: Decimal,
    close: Decimal,
    volume: u64,
}

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct IntradayBar {
    timestamp: NaiveDateTime,
    open: Decimal,
    high: Decimal,
    low: Decimal,
    close: Decimal,
    volume: u64,
}

/// Daily bars in strictly increasing date order.
pub type DailySeries = Vec<DailyBar>;

/// Intraday bars in strictly increasing timestamp order.
pub type IntradaySeries = Vec<IntradayBar>;
