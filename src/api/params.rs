use clap::ValueEnum;
use strum_macros::{Display, EnumIter, EnumString};

/// Value of the `function` query parameter.
#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, PartialEq)]
pub enum ApiFunction {
    #[strum(serialize = "GLOBAL_QUOTE")]
    GlobalQuote,
    #[strum(serialize = "TIME_SERIES_DAILY")]
    TimeSeriesDaily,
    #[strum(serialize = "OVERVIEW")]
    Overview,
    #[strum(serialize = "SYMBOL_SEARCH")]
    SymbolSearch,
    #[strum(serialize = "TIME_SERIES_INTRADAY")]
    TimeSeriesIntraday,
}

/// `compact` returns the latest 100 days, `full` the whole history. Either way
/// the client keeps only the most recent 30.
#[derive(Clone, Copy, Debug, Default, Display, EnumString, Eq, PartialEq)]
pub enum OutputSize {
    #[default]
    #[strum(serialize = "compact")]
    Compact,
    #[strum(serialize = "full")]
    Full,
}

#[derive(Clone, Copy, Debug, Default, Display, EnumIter, EnumString, Eq, PartialEq, ValueEnum)]
pub enum Interval {
    #[strum(serialize = "1min")]
    #[value(name = "1min")]
    OneMinute,
    #[strum(serialize = "5min")]
    #[value(name = "5min")]
    FiveMinutes,
    #[strum(serialize = "15min")]
    #[value(name = "15min")]
    FifteenMinutes,
    #[strum(serialize = "30min")]
    #[value(name = "30min")]
    ThirtyMinutes,
    #[default]
    #[strum(serialize = "60min")]
    #[value(name = "60min")]
    SixtyMinutes,
}
