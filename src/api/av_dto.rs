use chrono::{NaiveDate, NaiveDateTime};
use derive_getters::Getters;
use derive_new::new;
use serde::Deserialize;

use super::{
    error::ApiError,
    utils::{parse_date, parse_decimal, parse_percent, parse_volume},
};
use crate::models::{CompanyOverview, DailyBar, IntradayBar, Quote, SearchMatch};

#[derive(Debug, Deserialize, Getters, new)]
pub struct AvGlobalQuoteDto {
    #[serde(rename = "01. symbol")]
    symbol: String,
    #[serde(rename = "03. high")]
    high: String,
    #[serde(rename = "04. low")]
    low: String,
    #[serde(rename = "05. price")]
    price: String,
    #[serde(rename = "06. volume")]
    volume: String,
    #[serde(rename = "07. latest trading day")]
    latest_trading_day: String,
    #[serde(rename = "09. change")]
    change: String,
    #[serde(rename = "10. change percent")]
    change_percent: String,
}

impl AvGlobalQuoteDto {
    pub fn to_quote(&self) -> Result<Quote, ApiError> {
        Ok(Quote::new(
            self.symbol.clone(),
            parse_decimal("05. price", &self.price)?,
            parse_decimal("09. change", &self.change)?,
            parse_percent("10. change percent", &self.change_percent)?,
            parse_decimal("03. high", &self.high)?,
            parse_decimal("04. low", &self.low)?,
            parse_volume("06. volume", &self.volume)?,
            parse_date("07. latest trading day", &self.latest_trading_day)?,
        ))
    }
}

/// One entry of a `Time Series (...)` mapping, daily or intraday.
#[derive(Debug, Deserialize, Getters, new)]
pub struct AvBarDto {
    #[serde(rename = "1. open")]
    open: String,
    #[serde(rename = "2. high")]
    high: String,
    #[serde(rename = "3. low")]
    low: String,
    #[serde(rename = "4. close")]
    close: String,
    #[serde(rename = "5. volume")]
    volume: String,
}

impl AvBarDto {
    pub fn to_daily_bar(&self, date: NaiveDate) -> Result<DailyBar, ApiError> {
        Ok(DailyBar::new(
            date,
            parse_decimal("1. open", &self.open)?,
            parse_decimal("2. high", &self.high)?,
            parse_decimal("3. low", &self.low)?,
            parse_decimal("4. close", &self.close)?,
            parse_volume("5. volume", &self.volume)?,
        ))
    }

    pub fn to_intraday_bar(&self, timestamp: NaiveDateTime) -> Result<IntradayBar, ApiError> {
        Ok(IntradayBar::new(
            timestamp,
            parse_decimal("1. open", &self.open)?,
            parse_decimal("2. high", &self.high)?,
            parse_decimal("3. low", &self.low)?,
            parse_decimal("4. close", &self.close)?,
            parse_volume("5. volume", &self.volume)?,
        ))
    }
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct AvSymbolSearchDto {
    #[serde(rename = "1. symbol")]
    symbol: String,
    #[serde(rename = "2. name")]
    name: String,
    #[serde(rename = "3. type")]
    asset_type: String,
    #[serde(rename = "4. region")]
    region: String,
    #[serde(rename = "5. marketOpen")]
    market_open: String,
    #[serde(rename = "6. marketClose")]
    market_close: String,
    #[serde(rename = "7. timezone")]
    timezone: String,
    #[serde(rename = "8. currency")]
    currency: String,
    #[serde(rename = "9. matchScore")]
    match_score: String,
}

impl AvSymbolSearchDto {
    pub fn to_search_match(&self) -> Result<SearchMatch, ApiError> {
        Ok(SearchMatch::new(
            self.symbol.clone(),
            self.name.clone(),
            self.asset_type.clone(),
            self.region.clone(),
            self.market_open.clone(),
            self.market_close.clone(),
            self.timezone.clone(),
            self.currency.clone(),
            parse_decimal("9. matchScore", &self.match_score)?,
        ))
    }
}

/// The subset of `OVERVIEW` fields the client exposes. Everything except `Name`
/// may be absent and defaults to an empty string.
#[derive(Debug, Deserialize, Getters, new)]
pub struct AvCompanyOverviewDto {
    #[serde(rename = "Symbol", default)]
    symbol: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Description", default)]
    description: String,
    #[serde(rename = "MarketCapitalization", default)]
    market_capitalization: String,
    #[serde(rename = "PERatio", default)]
    pe_ratio: String,
    #[serde(rename = "EPS", default)]
    eps: String,
    #[serde(rename = "BookValue", default)]
    book_value: String,
    #[serde(rename = "DividendPerShare", default)]
    dividend_per_share: String,
    #[serde(rename = "PayoutRatio", default)]
    payout_ratio: String,
    #[serde(rename = "Beta", default)]
    beta: String,
    #[serde(rename = "Industry", default)]
    industry: String,
    #[serde(rename = "Sector", default)]
    sector: String,
    #[serde(rename = "Currency", default)]
    currency: String,
}

impl AvCompanyOverviewDto {
    pub fn to_company_overview(&self, requested_symbol: &str) -> CompanyOverview {
        let symbol = if self.symbol.is_empty() {
            requested_symbol.to_string()
        } else {
            self.symbol.clone()
        };

        CompanyOverview::new(
            symbol,
            self.name.clone(),
            self.description.clone(),
            self.market_capitalization.clone(),
            self.pe_ratio.clone(),
            self.eps.clone(),
            self.book_value.clone(),
            self.dividend_per_share.clone(),
            self.payout_ratio.clone(),
            self.beta.clone(),
            self.industry.clone(),
            self.sector.clone(),
            self.currency.clone(),
        )
    }
}
