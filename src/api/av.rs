use std::sync::Arc;

use log::debug;
use reqwest::Url;
use serde_json::Value;

use super::{
    av_dto::{AvBarDto, AvCompanyOverviewDto, AvGlobalQuoteDto, AvSymbolSearchDto},
    error::ApiError,
    gate::RateGate,
    params::{ApiFunction, Interval, OutputSize},
    transport::{ReqwestTransport, Transport},
    utils::{
        check_rate_limit, deserialize_section, most_recent, parse_date, parse_timestamp,
        redact_api_key,
    },
};
use crate::{
    config::Config,
    models::{
        CompanyOverview, DailyBar, DailySeries, IntradayBar, IntradaySeries, Quote, SearchMatch,
        bar::{DAILY_SERIES_LEN, INTRADAY_SERIES_LEN},
    },
};

pub const BASE_URL: &str = "https://www.alphavantage.co/query";

const GLOBAL_QUOTE_KEY: &str = "Global Quote";
const PRICE_KEY: &str = "05. price";
const DAILY_SERIES_KEY: &str = "Time Series (Daily)";
const INTRADAY_SERIES_MARKER: &str = "Time Series";
const OVERVIEW_NAME_KEY: &str = "Name";
const BEST_MATCHES_KEY: &str = "bestMatches";
const MAX_SEARCH_MATCHES: usize = 5;

/// Single point of egress to Alpha Vantage. Every call passes through the
/// client's [`RateGate`]; clients built with the same gate share its spacing.
pub struct AlphaVantageClient<T: Transport = ReqwestTransport> {
    transport: T,
    gate: Arc<RateGate>,
    api_key: String,
    base_url: String,
}

impl AlphaVantageClient<ReqwestTransport> {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_transport(
            ReqwestTransport::new(),
            Arc::new(RateGate::default()),
            api_key,
        )
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_transport(
            ReqwestTransport::new(),
            Arc::new(RateGate::new(*config.min_interval())),
            config.api_key().clone(),
        )
        .with_base_url(config.base_url().clone())
    }
}

impl<T: Transport> AlphaVantageClient<T> {
    pub fn with_transport(transport: T, gate: Arc<RateGate>, api_key: impl Into<String>) -> Self {
        Self {
            transport,
            gate,
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn gate(&self) -> &Arc<RateGate> {
        &self.gate
    }

    pub fn build_url(&self, function: ApiFunction, params: &[(&str, &str)]) -> Result<Url, ApiError> {
        let function = function.to_string();
        let mut all_params: Vec<(&str, &str)> = Vec::with_capacity(params.len() + 2);
        all_params.push(("function", function.as_str()));
        all_params.extend_from_slice(params);
        all_params.push(("apikey", self.api_key.as_str()));

        Url::parse_with_params(&self.base_url, &all_params)
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))
    }

    /// Waits for the gate, then performs the request. The body comes back
    /// uninterpreted and transport failures are returned as they are.
    pub async fn throttled_fetch(&self, url: Url) -> Result<Value, ApiError> {
        self.gate.admit().await;

        debug!("Alpha Vantage request: {}", redact_api_key(&url));

        self.transport.get_json(&url).await
    }

    pub async fn fetch_quote(&self, symbol: &str) -> Result<Quote, ApiError> {
        let url = self.build_url(ApiFunction::GlobalQuote, &[("symbol", symbol)])?;
        let body = self.throttled_fetch(url).await?;
        parse_quote(symbol, &body)
    }

    pub async fn fetch_daily_series(
        &self,
        symbol: &str,
        size: OutputSize,
    ) -> Result<DailySeries, ApiError> {
        let size = size.to_string();
        let url = self.build_url(
            ApiFunction::TimeSeriesDaily,
            &[("symbol", symbol), ("outputsize", size.as_str())],
        )?;
        let body = self.throttled_fetch(url).await?;
        parse_daily_series(symbol, &body)
    }

    pub async fn fetch_company_overview(&self, symbol: &str) -> Result<CompanyOverview, ApiError> {
        let url = self.build_url(ApiFunction::Overview, &[("symbol", symbol)])?;
        let body = self.throttled_fetch(url).await?;
        parse_company_overview(symbol, &body)
    }

    pub async fn search_symbols(&self, keywords: &str) -> Result<Vec<SearchMatch>, ApiError> {
        let url = self.build_url(ApiFunction::SymbolSearch, &[("keywords", keywords)])?;
        let body = self.throttled_fetch(url).await?;
        parse_search_matches(&body)
    }

    pub async fn fetch_intraday(
        &self,
        symbol: &str,
        interval: Interval,
    ) -> Result<IntradaySeries, ApiError> {
        let interval = interval.to_string();
        let url = self.build_url(
            ApiFunction::TimeSeriesIntraday,
            &[("symbol", symbol), ("interval", interval.as_str())],
        )?;
        let body = self.throttled_fetch(url).await?;
        parse_intraday_series(symbol, &body)
    }

}

fn non_empty_str<'a>(value: Option<&'a Value>) -> Option<&'a str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

pub fn parse_quote(symbol: &str, body: &Value) -> Result<Quote, ApiError> {
    check_rate_limit(body)?;

    let global_quote = body
        .get(GLOBAL_QUOTE_KEY)
        .filter(|quote| non_empty_str(quote.get(PRICE_KEY)).is_some())
        .ok_or_else(|| ApiError::NotFound(symbol.to_string()))?;

    deserialize_section::<AvGlobalQuoteDto>(GLOBAL_QUOTE_KEY, global_quote)?.to_quote()
}

pub fn parse_daily_series(symbol: &str, body: &Value) -> Result<DailySeries, ApiError> {
    check_rate_limit(body)?;

    let series = body
        .get(DAILY_SERIES_KEY)
        .and_then(Value::as_object)
        .ok_or_else(|| ApiError::NotFound(symbol.to_string()))?;

    let dated = series
        .iter()
        .map(|(date, bar)| -> Result<_, ApiError> {
            Ok((parse_date(DAILY_SERIES_KEY, date)?, bar))
        })
        .collect::<Result<Vec<_>, ApiError>>()?;

    most_recent(dated, DAILY_SERIES_LEN)
        .into_iter()
        .map(|(date, bar)| -> Result<DailyBar, ApiError> {
            deserialize_section::<AvBarDto>(DAILY_SERIES_KEY, bar)?.to_daily_bar(date)
        })
        .collect()
}

/// The series key embeds the interval (`Time Series (60min)`), so it is found
/// by substring rather than by name.
pub fn parse_intraday_series(symbol: &str, body: &Value) -> Result<IntradaySeries, ApiError> {
    check_rate_limit(body)?;

    let (series_key, series) = body
        .as_object()
        .and_then(|fields| {
            fields
                .iter()
                .find(|(key, _)| key.contains(INTRADAY_SERIES_MARKER))
        })
        .and_then(|(key, value)| value.as_object().map(|series| (key.as_str(), series)))
        .ok_or_else(|| ApiError::NotFound(symbol.to_string()))?;

    let stamped = series
        .iter()
        .map(|(timestamp, bar)| -> Result<_, ApiError> {
            Ok((parse_timestamp(series_key, timestamp)?, bar))
        })
        .collect::<Result<Vec<_>, ApiError>>()?;

    most_recent(stamped, INTRADAY_SERIES_LEN)
        .into_iter()
        .map(|(timestamp, bar)| -> Result<IntradayBar, ApiError> {
            deserialize_section::<AvBarDto>(series_key, bar)?.to_intraday_bar(timestamp)
        })
        .collect()
}

pub fn parse_company_overview(symbol: &str, body: &Value) -> Result<CompanyOverview, ApiError> {
    check_rate_limit(body)?;

    if non_empty_str(body.get(OVERVIEW_NAME_KEY)).is_none() {
        return Err(ApiError::NotFound(symbol.to_string()));
    }

    let overview = deserialize_section::<AvCompanyOverviewDto>("OVERVIEW", body)?;
    Ok(overview.to_company_overview(symbol))
}

/// A response without `bestMatches`, or with it set to null, means nothing
/// matched and yields an empty list.
pub fn parse_search_matches(body: &Value) -> Result<Vec<SearchMatch>, ApiError> {
    check_rate_limit(body)?;

    let Some(best_matches) = body.get(BEST_MATCHES_KEY).filter(|v| !v.is_null()) else {
        return Ok(Vec::new());
    };

    let entries = best_matches.as_array().ok_or_else(|| {
        ApiError::invalid_field(BEST_MATCHES_KEY, best_matches.to_string())
    })?;

    entries
        .iter()
        .take(MAX_SEARCH_MATCHES)
        .map(|entry| -> Result<SearchMatch, ApiError> {
            deserialize_section::<AvSymbolSearchDto>(BEST_MATCHES_KEY, entry)?.to_search_match()
        })
        .collect()
}
