use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use log::warn;
use reqwest::Url;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;

const NOTE_FIELD: &str = "Note";
const INFORMATION_FIELD: &str = "Information";

/// Wording Alpha Vantage uses in `Information` when a per-minute or daily quota
/// is exhausted. Other `Information` messages (premium endpoints, demo keys) do
/// not clear up on retry.
const RATE_LIMIT_WORDING: [&str; 3] = ["call frequency", "rate limit", "request limit"];

fn marker_text(marker: &Value) -> String {
    marker
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| marker.to_string())
}

/// `Note` always means the request was throttled, whatever else the body
/// contains. `Information` is throttling only when its text says so and is a
/// provider error otherwise.
pub fn check_rate_limit(body: &Value) -> Result<(), ApiError> {
    if let Some(marker) = body.get(NOTE_FIELD) {
        let message = marker_text(marker);
        warn!("Alpha Vantage throttled the request: {}", message);
        return Err(ApiError::RateLimited { message });
    }

    if let Some(marker) = body.get(INFORMATION_FIELD) {
        let message = marker_text(marker);
        let lowered = message.to_lowercase();
        if RATE_LIMIT_WORDING
            .iter()
            .any(|wording| lowered.contains(wording))
        {
            warn!("Alpha Vantage throttled the request: {}", message);
            return Err(ApiError::RateLimited { message });
        }

        warn!("Alpha Vantage info: {}", message);
        return Err(ApiError::Provider { message });
    }

    Ok(())
}

/// Copy of `url` safe for logging, with the `apikey` value replaced. Other
/// parameters are left as they are even if they happen to equal the key.
pub fn redact_api_key(url: &Url) -> Url {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == "apikey" {
                "***".to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted
}

pub fn deserialize_section<T>(section: &str, data: &Value) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    T::deserialize(data).map_err(|source| ApiError::Malformed {
        section: section.to_string(),
        source,
    })
}

/// Keeps the `count` entries with the greatest keys, returned in ascending key
/// order. Duplicate keys collapse to one entry.
pub fn most_recent<K: Ord, V>(mut entries: Vec<(K, V)>, count: usize) -> Vec<(K, V)> {
    entries.sort_by(|a, b| b.0.cmp(&a.0));
    entries.dedup_by(|a, b| a.0 == b.0);
    entries.truncate(count);
    entries.reverse();
    entries
}

pub fn parse_decimal(field: &str, value: &str) -> Result<Decimal, ApiError> {
    Decimal::from_str(value.trim()).map_err(|_| ApiError::invalid_field(field, value))
}

/// Parses `"2.50%"` (or a bare `"2.50"`) into percentage points.
pub fn parse_percent(field: &str, value: &str) -> Result<Decimal, ApiError> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed);
    Decimal::from_str(number.trim()).map_err(|_| ApiError::invalid_field(field, value))
}

pub fn parse_volume(field: &str, value: &str) -> Result<u64, ApiError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ApiError::invalid_field(field, value))
}

pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ApiError::invalid_field(field, value))
}

pub fn parse_timestamp(field: &str, value: &str) -> Result<NaiveDateTime, ApiError> {
    NaiveDateTime::parse_from_str(value.trim(), "%Y-%m-%d %H:%M:%S")
        .map_err(|_| ApiError::invalid_field(field, value))
}
