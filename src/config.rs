use std::time::Duration;

use anyhow::{Context, Result};
use derive_getters::Getters;
use derive_new::new;

use crate::api::{av::BASE_URL, gate::DEFAULT_MIN_INTERVAL};

pub const API_KEY_VAR: &str = "ALPHA_VANTAGE_API_KEY";
pub const BASE_URL_VAR: &str = "ALPHA_VANTAGE_BASE_URL";
pub const MIN_INTERVAL_VAR: &str = "STOCKWATCH_MIN_INTERVAL_MS";

#[derive(Clone, Debug, Getters, new)]
pub struct Config {
    api_key: String,
    base_url: String,
    min_interval: Duration,
}

impl Config {
    /// Reads the process environment. Call `dotenv::dotenv()` first to pick up
    /// a `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .with_context(|| format!("Missing {} in environment", API_KEY_VAR))?;

        let base_url = lookup(BASE_URL_VAR).unwrap_or_else(|| BASE_URL.to_string());

        let min_interval = match lookup(MIN_INTERVAL_VAR) {
            Some(millis) => Duration::from_millis(millis.trim().parse::<u64>().with_context(
                || format!("Failed to parse {} '{}'", MIN_INTERVAL_VAR, millis),
            )?),
            None => DEFAULT_MIN_INTERVAL,
        };

        Ok(Self::new(api_key, base_url, min_interval))
    }
}
