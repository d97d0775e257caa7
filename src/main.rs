use std::env;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::{error, info};
use serde::Serialize;

use stockwatch_client::{
    api::{AlphaVantageClient, Interval, OutputSize},
    config::{API_KEY_VAR, BASE_URL_VAR, Config, MIN_INTERVAL_VAR},
    models::symbol::{is_valid_symbol, normalize_symbol},
};

/// Watch stocks through the Alpha Vantage API.
#[derive(Debug, Parser)]
#[command(name = "stockwatch", version, about)]
struct Args {
    /// Overrides ALPHA_VANTAGE_API_KEY.
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Overrides ALPHA_VANTAGE_BASE_URL.
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Minimum spacing between API calls in milliseconds. Overrides
    /// STOCKWATCH_MIN_INTERVAL_MS.
    #[arg(long, global = true)]
    min_interval_ms: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Latest quote for one or more symbols.
    Quote {
        #[arg(required = true)]
        symbols: Vec<String>,
    },
    /// Last 30 trading days.
    Daily {
        symbol: String,
        /// Request the full history instead of the latest 100 days.
        #[arg(long)]
        full: bool,
    },
    /// Last 24 intraday points.
    Intraday {
        symbol: String,
        #[arg(long, value_enum, default_value_t = Interval::SixtyMinutes)]
        interval: Interval,
    },
    /// Company description and key ratios.
    Overview { symbol: String },
    /// Top 5 symbol matches for the given keywords.
    Search {
        #[arg(required = true)]
        keywords: Vec<String>,
    },
}

fn load_config(args: &Args) -> Result<Config> {
    Config::from_lookup(|key| {
        let flag = match key {
            API_KEY_VAR => args.api_key.clone(),
            BASE_URL_VAR => args.base_url.clone(),
            MIN_INTERVAL_VAR => args.min_interval_ms.map(|millis| millis.to_string()),
            _ => None,
        };
        flag.or_else(|| env::var(key).ok())
    })
}

fn parse_symbol(symbol: &str) -> Result<String> {
    let symbol = normalize_symbol(symbol);
    if !is_valid_symbol(&symbol) {
        bail!("Invalid symbol '{}': expected 1-5 letters or digits", symbol);
    }
    Ok(symbol)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

async fn run(client: &AlphaVantageClient, command: Command) -> Result<()> {
    match command {
        Command::Quote { symbols } => {
            let symbols = symbols
                .iter()
                .map(|symbol| parse_symbol(symbol))
                .collect::<Result<Vec<_>>>()?;

            let mut failures = 0;
            for symbol in &symbols {
                match client.fetch_quote(symbol).await {
                    Ok(quote) => print_json(&quote)?,
                    Err(err) => {
                        error!("Failed to fetch quote for {}: {}", symbol, err);
                        failures += 1;
                    }
                }
            }

            if failures > 0 {
                bail!("{} of {} quotes failed", failures, symbols.len());
            }
        }
        Command::Daily { symbol, full } => {
            let symbol = parse_symbol(&symbol)?;
            let size = if full {
                OutputSize::Full
            } else {
                OutputSize::Compact
            };
            let series = client
                .fetch_daily_series(&symbol, size)
                .await
                .with_context(|| format!("Daily series ({})", symbol))?;
            print_json(&series)?;
        }
        Command::Intraday { symbol, interval } => {
            let symbol = parse_symbol(&symbol)?;
            let series = client
                .fetch_intraday(&symbol, interval)
                .await
                .with_context(|| format!("Intraday series ({})", symbol))?;
            print_json(&series)?;
        }
        Command::Overview { symbol } => {
            let symbol = parse_symbol(&symbol)?;
            let overview = client
                .fetch_company_overview(&symbol)
                .await
                .with_context(|| format!("Company overview ({})", symbol))?;
            print_json(&overview)?;
        }
        Command::Search { keywords } => {
            let keywords = keywords.join(" ");
            let matches = client
                .search_symbols(&keywords)
                .await
                .with_context(|| format!("Symbol search ({})", keywords))?;
            info!("{} matches for '{}'", matches.len(), keywords);
            print_json(&matches)?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let client = AlphaVantageClient::from_config(&config);

    run(&client, args.command).await
}
