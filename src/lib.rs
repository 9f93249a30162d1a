pub mod cli;
pub mod core;
pub mod providers;

use crate::cli::RateHistory;
use crate::core::{FetchConfig, Period, UrlSequence};
use crate::providers::PrivatBankProvider;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use tracing::{debug, info};

/// Fetches rates for the `period` days before today.
pub async fn run(period: i64, config: &FetchConfig) -> Result<RateHistory> {
    run_for_date(period, Local::now().date_naive(), config).await
}

/// Same as [`run`] with an explicit reference date.
pub async fn run_for_date(
    period: i64,
    today: NaiveDate,
    config: &FetchConfig,
) -> Result<RateHistory> {
    let period = Period::new(period, config.max_period);
    info!(period = period.days(), %today, "Exchange rate fetch starting...");
    debug!("Using config: {config:#?}");

    let urls = UrlSequence::new(&config.base_url, period, today);
    // One session for the whole run, released when `provider` goes out of scope
    let provider = PrivatBankProvider::new(&config.user_agent)?;
    let history = cli::history::collect(&urls, &provider, &config.currencies).await?;

    info!(
        days = history.len(),
        unavailable = history.unavailable_count(),
        "Exchange rate fetch finished"
    );
    Ok(history)
}
