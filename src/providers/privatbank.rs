use crate::core::rates::{DailyRateResponse, FetchFailure, FetchOutcome, RateSource};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, error, instrument};

/// Fetches daily archive rates from the PrivatBank public API.
///
/// Holds a single pooled `reqwest::Client` for its whole lifetime; the
/// connections are released when the provider is dropped.
pub struct PrivatBankProvider {
    client: reqwest::Client,
}

impl PrivatBankProvider {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(PrivatBankProvider { client })
    }
}

fn classify(err: reqwest::Error) -> FetchFailure {
    if err.is_connect() {
        FetchFailure::Connection(err.to_string())
    } else {
        FetchFailure::Transport(err.to_string())
    }
}

#[async_trait]
impl RateSource for PrivatBankProvider {
    #[instrument(name = "PrivatBankFetch", skip(self), fields(url = %url))]
    async fn fetch(&self, url: &str) -> FetchOutcome {
        debug!("Requesting exchange rates");
        let response = self.client.get(url).send().await.map_err(classify)?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!(%status, "Non-success status");
            return Err(FetchFailure::Status(status.as_u16()));
        }

        let response_text = response.text().await.map_err(classify)?;

        match serde_json::from_str::<DailyRateResponse>(&response_text) {
            Ok(data) => {
                debug!(date = %data.date, rows = data.exchange_rate.len(), "Decoded response");
                Ok(data)
            }
            Err(e) => {
                error!(
                    error = ?e,
                    response = %response_text,
                    "Failed to parse exchange rate response"
                );
                Err(FetchFailure::Malformed(e.to_string()))
            }
        }
    }
}
