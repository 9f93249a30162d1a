//! Exchange rate payloads, per-day summaries and the fetch seam

use async_trait::async_trait;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::{self, Display};
use thiserror::Error;

/// One row of the `exchangeRate` array.
///
/// Commercial rates are only published for a handful of currencies, so both
/// may be missing; rows for the hryvnia itself can lack `currency` too.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRow {
    pub currency: Option<String>,
    pub sale_rate: Option<f64>,
    pub purchase_rate: Option<f64>,
}

/// Decoded body of a single `exchange_rates?json&date=` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRateResponse {
    pub date: String,
    pub exchange_rate: Vec<RateRow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rate {
    pub sale: f64,
    pub purchase: f64,
}

/// Why a day produced no data. None of these abort a run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchFailure {
    #[error("connection failed: {0}")]
    Connection(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("malformed payload: {0}")]
    Malformed(String),
}

pub type FetchOutcome = Result<DailyRateResponse, FetchFailure>;

#[async_trait]
pub trait RateSource: Send + Sync {
    async fn fetch(&self, url: &str) -> FetchOutcome;
}

/// Distilled result for one day.
#[derive(Debug, Clone, PartialEq)]
pub enum DailyRateSummary {
    /// Rates keyed by currency, in the order first seen in the response.
    Rates {
        date: String,
        rates: Vec<(String, Rate)>,
    },
    /// The day could not be fetched or decoded; `date` is the requested one.
    Unavailable { date: String, reason: FetchFailure },
}

impl DailyRateSummary {
    pub fn date(&self) -> &str {
        match self {
            DailyRateSummary::Rates { date, .. } | DailyRateSummary::Unavailable { date, .. } => {
                date.as_str()
            }
        }
    }

    pub fn rate(&self, currency: &str) -> Option<Rate> {
        match self {
            DailyRateSummary::Rates { rates, .. } => rates
                .iter()
                .find(|(code, _)| code == currency)
                .map(|(_, rate)| *rate),
            DailyRateSummary::Unavailable { .. } => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, DailyRateSummary::Rates { .. })
    }
}

struct RatesByCurrency<'a>(&'a [(String, Rate)]);

impl Serialize for RatesByCurrency<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (code, rate) in self.0 {
            map.serialize_entry(code, rate)?;
        }
        map.end()
    }
}

/// Serializes as `{date: {currency: {sale, purchase}}}`; unavailable days
/// map to an empty object.
impl Serialize for DailyRateSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rates: &[(String, Rate)] = match self {
            DailyRateSummary::Rates { rates, .. } => rates,
            DailyRateSummary::Unavailable { .. } => &[],
        };
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.date(), &RatesByCurrency(rates))?;
        map.end()
    }
}

impl Display for DailyRateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&line)
    }
}
