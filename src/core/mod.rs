//! Core types and the request/extract pipeline stages

pub mod config;
pub mod extract;
pub mod log;
pub mod rates;
pub mod urls;

// Re-export main types for cleaner imports
pub use config::{CurrencySet, FetchConfig, Period};
pub use rates::{DailyRateResponse, DailyRateSummary, FetchFailure, FetchOutcome, Rate, RateSource};
pub use urls::{DailyRequest, UrlSequence};
