use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.privatbank.ua/p24api/exchange_rates?json&date=";
pub const MAX_PERIOD: u32 = 10;
pub const DEFAULT_CURRENCIES: [&str; 2] = ["EUR", "USD"];

/// Currency codes whose rates are kept from each daily response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencySet(Vec<String>);

impl CurrencySet {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CurrencySet(codes.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.iter().any(|c| c == code)
    }
}

impl Default for CurrencySet {
    fn default() -> Self {
        CurrencySet::new(DEFAULT_CURRENCIES)
    }
}

/// Per-run settings. The binary only ever uses [`FetchConfig::default`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Endpoint prefix; the `DD.MM.YYYY` date is appended verbatim.
    pub base_url: String,
    pub max_period: u32,
    pub currencies: CurrencySet,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_period: MAX_PERIOD,
            currencies: CurrencySet::default(),
            user_agent: concat!("privat-rates/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FetchConfig {
    pub fn with_base_url(base_url: &str) -> Self {
        FetchConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }
}

/// Number of past days to fetch, always within `0..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period(u32);

impl Period {
    pub fn new(requested: i64, max: u32) -> Self {
        let days = requested.clamp(0, i64::from(max)) as u32;
        if i64::from(days) != requested {
            debug!(requested, effective = days, "Period clamped");
        }
        Period(days)
    }

    pub fn days(&self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_within_range_is_kept() {
        for p in 0..=10 {
            assert_eq!(Period::new(p, MAX_PERIOD).days(), p as u32);
        }
    }

    #[test]
    fn test_period_above_max_is_clamped() {
        assert_eq!(Period::new(11, MAX_PERIOD).days(), 10);
        assert_eq!(Period::new(i64::MAX, MAX_PERIOD).days(), 10);
    }

    #[test]
    fn test_negative_period_is_empty() {
        assert_eq!(Period::new(-3, MAX_PERIOD).days(), 0);
    }

    #[test]
    fn test_default_config() {
        let config = FetchConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.max_period, 10);
        assert!(config.currencies.contains("EUR"));
        assert!(config.currencies.contains("USD"));
        assert!(!config.currencies.contains("GBP"));
        assert!(config.user_agent.starts_with("privat-rates/"));
    }

    #[test]
    fn test_with_base_url_keeps_other_defaults() {
        let config = FetchConfig::with_base_url("http://127.0.0.1:8080/rates?date=");
        assert_eq!(config.base_url, "http://127.0.0.1:8080/rates?date=");
        assert_eq!(config.max_period, MAX_PERIOD);
        assert_eq!(config.currencies, CurrencySet::default());
    }
}
