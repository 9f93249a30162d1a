//! Date-stamped request URLs for the lookback window

use super::config::Period;
use chrono::{Days, NaiveDate};

pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A single day to request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyRequest {
    pub date: NaiveDate,
    pub url: String,
}

impl DailyRequest {
    /// The requested date as the API spells it (`DD.MM.YYYY`).
    pub fn date_label(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// The `period` days before `today`, most recent first.
///
/// Today itself is excluded: offsets run over `1..=period`. `today` is
/// captured once, so iterating again yields the same requests.
#[derive(Debug, Clone)]
pub struct UrlSequence {
    base_url: String,
    period: Period,
    today: NaiveDate,
}

impl UrlSequence {
    pub fn new(base_url: &str, period: Period, today: NaiveDate) -> Self {
        UrlSequence {
            base_url: base_url.to_string(),
            period,
            today,
        }
    }

    pub fn len(&self) -> usize {
        self.period.days() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = DailyRequest> + '_ {
        (1..=u64::from(self.period.days())).filter_map(move |offset| {
            let date = self.today.checked_sub_days(Days::new(offset))?;
            Some(DailyRequest {
                date,
                url: format!("{}{}", self.base_url, date.format(DATE_FORMAT)),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::MAX_PERIOD;

    const BASE: &str = "https://api.privatbank.ua/p24api/exchange_rates?json&date=";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_format_is_zero_padded() {
        let request = DailyRequest {
            date: date(2024, 2, 10),
            url: String::new(),
        };
        assert_eq!(request.date_label(), "10.02.2024");
        assert_eq!(date(2024, 2, 10).format(DATE_FORMAT).to_string(), "10.02.2024");
    }

    #[test]
    fn test_sequence_starts_yesterday_and_descends() {
        let urls = UrlSequence::new(BASE, Period::new(2, MAX_PERIOD), date(2024, 3, 5));
        let requests: Vec<_> = urls.iter().collect();

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].date_label(), "04.03.2024");
        assert_eq!(
            requests[0].url,
            "https://api.privatbank.ua/p24api/exchange_rates?json&date=04.03.2024"
        );
        assert_eq!(requests[1].date_label(), "03.03.2024");
    }

    #[test]
    fn test_sequence_crosses_month_and_leap_day() {
        let urls = UrlSequence::new(BASE, Period::new(3, MAX_PERIOD), date(2024, 3, 2));
        let labels: Vec<_> = urls.iter().map(|r| r.date_label()).collect();
        assert_eq!(labels, ["01.03.2024", "29.02.2024", "28.02.2024"]);
    }

    #[test]
    fn test_sequence_length_matches_period() {
        for p in 0..=12 {
            let urls = UrlSequence::new(BASE, Period::new(p, MAX_PERIOD), date(2024, 1, 15));
            let expected = p.min(10) as usize;
            assert_eq!(urls.len(), expected);
            assert_eq!(urls.iter().count(), expected);
        }
    }

    #[test]
    fn test_sequence_is_restartable() {
        let urls = UrlSequence::new(BASE, Period::new(5, MAX_PERIOD), date(2024, 12, 31));
        let first: Vec<_> = urls.iter().collect();
        let second: Vec<_> = urls.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_period() {
        let urls = UrlSequence::new(BASE, Period::new(0, MAX_PERIOD), date(2024, 1, 1));
        assert!(urls.is_empty());
        assert_eq!(urls.iter().next(), None);
    }
}
