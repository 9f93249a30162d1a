use super::config::CurrencySet;
use super::rates::{DailyRateResponse, DailyRateSummary, FetchOutcome, Rate};
use super::urls::DailyRequest;
use tracing::debug;

/// Turns one day's fetch outcome into a summary.
///
/// Failed fetches become [`DailyRateSummary::Unavailable`] keyed by the
/// requested date, so every requested day occupies a slot.
pub fn summarize(
    request: &DailyRequest,
    outcome: FetchOutcome,
    currencies: &CurrencySet,
) -> DailyRateSummary {
    match outcome {
        Ok(response) => extract(response, currencies),
        Err(reason) => DailyRateSummary::Unavailable {
            date: request.date_label(),
            reason,
        },
    }
}

/// Keeps rows whose currency is in `currencies`, keyed by the response date.
pub fn extract(response: DailyRateResponse, currencies: &CurrencySet) -> DailyRateSummary {
    let mut rates: Vec<(String, Rate)> = Vec::new();

    for row in response.exchange_rate {
        let Some(code) = row.currency else {
            continue;
        };
        if !currencies.contains(&code) {
            continue;
        }
        let (Some(sale), Some(purchase)) = (row.sale_rate, row.purchase_rate) else {
            debug!(currency = %code, date = %response.date, "Skipping row without commercial rates");
            continue;
        };

        let rate = Rate { sale, purchase };
        // A repeated currency overwrites in place
        match rates.iter_mut().find(|(existing, _)| *existing == code) {
            Some((_, slot)) => *slot = rate,
            None => rates.push((code, rate)),
        }
    }

    DailyRateSummary::Rates {
        date: response.date,
        rates,
    }
}
