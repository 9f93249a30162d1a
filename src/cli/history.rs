//! Runs the fetch/extract pipeline and accumulates per-day summaries.

use super::ui;
use crate::core::config::CurrencySet;
use crate::core::extract::summarize;
use crate::core::rates::{DailyRateSummary, RateSource};
use crate::core::urls::UrlSequence;
use anyhow::Result;
use std::fmt::{self, Display};
use tracing::{debug, warn};

/// Ordered, append-only collection of daily summaries for one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateHistory {
    entries: Vec<DailyRateSummary>,
}

impl RateHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, summary: DailyRateSummary) {
        self.entries.push(summary);
    }

    pub fn entries(&self) -> &[DailyRateSummary] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn unavailable_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_available()).count()
    }
}

/// One line per summary, in accumulation order.
impl Display for RateHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// Requests every URL in order, one at a time, and records a summary for each.
pub async fn collect(
    urls: &UrlSequence,
    source: &dyn RateSource,
    currencies: &CurrencySet,
) -> Result<RateHistory> {
    let mut history = RateHistory::new();
    let pb = ui::new_progress_bar(urls.len() as u64)?;

    for request in urls.iter() {
        pb.set_message(request.date_label());
        let outcome = source.fetch(&request.url).await;
        if let Err(reason) = &outcome {
            warn!(date = %request.date_label(), %reason, "No rates for day");
        }

        let summary = summarize(&request, outcome, currencies);
        debug!(date = %summary.date(), available = summary.is_available(), "Recorded day");
        history.push(summary);
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(history)
}
