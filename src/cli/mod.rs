pub mod history;
pub mod ui;

pub use history::RateHistory;
