//! Market data providers

mod yahoo;

pub use yahoo::YahooProvider;

use crate::error::Result;
use crate::types::{LookbackPeriod, PriceBar, PriceSeries};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Source of historical daily price series.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PriceSeriesProvider: Send + Sync {
    /// Fetch daily bars covering `[now - period, last completed trading
    /// day]` for one ticker. Fails with `DataUnavailable` when the source
    /// cannot be reached or the trimmed series is empty.
    async fn fetch(&self, ticker: &str, period: LookbackPeriod) -> Result<PriceSeries>;

    /// Provider name for logging
    fn name(&self) -> &str;
}

/// Keep only bars from completed sessions: everything dated strictly
/// before `today` (UTC calendar date). The current day may still be
/// trading, and a partial bar must not reach the feature pipeline.
pub fn trim_to_completed(bars: Vec<PriceBar>, today: NaiveDate) -> Vec<PriceBar> {
    bars.into_iter().filter(|b| b.date < today).collect()
}
