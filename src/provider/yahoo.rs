//! Yahoo Finance chart API provider
//!
//! Downloads daily bars from the v8 chart endpoint and normalizes them
//! into a `PriceSeries`: the price field is resolved by priority
//! (adjusted close, then raw close), bars with null OHLC entries are
//! skipped, and the current UTC day is dropped so a partially traded
//! session never reaches the feature pipeline.

use super::{trim_to_completed, PriceSeriesProvider};
use crate::config::ProviderConfig;
use crate::error::{Result, TrendError};
use crate::types::{LookbackPeriod, PriceBar, PriceFieldKind, PriceSeries};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Price history client for the Yahoo Finance chart API.
#[derive(Clone)]
pub struct YahooProvider {
    http: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Indicators {
    quote: Vec<Quote>,
    adjclose: Option<Vec<AdjClose>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Quote {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<u64>>,
}

#[derive(Debug, Deserialize)]
struct AdjClose {
    adjclose: Vec<Option<f64>>,
}

impl YahooProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn unavailable(ticker: &str, reason: impl Into<String>) -> TrendError {
        TrendError::DataUnavailable {
            ticker: ticker.to_string(),
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl PriceSeriesProvider for YahooProvider {
    async fn fetch(&self, ticker: &str, period: LookbackPeriod) -> Result<PriceSeries> {
        let url = format!("{}/{}", self.base_url, ticker);
        debug!(ticker, %period, "fetching price history");

        let response = self
            .http
            .get(&url)
            .query(&[("range", period.to_string()), ("interval", "1d".into())])
            .send()
            .await
            .map_err(|e| Self::unavailable(ticker, e.to_string()))?
            .error_for_status()
            .map_err(|e| Self::unavailable(ticker, e.to_string()))?;

        let chart: ChartResponse = response
            .json()
            .await
            .map_err(|e| Self::unavailable(ticker, e.to_string()))?;

        series_from_chart(ticker, chart, Utc::now().date_naive())
    }

    fn name(&self) -> &str {
        "yahoo"
    }
}

/// Normalize a chart payload into a trimmed, date-ascending `PriceSeries`.
fn series_from_chart(
    ticker: &str,
    response: ChartResponse,
    today: NaiveDate,
) -> Result<PriceSeries> {
    if let Some(err) = response.chart.error {
        return Err(YahooProvider::unavailable(
            ticker,
            format!("{}: {}", err.code, err.description),
        ));
    }

    let result = response
        .chart
        .result
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| YahooProvider::unavailable(ticker, "empty chart result"))?;

    let timestamps = result.timestamp.unwrap_or_default();
    if timestamps.is_empty() {
        return Err(YahooProvider::unavailable(ticker, "no bars in range"));
    }

    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();
    let adjclose = result.indicators.adjclose.and_then(|a| a.into_iter().next());

    let has_close = quote.close.iter().any(Option::is_some);
    let has_adjusted = adjclose
        .as_ref()
        .is_some_and(|a| a.adjclose.iter().any(Option::is_some));
    let field = PriceFieldKind::resolve(has_adjusted, has_close)
        .ok_or_else(|| TrendError::Schema(ticker.to_string()))?;

    let mut bars = Vec::with_capacity(timestamps.len());
    for (i, ts) in timestamps.iter().enumerate() {
        let Some(date) = DateTime::from_timestamp(*ts, 0).map(|dt| dt.date_naive()) else {
            continue;
        };
        let (Some(open), Some(high), Some(low), Some(close)) = (
            series_value(&quote.open, i),
            series_value(&quote.high, i),
            series_value(&quote.low, i),
            series_value(&quote.close, i),
        ) else {
            // null OHLC entries mark holidays or feed gaps
            continue;
        };

        bars.push(PriceBar {
            date,
            open,
            high,
            low,
            close,
            adj_close: adjclose.as_ref().and_then(|a| series_value(&a.adjclose, i)),
            volume: series_value(&quote.volume, i).unwrap_or(0),
        });
    }

    bars.sort_by_key(|b| b.date);
    bars.dedup_by_key(|b| b.date);

    let bars = trim_to_completed(bars, today);
    if bars.is_empty() {
        return Err(YahooProvider::unavailable(
            ticker,
            "no completed trading sessions in range",
        ));
    }

    debug!(ticker, bars = bars.len(), ?field, "normalized price series");
    Ok(PriceSeries::new(ticker, bars))
}

fn series_value<T: Copy>(xs: &[Option<T>], i: usize) -> Option<T> {
    xs.get(i).copied().flatten()
}
