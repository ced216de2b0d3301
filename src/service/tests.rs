//! Tests for the prediction service over a mocked provider

use super::*;
use crate::config::Config;
use crate::error::TrendError;
use crate::provider::MockPriceSeriesProvider;
use crate::types::{PriceBar, PriceSeries};
use chrono::{Days, NaiveDate};

fn date(i: usize) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Days::new(i as u64)
}

fn series(prices: &[f64]) -> PriceSeries {
    let bars = prices
        .iter()
        .enumerate()
        .map(|(i, &p)| PriceBar {
            date: date(i),
            open: p,
            high: p + 0.5,
            low: p - 0.5,
            close: p,
            adj_close: Some(p),
            volume: 1_000,
        })
        .collect();
    PriceSeries::new("TEST", bars)
}

/// Alternating walk so training labels carry both classes.
fn zigzag(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 100.0 + 0.2 * i as f64 + 2.0 * (i % 2) as f64)
        .collect()
}

fn service_with_series(prices: &[f64]) -> PredictionService<MockPriceSeriesProvider> {
    let fixed = series(prices);
    let mut provider = MockPriceSeriesProvider::new();
    provider
        .expect_fetch()
        .returning(move |_, _| Ok(fixed.clone()));
    PredictionService::new(provider, Config::default())
}

#[tokio::test]
async fn test_predict_end_to_end() {
    let service = service_with_series(&zigzag(60));
    let prediction = service
        .predict("TEST", LookbackPeriod::default())
        .await
        .unwrap();

    assert!((0.0..=1.0).contains(&prediction.probability_up));
    assert_eq!(
        prediction.predicted_class,
        u8::from(prediction.probability_up > 0.5)
    );
    // the prediction is anchored on the last completed bar
    assert_eq!(prediction.as_of, date(59));
}

#[tokio::test]
async fn test_predict_is_deterministic() {
    let service = service_with_series(&zigzag(60));
    let first = service
        .predict("TEST", LookbackPeriod::default())
        .await
        .unwrap();
    let second = service
        .predict("TEST", LookbackPeriod::default())
        .await
        .unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_provider_failure_propagates() {
    let mut provider = MockPriceSeriesProvider::new();
    provider.expect_fetch().returning(|ticker, _| {
        Err(TrendError::DataUnavailable {
            ticker: ticker.to_string(),
            reason: "connection refused".to_string(),
        })
    });
    let service = PredictionService::new(provider, Config::default());

    let err = service
        .predict("NOPE", LookbackPeriod::default())
        .await
        .unwrap_err();
    assert!(matches!(err, TrendError::DataUnavailable { .. }));
}

#[tokio::test]
async fn test_short_history_propagates() {
    let service = service_with_series(&zigzag(15));
    let err = service
        .predict("TEST", LookbackPeriod::default())
        .await
        .unwrap_err();
    assert!(matches!(err, TrendError::InsufficientHistory { .. }));
}

#[tokio::test]
async fn test_degenerate_labels_propagate() {
    // strictly ascending prices: every training label is 1
    let prices: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
    let service = service_with_series(&prices);
    let err = service
        .predict("TEST", LookbackPeriod::default())
        .await
        .unwrap_err();
    assert!(matches!(err, TrendError::Training(_)));
}

#[tokio::test]
async fn test_report_maps_probability_to_recommendation() {
    let service = service_with_series(&zigzag(60));
    let report = service
        .report("TEST", LookbackPeriod::default())
        .await
        .unwrap();

    let expected = Recommendation::from_probability(
        report.probability_up,
        &Config::default().signal,
    );
    assert_eq!(report.recommendation, expected);
    assert_eq!(report.ticker, "TEST");
    assert_eq!(report.as_of, date(59));
}
