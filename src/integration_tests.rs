//! End-to-end pipeline tests over synthetic series
//!
//! Exercises FeatureBuilder → LabelBuilder → TrainedModel the way the
//! prediction service chains them, without a network provider.

use crate::config::{Config, ModelConfig};
use crate::features::{FeatureBuilder, LabelBuilder};
use crate::model::TrainedModel;
use crate::types::{PriceBar, PriceSeries, Recommendation};
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
            high: p + 1.0,
            low: p - 1.0,
            close: p,
            adj_close: Some(p),
            volume: 10_000,
        })
        .collect();
    PriceSeries::new("SYN", bars)
}

/// Deterministic wave around a drift so both label classes appear.
fn wavy_prices(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 100.0 + 0.1 * i as f64 + 3.0 * ((i as f64) * 0.7).sin())
        .collect()
}

#[test]
fn test_full_pipeline_on_synthetic_series() {
    let input = series(&wavy_prices(80));
    let table = FeatureBuilder::build(&input).unwrap();
    assert_eq!(table.len(), 80 - 19);

    let labeled = LabelBuilder::label(&table);
    assert_eq!(labeled.len(), table.len() - 1);

    let model = TrainedModel::fit(&labeled, &ModelConfig::default()).unwrap();
    let probability = model.predict_probability(table.last()).unwrap();
    assert!((0.0..=1.0).contains(&probability));

    let config = Config::default();
    let action = Recommendation::from_probability(probability, &config.signal);
    match action {
        Recommendation::Buy => assert!(probability >= config.signal.buy_threshold),
        Recommendation::Sell => assert!(probability <= config.signal.sell_threshold),
        Recommendation::Hold => {
            assert!(probability > config.signal.sell_threshold);
            assert!(probability < config.signal.buy_threshold);
        }
    }
}

#[test]
fn test_final_bar_never_leaks_into_historical_labels() {
    let mut prices = wavy_prices(60);
    let baseline = LabelBuilder::label(&FeatureBuilder::build(&series(&prices)).unwrap());

    // moving only the most recent price may flip only the final label
    prices[59] += 50.0;
    let shifted = LabelBuilder::label(&FeatureBuilder::build(&series(&prices)).unwrap());

    assert_eq!(baseline.len(), shifted.len());
    for (a, b) in baseline
        .iter()
        .zip(shifted.iter())
        .take(baseline.len() - 1)
    {
        assert_eq!(a.target, b.target, "historical label changed at {}", a.features.date);
        assert_eq!(a.features, b.features, "historical features changed at {}", a.features.date);
    }
}

#[test]
fn test_pipeline_is_deterministic() {
    let input = series(&wavy_prices(70));

    let run = || {
        let table = FeatureBuilder::build(&input).unwrap();
        let labeled = LabelBuilder::label(&table);
        let model = TrainedModel::fit(&labeled, &ModelConfig::default()).unwrap();
        model.predict_probability(table.last()).unwrap()
    };

    assert_eq!(run(), run());
}
