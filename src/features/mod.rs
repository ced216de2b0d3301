//! Feature engineering over daily price series
//!
//! Turns a raw price series into the fixed feature set the direction
//! classifier consumes: one-day return, 5/10/20-day simple moving
//! averages and 10-day return volatility. Rows whose trailing windows are
//! not fully populated are dropped, never filled, so every surviving row
//! is built from past data only.

mod labels;

pub use labels::{LabelBuilder, LabeledRow};

use crate::error::{Result, TrendError};
use crate::types::PriceSeries;
use chrono::NaiveDate;

/// Width of the feature vector fed to the classifier.
pub const FEATURE_DIM: usize = 5;

/// One fully-populated feature row for a single trading date.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    pub date: NaiveDate,
    /// Resolved price the row was computed from
    pub adj_close: f64,
    /// One-day fractional return
    pub ret: f64,
    pub sma_5: f64,
    pub sma_10: f64,
    pub sma_20: f64,
    /// Sample standard deviation of returns over the trailing 10 bars
    pub vol_10: f64,
}

impl FeatureRow {
    /// Fixed-order feature vector used for training.
    pub fn feature_vector(&self) -> [f64; FEATURE_DIM] {
        [self.ret, self.sma_5, self.sma_10, self.sma_20, self.vol_10]
    }

    /// Feature vector for inference. Non-finite components are substituted
    /// with 0.0 before scaling, which standardizes them to the column mean
    /// rather than discarding the row. This is a deliberate inference-time
    /// fallback; training rows are never patched this way.
    pub fn inference_vector(&self) -> [f64; FEATURE_DIM] {
        self.feature_vector()
            .map(|v| if v.is_finite() { v } else { 0.0 })
    }
}

/// Date-ascending feature rows for one ticker.
///
/// Built only by [`FeatureBuilder::build`], which rejects series that
/// would produce an empty table, so a `FeatureTable` always holds at
/// least one row.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTable {
    rows: Vec<FeatureRow>,
}

impl FeatureTable {
    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The most recent row, reserved for inference.
    pub fn last(&self) -> &FeatureRow {
        &self.rows[self.rows.len() - 1]
    }
}

/// Builds the feature table from a raw price series.
pub struct FeatureBuilder;

impl FeatureBuilder {
    /// Bars consumed before the first fully-populated row: the 20-day SMA
    /// is the widest window and binds.
    pub const MIN_BARS: usize = 20;

    /// Compute features for every date whose trailing windows are fully
    /// populated. Pure function of the input series: the same series
    /// always yields a bit-identical table.
    pub fn build(series: &PriceSeries) -> Result<FeatureTable> {
        let field = series.price_field();
        let prices: Vec<f64> = series.bars.iter().map(|b| b.price(field)).collect();
        let n = prices.len();

        // One-day returns; index 0 has no predecessor.
        let mut rets = vec![f64::NAN; n];
        for t in 1..n {
            rets[t] = prices[t] / prices[t - 1] - 1.0;
        }

        let mut rows = Vec::new();
        for t in (Self::MIN_BARS - 1)..n {
            let row = FeatureRow {
                date: series.bars[t].date,
                adj_close: prices[t],
                ret: rets[t],
                sma_5: mean(&prices[t + 1 - 5..=t]),
                sma_10: mean(&prices[t + 1 - 10..=t]),
                sma_20: mean(&prices[t + 1 - 20..=t]),
                vol_10: sample_std(&rets[t + 1 - 10..=t]),
            };
            if row.feature_vector().iter().all(|v| v.is_finite()) {
                rows.push(row);
            }
        }

        if rows.is_empty() {
            return Err(TrendError::InsufficientHistory {
                got: n,
                need: Self::MIN_BARS,
            });
        }

        Ok(FeatureTable { rows })
    }
}

fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Sample standard deviation (ddof = 1).
fn sample_std(xs: &[f64]) -> f64 {
    if xs.len() < 2 {
        return f64::NAN;
    }
    let m = mean(xs);
    let var = xs.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (xs.len() - 1) as f64;
    var.sqrt()
}
