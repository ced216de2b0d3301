//! Direction classifier and its training adapter
//!
//! A `TrainedModel` pairs a binary probabilistic classifier with the
//! scaler fitted alongside it. Models are trained fresh for every
//! prediction call and discarded afterwards; there is no model store and
//! nothing is shared across tickers.

mod logistic;
mod scaler;

pub use logistic::LogisticRegression;
pub use scaler::StandardScaler;

use crate::config::ModelConfig;
use crate::error::{Result, TrendError};
use crate::features::{FeatureRow, LabeledRow, FEATURE_DIM};
use ndarray::{Array1, Array2, ArrayView1};

/// Any binary probabilistic classifier over fixed-width feature vectors.
///
/// Logistic regression is the reference implementation; the pipeline only
/// relies on this contract.
pub trait BinaryClassifier: Send + Sync {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<()>;

    /// Estimated probability of the price-up class for a single vector.
    fn predict_probability(&self, x: ArrayView1<'_, f64>) -> Result<f64>;

    /// Classifier name for logging
    fn name(&self) -> &'static str;
}

/// A fitted classifier plus the scaler that standardized its training data.
#[derive(Debug)]
pub struct TrainedModel<C = LogisticRegression> {
    classifier: C,
    scaler: StandardScaler,
}

impl TrainedModel<LogisticRegression> {
    /// Fit the default logistic regression on a labeled feature set.
    pub fn fit(rows: &[LabeledRow], config: &ModelConfig) -> Result<Self> {
        Self::fit_with(LogisticRegression::new(config), rows)
    }
}

impl<C: BinaryClassifier> TrainedModel<C> {
    /// Fewest labeled rows a fit will accept.
    pub const MIN_TRAINING_ROWS: usize = 2;

    /// Standardize the labeled rows and fit `classifier` on them.
    ///
    /// Fails when there are too few rows or when every label is identical.
    /// A single-class set is rejected outright rather than producing a
    /// constant-probability model: a degenerate history cannot support a
    /// direction signal.
    pub fn fit_with(mut classifier: C, rows: &[LabeledRow]) -> Result<Self> {
        if rows.len() < Self::MIN_TRAINING_ROWS {
            return Err(TrendError::Training(format!(
                "{} labeled rows, need at least {}",
                rows.len(),
                Self::MIN_TRAINING_ROWS
            )));
        }
        if rows.iter().all(|r| r.target == rows[0].target) {
            return Err(TrendError::Training(format!(
                "all {} training labels are {}; cannot fit a direction model",
                rows.len(),
                rows[0].target
            )));
        }

        let x = Array2::from_shape_fn((rows.len(), FEATURE_DIM), |(i, j)| {
            rows[i].features.feature_vector()[j]
        });
        let y = Array1::from_iter(rows.iter().map(|r| f64::from(r.target)));

        let scaler = StandardScaler::fit(&x);
        let standardized = scaler.transform(&x);
        classifier.fit(&standardized, &y)?;

        Ok(Self { classifier, scaler })
    }

    /// Probability that the next session closes higher than `row`'s.
    ///
    /// Uses the inference vector (non-finite components zeroed before
    /// scaling) and the standardization fitted at training time.
    pub fn predict_probability(&self, row: &FeatureRow) -> Result<f64> {
        let vector = Array1::from_iter(row.inference_vector());
        let standardized = self.scaler.transform_row(vector.view());
        self.classifier.predict_probability(standardized.view())
    }

    pub fn classifier_name(&self) -> &'static str {
        self.classifier.name()
    }
}
