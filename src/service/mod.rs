//! Prediction pipeline orchestration
//!
//! One `predict` call runs the whole cycle for a single ticker: fetch the
//! series, build features, label the history, fit a fresh model and query
//! it once with the most recent feature row. Nothing is cached or shared
//! between calls, so tickers are fully independent of each other.

#[cfg(test)]
mod tests;

use crate::config::Config;
use crate::error::Result;
use crate::features::{FeatureBuilder, LabelBuilder};
use crate::model::TrainedModel;
use crate::provider::PriceSeriesProvider;
use crate::types::{LookbackPeriod, Prediction, Recommendation, TickerReport};
use tracing::debug;

/// Train-then-predict-then-discard pipeline over a price series provider.
pub struct PredictionService<P> {
    provider: P,
    config: Config,
}

impl<P: PriceSeriesProvider> PredictionService<P> {
    pub fn new(provider: P, config: Config) -> Self {
        Self { provider, config }
    }

    /// Predict the next-day direction for one ticker.
    ///
    /// Each stage's error propagates untouched: `DataUnavailable` and
    /// `Schema` from the provider, `InsufficientHistory` from the feature
    /// builder, `Training` from the model fit.
    pub async fn predict(&self, ticker: &str, period: LookbackPeriod) -> Result<Prediction> {
        let series = self.provider.fetch(ticker, period).await?;
        let table = FeatureBuilder::build(&series)?;
        let labeled = LabelBuilder::label(&table);
        let model = TrainedModel::fit(&labeled, &self.config.model)?;

        let latest = table.last();
        let probability_up = model.predict_probability(latest)?;
        debug!(
            ticker,
            probability_up,
            classifier = model.classifier_name(),
            rows = labeled.len(),
            "fitted and queried model"
        );

        Ok(Prediction {
            predicted_class: u8::from(probability_up > 0.5),
            probability_up,
            as_of: latest.date,
        })
    }

    /// Predict and map the probability to a BUY/HOLD/SELL action.
    pub async fn report(&self, ticker: &str, period: LookbackPeriod) -> Result<TickerReport> {
        let prediction = self.predict(ticker, period).await?;
        Ok(TickerReport {
            ticker: ticker.to_string(),
            recommendation: Recommendation::from_probability(
                prediction.probability_up,
                &self.config.signal,
            ),
            probability_up: prediction.probability_up,
            as_of: prediction.as_of,
        })
    }
}
