//! Next-day price direction signals for stock and crypto tickers
//!
//! Downloads historical daily prices, derives simple technical features,
//! trains a fresh per-ticker classifier and reports the probability that
//! the next session closes higher, discretized into BUY/HOLD/SELL.
//!
//! ## Architecture
//!
//! ```text
//! Provider (Yahoo chart API) → FeatureBuilder → LabelBuilder → TrainedModel
//!                                    ↓                             ↓
//!                           last feature row  →  predict_probability → Recommendation
//! ```

pub mod config;
pub mod error;
pub mod features;
pub mod model;
pub mod provider;
pub mod service;
pub mod types;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod integration_tests;
