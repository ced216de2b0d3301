//! Logistic regression trained by batch gradient descent

use crate::config::ModelConfig;
use crate::error::{Result, TrendError};
use ndarray::{Array1, Array2, ArrayView1};

use super::BinaryClassifier;

/// Binary logistic regression over standardized feature vectors.
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    weights: Option<Array1<f64>>,
    bias: f64,
    learning_rate: f64,
    max_iter: usize,
    tolerance: f64,
    l2: f64,
}

impl LogisticRegression {
    pub fn new(config: &ModelConfig) -> Self {
        Self {
            weights: None,
            bias: 0.0,
            learning_rate: config.learning_rate,
            max_iter: config.max_iter,
            tolerance: config.tolerance,
            l2: config.l2,
        }
    }

    /// Numerically stable sigmoid.
    fn sigmoid(z: f64) -> f64 {
        if z >= 0.0 {
            1.0 / (1.0 + (-z).exp())
        } else {
            let e = z.exp();
            e / (1.0 + e)
        }
    }

    /// Binary cross-entropy.
    fn log_loss(y: &Array1<f64>, p: &Array1<f64>) -> f64 {
        let eps = 1e-15;
        let n = y.len() as f64;
        -y.iter()
            .zip(p.iter())
            .map(|(&y, &p)| {
                let p = p.clamp(eps, 1.0 - eps);
                y * p.ln() + (1.0 - y) * (1.0 - p).ln()
            })
            .sum::<f64>()
            / n
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new(&ModelConfig::default())
    }
}

impl BinaryClassifier for LogisticRegression {
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<()> {
        if x.nrows() == 0 || x.nrows() != y.len() {
            return Err(TrendError::Training(format!(
                "feature matrix has {} rows but {} labels",
                x.nrows(),
                y.len()
            )));
        }

        let n = x.nrows() as f64;
        let mut weights = Array1::<f64>::zeros(x.ncols());
        let mut bias = 0.0;
        let mut prev_cost = f64::INFINITY;

        for _ in 0..self.max_iter {
            let linear = x.dot(&weights) + bias;
            let probs = linear.mapv(Self::sigmoid);

            let errors = &probs - y;
            let mut grad_w = x.t().dot(&errors) / n;
            if self.l2 > 0.0 {
                grad_w = grad_w + &weights * self.l2;
            }
            let grad_b = errors.sum() / n;

            weights = weights - grad_w * self.learning_rate;
            bias -= grad_b * self.learning_rate;

            let cost = Self::log_loss(y, &probs);
            if (prev_cost - cost).abs() < self.tolerance {
                break;
            }
            prev_cost = cost;
        }

        self.weights = Some(weights);
        self.bias = bias;
        Ok(())
    }

    fn predict_probability(&self, x: ArrayView1<'_, f64>) -> Result<f64> {
        let weights = self
            .weights
            .as_ref()
            .ok_or_else(|| TrendError::Training("classifier queried before fit".into()))?;
        Ok(Self::sigmoid(x.dot(weights) + self.bias))
    }

    fn name(&self) -> &'static str {
        "logistic_regression"
    }
}
