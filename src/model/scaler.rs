//! Feature standardization

use ndarray::{Array1, Array2, ArrayView1, Axis};

/// Zero-mean, unit-variance scaler.
///
/// Statistics are fitted on a single training call's data and never
/// reused across tickers or calls.
#[derive(Debug, Clone)]
pub struct StandardScaler {
    means: Array1<f64>,
    stds: Array1<f64>,
}

impl StandardScaler {
    /// Fit per-column mean and population standard deviation.
    pub fn fit(x: &Array2<f64>) -> Self {
        let means = x
            .mean_axis(Axis(0))
            .unwrap_or_else(|| Array1::zeros(x.ncols()));
        let mut stds = x.std_axis(Axis(0), 0.0);
        // constant columns get unit scale so they standardize to zero
        stds.mapv_inplace(|s| if s > 0.0 { s } else { 1.0 });
        Self { means, stds }
    }

    pub fn transform(&self, x: &Array2<f64>) -> Array2<f64> {
        (x - &self.means) / &self.stds
    }

    pub fn transform_row(&self, x: ArrayView1<'_, f64>) -> Array1<f64> {
        (&x - &self.means) / &self.stds
    }
}
