use ndarray::{Array1, ArrayView1, aview1};

use crate::{ModelError, Predictor, Result};

/// Ordinary linear regression: `y = w · x + b`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegression {
    coefficients: Array1<f64>,
    intercept: f64,
}

impl LinearRegression {
    /// Creates a new `LinearRegression` from its fitted parameters.
    ///
    /// # Arguments
    /// * `coefficients` - One weight per input feature.
    /// * `intercept` - The bias term.
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients: Array1::from(coefficients),
            intercept,
        }
    }

    /// Returns the amount of input features this model expects.
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    pub fn coefficients(&self) -> ArrayView1<'_, f64> {
        self.coefficients.view()
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Evaluates the model on a single feature row.
    ///
    /// # Arguments
    /// * `x` - The feature row, must have `n_features` entries.
    ///
    /// # Returns
    /// The raw prediction or a `FeatureMismatch` error.
    pub fn predict_row(&self, x: ArrayView1<f64>) -> Result<f64> {
        if x.len() != self.n_features() {
            return Err(ModelError::FeatureMismatch {
                expected: self.n_features(),
                got: x.len(),
            });
        }

        Ok(self.coefficients.dot(&x) + self.intercept)
    }
}

impl Predictor for LinearRegression {
    fn predict(&self, hours: f64) -> Result<f64> {
        self.predict_row(aview1(&[hours]))
    }
}
