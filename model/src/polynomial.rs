use ndarray::Array1;

use crate::{LinearRegression, ModelError, Predictor, Result};

/// Linear regression over the polynomial expansion `[h, h², …, h^degree]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialRegression {
    degree: usize,
    linear: LinearRegression,
}

impl PolynomialRegression {
    /// Creates a new `PolynomialRegression`.
    ///
    /// # Arguments
    /// * `degree` - The highest power of the input, at least 1.
    /// * `coefficients` - One weight per power, lowest power first.
    /// * `intercept` - The bias term.
    ///
    /// # Returns
    /// The model, or an error if the coefficients don't match the degree.
    pub fn new(degree: usize, coefficients: Vec<f64>, intercept: f64) -> Result<Self> {
        if degree == 0 {
            return Err(ModelError::ZeroDegree);
        }

        if coefficients.len() != degree {
            return Err(ModelError::FeatureMismatch {
                expected: degree,
                got: coefficients.len(),
            });
        }

        Ok(Self {
            degree,
            linear: LinearRegression::new(coefficients, intercept),
        })
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    fn expand(&self, hours: f64) -> Array1<f64> {
        (1..=self.degree).map(|p| hours.powi(p as i32)).collect()
    }
}

impl Predictor for PolynomialRegression {
    fn predict(&self, hours: f64) -> Result<f64> {
        let features = self.expand(hours);
        self.linear.predict_row(features.view())
    }
}
