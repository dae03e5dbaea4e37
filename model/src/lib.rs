//! Regression models that turn a study-hours value into an exam score.
//!
//! The fitted parameters come from an artifact produced by an external
//! training process. Everything here is read-only once loaded.

mod artifact;
mod error;
mod linear;
mod polynomial;
pub mod score;

pub use artifact::{Artifact, load_artifact};
pub use error::{ModelError, Result};
pub use linear::LinearRegression;
pub use polynomial::PolynomialRegression;

/// A fitted scalar regression `f(hours) -> score`.
///
/// Implementations must be pure: the same input always yields the same
/// output and no state is touched.
pub trait Predictor: Send + Sync {
    /// Evaluates the raw regression, before any rounding or clamping.
    ///
    /// # Arguments
    /// * `hours` - The study hours per day.
    ///
    /// # Returns
    /// The unbounded predicted score.
    fn predict(&self, hours: f64) -> Result<f64>;
}

impl<P: Predictor + ?Sized> Predictor for Box<P> {
    fn predict(&self, hours: f64) -> Result<f64> {
        (**self).predict(hours)
    }
}
