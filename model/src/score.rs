//! Post-processing applied to every raw prediction before it is shown or
//! stored: round to two decimals, then clamp to the valid mark range.

use crate::{ModelError, Result};

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Rounds to two decimal places, ties to even.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}

/// Restricts a score to `[MIN_SCORE, MAX_SCORE]`.
pub fn clamp_score(x: f64) -> f64 {
    x.clamp(MIN_SCORE, MAX_SCORE)
}

/// Rounds then clamps a raw regression output.
///
/// Unconstrained regression extrapolates past the mark range for inputs far
/// from the training data, the clamp keeps stored scores in `[0, 100]`.
///
/// # Errors
/// Returns `ModelError::NonFinite` for NaN or infinite input.
pub fn finalize(raw: f64) -> Result<f64> {
    if !raw.is_finite() {
        return Err(ModelError::NonFinite(raw));
    }
    Ok(clamp_score(round2(raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round2(52.3449), 52.34);
        assert_eq!(round2(52.3451), 52.35);
        assert_eq!(round2(-3.14159), -3.14);
    }

    #[test]
    fn clamps_after_rounding() {
        assert_eq!(finalize(100.004).unwrap(), 100.0);
        assert_eq!(finalize(123.456).unwrap(), 100.0);
        assert_eq!(finalize(-0.004).unwrap(), 0.0);
        assert_eq!(finalize(-7.5).unwrap(), 0.0);
        assert_eq!(finalize(41.236).unwrap(), 41.24);
    }

    #[test]
    fn non_finite_is_an_error() {
        assert!(matches!(finalize(f64::NAN), Err(ModelError::NonFinite(_))));
        assert!(matches!(
            finalize(f64::INFINITY),
            Err(ModelError::NonFinite(_))
        ));
    }
}
