use std::fmt;

use crate::{AnalyzerError, Result};

pub const MIN_HOURS: f64 = 0.0;
pub const MAX_HOURS: f64 = 24.0;

/// Shown whenever the entered hours fail validation.
pub const INVALID_HOURS_MESSAGE: &str = "Please enter valid hours between 0 and 24.";

/// Study hours per day that passed validation.
///
/// Holding a `StudyHours` is the `Valid` state: the only way to build one is
/// through `new`/`parse`, which reject anything outside `[0, 24]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct StudyHours(f64);

impl StudyHours {
    /// Validates a numeric input.
    ///
    /// # Arguments
    /// * `hours` - The raw value, NaN and infinities are rejected.
    ///
    /// # Returns
    /// The validated hours or `AnalyzerError::InvalidHours`.
    pub fn new(hours: f64) -> Result<Self> {
        if (MIN_HOURS..=MAX_HOURS).contains(&hours) {
            Ok(Self(hours))
        } else {
            Err(AnalyzerError::InvalidHours {
                input: hours.to_string(),
            })
        }
    }

    /// Parses and validates a textual input, as sent by a form or a query
    /// string.
    pub fn parse(raw: &str) -> Result<Self> {
        let hours = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| AnalyzerError::InvalidHours {
                input: raw.to_string(),
            })?;
        Self::new(hours)
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for StudyHours {
    type Error = AnalyzerError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for StudyHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
