use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{LinearRegression, ModelError, PolynomialRegression, Predictor, Result};

/// On-disk form of a fitted regression, stored as JSON.
///
/// ```json
/// { "kind": "linear", "coefficients": [9.77], "intercept": 2.48 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Artifact {
    Linear {
        coefficients: Vec<f64>,
        intercept: f64,
    },
    Polynomial {
        degree: usize,
        coefficients: Vec<f64>,
        intercept: f64,
    },
}

impl Artifact {
    /// Reads and parses an artifact file.
    ///
    /// # Arguments
    /// * `path` - Location of the JSON artifact.
    ///
    /// # Returns
    /// The parsed artifact or a `ModelError` naming the path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ModelError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Builds the predictor described by this artifact.
    ///
    /// The input is a single feature (study hours), so a linear artifact must
    /// carry exactly one coefficient.
    pub fn into_predictor(self) -> Result<Box<dyn Predictor>> {
        match self {
            Self::Linear {
                coefficients,
                intercept,
            } => {
                if coefficients.len() != 1 {
                    return Err(ModelError::FeatureMismatch {
                        expected: 1,
                        got: coefficients.len(),
                    });
                }
                Ok(Box::new(LinearRegression::new(coefficients, intercept)))
            }
            Self::Polynomial {
                degree,
                coefficients,
                intercept,
            } => Ok(Box::new(PolynomialRegression::new(
                degree,
                coefficients,
                intercept,
            )?)),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Linear { .. } => "linear",
            Self::Polynomial { .. } => "polynomial",
        }
    }
}

/// Loads the regression artifact at `path` and returns it ready to predict.
///
/// # Errors
/// Returns a `ModelError` if the file is missing, malformed or its
/// parameters don't fit a single-input model.
pub fn load_artifact<P: AsRef<Path>>(path: P) -> Result<Box<dyn Predictor>> {
    let path = path.as_ref();
    let artifact = Artifact::from_path(path)?;
    log::info!(
        "loaded {} regression artifact from {}",
        artifact.kind(),
        path.display()
    );
    artifact.into_predictor()
}
