use serde::{Deserialize, Serialize};

/// One successful prediction: the hours entered and the mark returned.
///
/// Field order matches the CSV column order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub study_hours: f64,
    pub predicted_score: f64,
}

impl PredictionRecord {
    pub fn new(study_hours: f64, predicted_score: f64) -> Self {
        Self {
            study_hours,
            predicted_score,
        }
    }
}
