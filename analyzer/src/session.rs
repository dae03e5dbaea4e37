use history::{HistoryLog, HistoryStore, PredictionRecord};
use model::{Predictor, score};

use crate::{Result, StudyHours};

/// The prediction form's backend: a loaded model plus the history it feeds.
///
/// Requests are expected one at a time; the store is rewritten in full on
/// every append.
pub struct Analyzer {
    predictor: Box<dyn Predictor>,
    store: HistoryStore,
}

impl Analyzer {
    /// Creates a new `Analyzer`.
    ///
    /// # Arguments
    /// * `predictor` - The fitted regression.
    /// * `store` - Where predictions are recorded.
    pub fn new(predictor: Box<dyn Predictor>, store: HistoryStore) -> Self {
        Self { predictor, store }
    }

    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    /// Runs the model on already validated hours without recording anything.
    ///
    /// # Returns
    /// The score rounded to two decimals and clamped to `[0, 100]`.
    pub fn estimate(&self, hours: StudyHours) -> Result<f64> {
        let raw = self.predictor.predict(hours.get())?;
        let mark = score::finalize(raw)?;
        log::debug!(hours = hours.get(), raw = raw; "estimated {mark}");
        Ok(mark)
    }

    /// Validates `hours`, predicts and appends the result to the history.
    ///
    /// Invalid hours return `AnalyzerError::InvalidHours` before the model
    /// runs, so the history is left untouched.
    ///
    /// # Returns
    /// The stored record.
    pub fn predict(&self, hours: f64) -> Result<PredictionRecord> {
        self.record(StudyHours::new(hours)?)
    }

    /// Same as `predict`, for textual input coming from a form or a query.
    pub fn predict_input(&self, raw: &str) -> Result<PredictionRecord> {
        self.record(StudyHours::parse(raw)?)
    }

    /// Predicts for validated hours and appends the result to the history.
    pub fn record(&self, hours: StudyHours) -> Result<PredictionRecord> {
        let mark = self.estimate(hours)?;
        let record = PredictionRecord::new(hours.get(), mark);
        self.store.append(record)?;
        Ok(record)
    }

    /// Returns every stored prediction, oldest first.
    pub fn history(&self) -> Result<HistoryLog> {
        Ok(self.store.load()?)
    }

    /// Drops every stored prediction.
    pub fn clear(&self) -> Result<()> {
        Ok(self.store.clear()?)
    }

    /// Returns the history as CSV bytes for download.
    pub fn export(&self) -> Result<Vec<u8>> {
        Ok(self.store.export()?)
    }
}
