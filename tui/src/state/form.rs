use std::{
    fs,
    path::{Path, PathBuf},
};

use analyzer::{Analyzer, HistoryLog, PredictionRecord, MAX_HOURS};

/// Result of the last Predict press.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Idle,
    Predicted(PredictionRecord),
    Invalid(String),
    Failed(String),
}

/// Sidebar status line after a history action.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Cleared,
    Exported(PathBuf),
    Failed(String),
}

/// Everything the prediction form shows.
///
/// `hours` is the number input. It only ever holds whole hours in
/// `[0, MAX_HOURS]`, the same constraint the HTML input enforces.
#[derive(Debug)]
pub struct FormState {
    pub hours: u8,
    pub outcome: Outcome,
    pub notice: Option<Notice>,
    pub history: HistoryLog,
    export_path: PathBuf,
}

const HOURS_CAP: u8 = MAX_HOURS as u8;

impl FormState {
    pub fn new(history: HistoryLog, export_path: PathBuf) -> Self {
        Self {
            hours: 0,
            outcome: Outcome::Idle,
            notice: None,
            history,
            export_path,
        }
    }

    /// Opens the form with the history currently on disk.
    ///
    /// A history that can't be read shows up as an empty table plus an
    /// error notice, the form itself stays usable.
    pub fn load(analyzer: &Analyzer, export_path: PathBuf) -> Self {
        let mut state = Self::new(HistoryLog::new(), export_path);
        state.refresh(analyzer);
        state
    }

    pub fn export_path(&self) -> &Path {
        &self.export_path
    }

    /// Types a digit into the input.
    ///
    /// A digit that would overflow the range starts a new number instead,
    /// so typing `3` after `24` leaves `3`.
    pub fn push_digit(&mut self, digit: u8) {
        let digit = digit.min(9);
        let next = u16::from(self.hours) * 10 + u16::from(digit);
        self.hours = if next <= u16::from(HOURS_CAP) {
            next as u8
        } else {
            digit
        };
    }

    pub fn pop_digit(&mut self) {
        self.hours /= 10;
    }

    pub fn increment(&mut self) {
        self.hours = (self.hours + 1).min(HOURS_CAP);
    }

    pub fn decrement(&mut self) {
        self.hours = self.hours.saturating_sub(1);
    }

    /// Predicts for the current input and appends the result to the history.
    pub fn predict(&mut self, analyzer: &Analyzer) {
        self.outcome = match analyzer.predict(f64::from(self.hours)) {
            Ok(record) => Outcome::Predicted(record),
            Err(e) if e.is_user_error() => Outcome::Invalid(e.user_message()),
            Err(e) => Outcome::Failed(e.user_message()),
        };
        self.refresh(analyzer);
    }

    pub fn clear(&mut self, analyzer: &Analyzer) {
        self.notice = Some(match analyzer.clear() {
            Ok(()) => Notice::Cleared,
            Err(e) => Notice::Failed(e.user_message()),
        });
        self.refresh(analyzer);
    }

    /// Writes the history CSV to `export_path`.
    pub fn export(&mut self, analyzer: &Analyzer) {
        let written = analyzer
            .export()
            .map_err(|e| e.user_message())
            .and_then(|bytes| {
                fs::write(&self.export_path, bytes).map_err(|e| {
                    format!(
                        "Something went wrong: cannot write '{}': {e}",
                        self.export_path.display()
                    )
                })
            });

        self.notice = Some(match written {
            Ok(()) => Notice::Exported(self.export_path.clone()),
            Err(msg) => Notice::Failed(msg),
        });
    }

    fn refresh(&mut self, analyzer: &Analyzer) {
        match analyzer.history() {
            Ok(history) => self.history = history,
            Err(e) => self.notice = Some(Notice::Failed(e.user_message())),
        }
    }
}

#[cfg(test)]
mod tests {
    use analyzer::HistoryStore;
    use model::LinearRegression;
    use tempfile::TempDir;

    use super::*;

    fn setup() -> (TempDir, Analyzer, FormState) {
        let dir = tempfile::tempdir().unwrap();
        let predictor = Box::new(LinearRegression::new(vec![3.93571802], 50.44735504));
        let analyzer = Analyzer::new(predictor, HistoryStore::new(dir.path().join("history.csv")));
        let state = FormState::load(&analyzer, dir.path().join("prediction_history.csv"));
        (dir, analyzer, state)
    }

    #[test]
    fn digits_stay_within_range() {
        let (_dir, _analyzer, mut state) = setup();

        state.push_digit(2);
        state.push_digit(4);
        assert_eq!(state.hours, 24);

        state.push_digit(3);
        assert_eq!(state.hours, 3);

        state.pop_digit();
        assert_eq!(state.hours, 0);
    }

    #[test]
    fn arrows_saturate_at_bounds() {
        let (_dir, _analyzer, mut state) = setup();

        state.decrement();
        assert_eq!(state.hours, 0);

        for _ in 0..30 {
            state.increment();
        }
        assert_eq!(state.hours, 24);
    }

    #[test]
    fn predict_appends_to_history() {
        let (_dir, analyzer, mut state) = setup();
        assert!(state.history.is_empty());

        state.push_digit(5);
        state.predict(&analyzer);

        let expected = PredictionRecord::new(5.0, 70.13);
        assert_eq!(state.outcome, Outcome::Predicted(expected));
        assert_eq!(state.history.records(), &[expected]);
    }

    #[test]
    fn clear_empties_history() {
        let (_dir, analyzer, mut state) = setup();
        for h in [2, 5, 8] {
            state.hours = h;
            state.predict(&analyzer);
        }
        assert_eq!(state.history.len(), 3);

        state.clear(&analyzer);

        assert!(state.history.is_empty());
        assert_eq!(state.notice, Some(Notice::Cleared));
        assert!(analyzer.history().unwrap().is_empty());
    }

    #[test]
    fn export_writes_csv_file() {
        let (_dir, analyzer, mut state) = setup();
        state.hours = 8;
        state.predict(&analyzer);

        state.export(&analyzer);

        let path = state.export_path().to_path_buf();
        assert_eq!(state.notice, Some(Notice::Exported(path.clone())));
        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content, "Study Hours,Predicted Marks\n8.0,81.93\n");
    }
}
