pub mod config;
pub mod error;
mod hours;
mod session;

pub use config::AppConfig;
pub use error::{AnalyzerError, Result};
pub use history::{HistoryLog, HistoryStore, PredictionRecord};
pub use hours::{INVALID_HOURS_MESSAGE, MAX_HOURS, MIN_HOURS, StudyHours};
pub use session::Analyzer;

/// Loads the regression artifact and opens the history store named by
/// `config`.
///
/// # Errors
/// Returns an `AnalyzerError` if the model artifact can't be loaded. Callers
/// treat that as fatal, there is nothing to serve without a model.
pub fn open(config: &AppConfig) -> Result<Analyzer> {
    log::info!("loading model from {}", config.model_path.display());
    let predictor = model::load_artifact(&config.model_path)?;
    let store = HistoryStore::new(&config.history_path);
    log::info!("history stored at {}", store.path().display());
    Ok(Analyzer::new(predictor, store))
}
