use std::{error::Error, fmt, io, path::PathBuf};

use history::HistoryError;
use model::ModelError;

use crate::hours::INVALID_HOURS_MESSAGE;

/// The analyzer module's result type.
pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// All errors that can occur while serving a prediction.
#[derive(Debug)]
pub enum AnalyzerError {
    /// The study hours are not a number in `[0, 24]`. Shown to the user.
    InvalidHours { input: String },
    /// Invalid configuration, caught before serving.
    InvalidConfig(String),
    /// The configuration file could not be read.
    ConfigIo { path: PathBuf, source: io::Error },
    /// The regression artifact failed to load or evaluate.
    Model(ModelError),
    /// The history file could not be read or written.
    History(HistoryError),
}

impl AnalyzerError {
    /// Whether the error was caused by the user's input rather than by the
    /// system. Only user errors are recoverable by retrying with new input.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidHours { .. })
    }

    /// The text to show on a user-facing surface.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidHours { .. } => INVALID_HOURS_MESSAGE.to_string(),
            other => format!("Something went wrong: {other}"),
        }
    }
}

impl fmt::Display for AnalyzerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHours { input } => {
                write!(f, "invalid study hours '{input}': expected a number between 0 and 24")
            }
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::ConfigIo { path, source } => {
                write!(f, "cannot read config '{}': {source}", path.display())
            }
            Self::Model(e) => write!(f, "model error: {e}"),
            Self::History(e) => write!(f, "history error: {e}"),
        }
    }
}

impl Error for AnalyzerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ConfigIo { source, .. } => Some(source),
            Self::Model(e) => Some(e),
            Self::History(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ModelError> for AnalyzerError {
    fn from(e: ModelError) -> Self {
        Self::Model(e)
    }
}

impl From<HistoryError> for AnalyzerError {
    fn from(e: HistoryError) -> Self {
        Self::History(e)
    }
}
