use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{AnalyzerError, Result};

/// Env var naming a JSON config file.
pub const ENV_CONFIG: &str = "ANALYZER_CONFIG";

const ENV_HOST: &str = "HOST";
const ENV_PORT: &str = "PORT";
const ENV_MODEL: &str = "ANALYZER_MODEL";
const ENV_BACKGROUND: &str = "ANALYZER_BACKGROUND";
const ENV_HISTORY: &str = "ANALYZER_HISTORY";

/// Runtime settings. Every field has a default, a config file only needs the
/// ones it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Serialized regression artifact, loaded once at startup.
    pub model_path: PathBuf,
    /// Page background, inlined into the stylesheet.
    pub background_path: PathBuf,
    /// CSV file backing the prediction history.
    pub history_path: PathBuf,
    /// File name offered when the history is downloaded.
    pub download_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8501,
            model_path: "assets/student_mark_predictor.json".into(),
            background_path: "assets/background.png".into(),
            history_path: "smp_data_from_app.csv".into(),
            download_name: "prediction_history.csv".into(),
        }
    }
}

impl AppConfig {
    /// Builds the effective config: the file at `path` (or defaults when
    /// `None`), then environment overrides.
    ///
    /// # Errors
    /// Returns an `AnalyzerError` if the file can't be read or any value is
    /// invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };
        base.with_overrides(|key| env::var(key).ok())
    }

    /// Reads a JSON config file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| AnalyzerError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| AnalyzerError::InvalidConfig(format!("invalid JSON: {e}")))?;
        config.validate()
    }

    /// Applies overrides from `lookup`, usually the process environment.
    ///
    /// # Arguments
    /// * `lookup` - Returns the value for an env var name, if set.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.port = port.trim().parse().map_err(|_| {
                AnalyzerError::InvalidConfig(format!("{ENV_PORT}: '{port}' is not a port"))
            })?;
        }
        if let Some(path) = lookup(ENV_MODEL) {
            self.model_path = path.into();
        }
        if let Some(path) = lookup(ENV_BACKGROUND) {
            self.background_path = path.into();
        }
        if let Some(path) = lookup(ENV_HISTORY) {
            self.history_path = path.into();
        }
        self.validate()
    }

    /// The `host:port` pair to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn validate(self) -> Result<Self> {
        if self.host.trim().is_empty() {
            return Err(AnalyzerError::InvalidConfig("host must not be empty".into()));
        }
        if self.history_path.as_os_str().is_empty() {
            return Err(AnalyzerError::InvalidConfig(
                "history_path must not be empty".into(),
            ));
        }
        let name = &self.download_name;
        if name.is_empty() || name.contains(&['"', '/', '\\', '\r', '\n'][..]) {
            return Err(AnalyzerError::InvalidConfig(format!(
                "download_name '{name}' is not a plain file name"
            )));
        }
        Ok(self)
    }
}
