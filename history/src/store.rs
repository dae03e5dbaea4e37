use std::{
    ffi::OsString,
    fs::{self, File},
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use crate::{HistoryError, HistoryLog, PredictionRecord, Result};

/// Handle to the CSV file backing the prediction history.
///
/// Every mutation rewrites the whole file through a sibling temp file and a
/// rename, so readers never observe a partial table. There is no locking:
/// two processes sharing a file race on read-modify-write and the last
/// rewrite wins.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Creates a new `HistoryStore`. Nothing is touched on disk until the
    /// first mutation.
    ///
    /// # Arguments
    /// * `path` - Location of the CSV file.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the current log. A missing file is an empty history.
    ///
    /// # Returns
    /// The stored log or a `HistoryError` if the file exists but can't be read.
    pub fn load(&self) -> Result<HistoryLog> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no history at {}, starting empty", self.path.display());
                return Ok(HistoryLog::new());
            }
            Err(e) => return Err(self.io_err(e)),
        };

        HistoryLog::from_csv(BufReader::new(file))
    }

    /// Appends `record` at the end of the log and persists the whole table.
    ///
    /// # Arguments
    /// * `record` - The prediction to store.
    ///
    /// # Returns
    /// The log as persisted, including the new record.
    pub fn append(&self, record: PredictionRecord) -> Result<HistoryLog> {
        let mut history = self.load()?;
        history.push(record);
        self.persist(&history)?;

        log::info!(
            hours = record.study_hours,
            score = record.predicted_score;
            "appended prediction, {} record(s) stored",
            history.len()
        );
        Ok(history)
    }

    /// Removes every record, keeping the header row.
    pub fn clear(&self) -> Result<()> {
        self.persist(&HistoryLog::new())?;
        log::info!("cleared history at {}", self.path.display());
        Ok(())
    }

    /// Serializes the current log as downloadable CSV bytes.
    pub fn export(&self) -> Result<Vec<u8>> {
        self.load()?.to_csv()
    }

    fn persist(&self, history: &HistoryLog) -> Result<()> {
        let bytes = history.to_csv()?;
        let tmp = self.tmp_path();

        fs::write(&tmp, bytes).map_err(|e| self.io_err(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            self.io_err(e)
        })
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("history"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_err(&self, source: io::Error) -> HistoryError {
        HistoryError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
