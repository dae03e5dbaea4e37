use std::{error::Error, fmt, io, path::PathBuf};

/// The history module's result type.
pub type Result<T> = std::result::Result<T, HistoryError>;

/// History store failures.
#[derive(Debug)]
pub enum HistoryError {
    /// Reading or replacing the backing file failed.
    Io { path: PathBuf, source: io::Error },
    /// A row could not be encoded or decoded.
    Csv(csv::Error),
    /// The backing file has a header other than the expected two columns.
    Schema { found: Vec<String> },
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "history file '{}': {source}", path.display())
            }
            Self::Csv(e) => write!(f, "history csv error: {e}"),
            Self::Schema { found } => write!(
                f,
                "unexpected history header [{}], expected [{}]",
                found.join(", "),
                crate::HEADER.join(", ")
            ),
        }
    }
}

impl Error for HistoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv(e) => Some(e),
            Self::Schema { .. } => None,
        }
    }
}

impl From<csv::Error> for HistoryError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}
