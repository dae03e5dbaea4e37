use std::{error::Error, fmt, io, path::PathBuf};

/// The model crate's result type.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Failures while loading a regression artifact or evaluating it.
#[derive(Debug)]
pub enum ModelError {
    /// The artifact file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The artifact file is not a valid artifact document.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The fitted parameters don't match the feature layout.
    FeatureMismatch { expected: usize, got: usize },
    /// A polynomial artifact declared a degree of zero.
    ZeroDegree,
    /// The regression produced NaN or an infinity.
    NonFinite(f64),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read model artifact '{}': {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid model artifact '{}': {source}", path.display())
            }
            Self::FeatureMismatch { expected, got } => write!(
                f,
                "coefficient count mismatch: expected {expected}, got {got}"
            ),
            Self::ZeroDegree => write!(f, "polynomial degree must be greater than zero"),
            Self::NonFinite(v) => write!(f, "model produced a non-finite prediction: {v}"),
        }
    }
}

impl Error for ModelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}
