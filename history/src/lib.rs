//! Append-only log of predictions, persisted as a two-column CSV file.

mod error;
mod record;
mod store;
mod table;

pub use error::{HistoryError, Result};
pub use record::PredictionRecord;
pub use store::HistoryStore;
pub use table::{HEADER, HistoryLog};
