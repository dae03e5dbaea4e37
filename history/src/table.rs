use std::io::Read;

use csv::{ReaderBuilder, Trim, WriterBuilder};
use serde::Serialize;

use crate::{HistoryError, PredictionRecord, Result};

/// Column names of the persisted and exported table.
pub const HEADER: [&str; 2] = ["Study Hours", "Predicted Marks"];

/// Every prediction made so far, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HistoryLog {
    records: Vec<PredictionRecord>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record after the most recent one.
    pub fn push(&mut self, record: PredictionRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[PredictionRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PredictionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&PredictionRecord> {
        self.records.last()
    }

    /// Parses a log from CSV text.
    ///
    /// Empty input yields an empty log. Anything else must start with the
    /// `HEADER` row.
    ///
    /// # Arguments
    /// * `rdr` - The CSV source.
    ///
    /// # Returns
    /// The parsed log or a `HistoryError` on malformed content.
    pub fn from_csv<R: Read>(rdr: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(rdr);

        let headers = reader.headers()?;
        if headers.is_empty() {
            return Ok(Self::new());
        }
        if !headers.iter().eq(HEADER) {
            return Err(HistoryError::Schema {
                found: headers.iter().map(str::to_string).collect(),
            });
        }

        let mut log = Self::new();
        for row in reader.records() {
            log.push(row?.deserialize(None)?);
        }

        Ok(log)
    }

    /// Serializes the log as CSV. The header row is always written, so an
    /// empty log still carries the schema.
    pub fn to_csv(&self) -> Result<Vec<u8>> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());

        writer.write_record(HEADER)?;
        for record in &self.records {
            writer.serialize(record)?;
        }

        writer
            .into_inner()
            .map_err(|e| HistoryError::Csv(csv::Error::from(e.into_error())))
    }
}

impl<'a> IntoIterator for &'a HistoryLog {
    type Item = &'a PredictionRecord;
    type IntoIter = std::slice::Iter<'a, PredictionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<PredictionRecord> for HistoryLog {
    fn from_iter<I: IntoIterator<Item = PredictionRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_log_still_writes_the_header() {
        let csv = HistoryLog::new().to_csv().unwrap();
        assert_eq!(String::from_utf8(csv).unwrap(), "Study Hours,Predicted Marks\n");
    }

    #[test]
    fn writes_one_row_per_record() {
        let log: HistoryLog = [
            PredictionRecord::new(5.0, 70.13),
            PredictionRecord::new(8.0, 81.94),
        ]
        .into_iter()
        .collect();

        let csv = String::from_utf8(log.to_csv().unwrap()).unwrap();
        assert_eq!(
            csv,
            "Study Hours,Predicted Marks\n5.0,70.13\n8.0,81.94\n"
        );
    }

    #[test]
    fn parses_what_it_writes() {
        let log: HistoryLog = [
            PredictionRecord::new(0.0, 50.45),
            PredictionRecord::new(24.0, 100.0),
        ]
        .into_iter()
        .collect();

        let parsed = HistoryLog::from_csv(log.to_csv().unwrap().as_slice()).unwrap();
        assert_eq!(parsed, log);
    }

    #[test]
    fn accepts_integer_hours_written_by_other_tools() {
        let csv = "Study Hours,Predicted Marks\n5,70.13\n";
        let log = HistoryLog::from_csv(csv.as_bytes()).unwrap();
        assert_eq!(log.records(), &[PredictionRecord::new(5.0, 70.13)]);
    }

    #[test]
    fn empty_input_is_an_empty_log() {
        let log = HistoryLog::from_csv("".as_bytes()).unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn foreign_header_is_rejected() {
        let err = HistoryLog::from_csv("hours,marks\n1,2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, HistoryError::Schema { .. }));
    }

    #[test]
    fn garbage_rows_are_rejected() {
        let csv = "Study Hours,Predicted Marks\nfive,70\n";
        let err = HistoryLog::from_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, HistoryError::Csv(_)));
    }
}
