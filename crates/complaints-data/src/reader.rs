//! CSV loading for the complaint report.
//!
//! Streams rows of a consumer-complaint export and turns each one into a
//! [`RawRecord`] keyed by the header's column names.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::rc::Rc;

use complaints_core::error::{ComplaintError, Result};
use complaints_core::models::{column_index, ColumnIndex, RawRecord, REQUIRED_COLUMNS};
use tracing::debug;

// ── Public API ────────────────────────────────────────────────────────────────

/// Lazy, single-pass source of [`RawRecord`]s.
///
/// Each item is either a record or a row-level error. A row whose field count
/// differs from the header comes back as [`ComplaintError::MalformedRow`] and
/// the iterator keeps going with the next row.
pub struct ComplaintReader<R> {
    records: csv::StringRecordsIntoIter<R>,
    columns: ColumnIndex,
}

impl ComplaintReader<File> {
    /// Open the CSV file at `path` and read its header row.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| ComplaintError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Opened complaint file {}", path.display());
        Self::from_reader(file)
    }
}

impl<R: Read> ComplaintReader<R> {
    /// Wrap any byte stream. The first row must be the header and must name
    /// every column in [`REQUIRED_COLUMNS`].
    pub fn from_reader(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = csv_reader.headers().map_err(convert_csv_error)?.clone();
        if headers.is_empty() {
            return Err(ComplaintError::MissingHeader);
        }
        for required in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == required) {
                return Err(ComplaintError::MissingColumn(required.to_string()));
            }
        }

        Ok(Self {
            columns: column_index(headers.iter()),
            records: csv_reader.into_records(),
        })
    }

    /// Number of distinct column names in the header.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

impl<R: Read> Iterator for ComplaintReader<R> {
    type Item = Result<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.records.next()?;
        Some(item.map_err(convert_csv_error).map(|record| {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let values = record.iter().map(str::to_string).collect();
            RawRecord::new(line, Rc::clone(&self.columns), values)
        }))
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// I/O failures stay fatal; anything else is a problem with one row.
fn convert_csv_error(err: csv::Error) -> ComplaintError {
    if err.is_io_error() {
        return match err.into_kind() {
            csv::ErrorKind::Io(io_err) => ComplaintError::Io(io_err),
            other => ComplaintError::MalformedRow {
                line: 0,
                message: format!("{:?}", other),
            },
        };
    }

    let line = err.position().map(|p| p.line()).unwrap_or_default();
    ComplaintError::MalformedRow {
        line,
        message: err.to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
