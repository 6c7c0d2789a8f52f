//! Main report pipeline.
//!
//! Reads the complaint CSV, validates and groups each row, derives summary
//! rows and writes the formatted report, returning a [`RunReport`].

use std::path::Path;

use complaints_core::error::{ComplaintError, Result};
use complaints_core::formatting::format_rows;
use complaints_core::models::RawRecord;
use complaints_core::settings::PipelineConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::aggregator::ComplaintAggregator;
use crate::reader::ComplaintReader;
use crate::validator::RecordValidator;
use crate::writer::write_output;

// ── Public types ──────────────────────────────────────────────────────────────

/// Counters gathered over one pipeline run.
///
/// `records_accepted + rejected_bad_date + rejected_missing_fields +
/// malformed_rows == records_read`. A row with a bad date and empty fields
/// is counted once, under `rejected_bad_date`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Data rows pulled from the source, including malformed ones.
    pub records_read: u64,
    /// Rows folded into a group.
    pub records_accepted: u64,
    /// Rows whose `Date received` did not parse.
    pub rejected_bad_date: u64,
    /// Rows with a valid date but an empty `Product` or `Company`.
    pub rejected_missing_fields: u64,
    /// Rows the CSV reader could not split into the header's fields.
    pub malformed_rows: u64,
    /// Number of `(product, year)` groups in the report.
    pub groups: u64,
}

impl RunReport {
    /// Rows that did not make it into any group.
    pub fn records_skipped(&self) -> u64 {
        self.rejected_bad_date + self.rejected_missing_fields + self.malformed_rows
    }

    /// Write the report as pretty-printed JSON.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        write_output(path, &json)
    }
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Fold a stream of raw records into an aggregator.
///
/// Row-level errors (malformed rows, failed validation) are logged, counted
/// and skipped. Any other error stops the fold and is returned.
pub fn aggregate_records<I>(records: I) -> Result<(ComplaintAggregator, RunReport)>
where
    I: IntoIterator<Item = Result<RawRecord>>,
{
    let mut aggregator = ComplaintAggregator::new();
    let mut report = RunReport::default();

    for item in records {
        let record = match item {
            Ok(record) => record,
            Err(e) if e.is_recoverable() => {
                warn!("Skipping row: {}", e);
                report.records_read += 1;
                report.malformed_rows += 1;
                continue;
            }
            Err(e) => return Err(e),
        };
        report.records_read += 1;

        match RecordValidator::validate(&record) {
            Ok(complaint) => {
                aggregator.ingest(&complaint);
                report.records_accepted += 1;
            }
            Err(reasons) => {
                let bad_date = reasons
                    .iter()
                    .any(|r| matches!(r, ComplaintError::InvalidDate(_)));
                if bad_date {
                    report.rejected_bad_date += 1;
                } else {
                    report.rejected_missing_fields += 1;
                }
            }
        }
    }

    report.groups = aggregator.len() as u64;
    Ok((aggregator, report))
}

/// Run the full pipeline.
///
/// 1. Open `config.input` and check its header.
/// 2. Validate and group every row.
/// 3. Generate summary rows in product/year order.
/// 4. Format them and write `config.output` atomically.
///
/// Only failing to open the input, a mid-stream read failure, or failing to
/// write the output returns an error.
pub fn run(config: &PipelineConfig) -> Result<RunReport> {
    let load_start = std::time::Instant::now();
    let reader = ComplaintReader::open(&config.input)?;
    let (aggregator, report) = aggregate_records(reader)?;
    debug!(
        "Read {} rows ({} accepted, {} skipped) into {} groups in {:.3}s",
        report.records_read,
        report.records_accepted,
        report.records_skipped(),
        report.groups,
        load_start.elapsed().as_secs_f64()
    );

    let rows = aggregator.generate();
    write_output(&config.output, &format_rows(&rows))?;

    if report.records_skipped() > 0 {
        info!(
            "Skipped {} of {} rows ({} bad date, {} missing fields, {} malformed)",
            report.records_skipped(),
            report.records_read,
            report.rejected_bad_date,
            report.rejected_missing_fields,
            report.malformed_rows
        );
    }

    Ok(report)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
