use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::rc::Rc;

/// Column holding the date the complaint was received (`YYYY-MM-DD`).
pub const COL_DATE_RECEIVED: &str = "Date received";
/// Column holding the financial product name.
pub const COL_PRODUCT: &str = "Product";
/// Column holding the company the complaint was filed against.
pub const COL_COMPANY: &str = "Company";

/// Columns every input file must carry.
pub const REQUIRED_COLUMNS: [&str; 3] = [COL_DATE_RECEIVED, COL_PRODUCT, COL_COMPANY];

/// Shared mapping from column name to field position, built once from the
/// header row.
pub type ColumnIndex = Rc<HashMap<String, usize>>;

/// Build a [`ColumnIndex`] from header names.
///
/// When a header name repeats, the first occurrence wins.
pub fn column_index<I, S>(headers: I) -> ColumnIndex
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut map = HashMap::new();
    for (pos, name) in headers.into_iter().enumerate() {
        map.entry(name.into()).or_insert(pos);
    }
    Rc::new(map)
}

/// One input row, keyed by the header's column names.
#[derive(Debug, Clone)]
pub struct RawRecord {
    /// 1-based line number of the row in the input, for diagnostics.
    pub line: u64,
    columns: ColumnIndex,
    values: Vec<String>,
}

impl RawRecord {
    pub fn new(line: u64, columns: ColumnIndex, values: Vec<String>) -> Self {
        Self {
            line,
            columns,
            values,
        }
    }

    /// Build a standalone record from `(column, value)` pairs.
    pub fn from_pairs(line: u64, pairs: &[(&str, &str)]) -> Self {
        let columns = column_index(pairs.iter().map(|(k, _)| *k));
        let values = pairs.iter().map(|(_, v)| v.to_string()).collect();
        Self::new(line, columns, values)
    }

    /// Value of `column`, or `None` when the header has no such column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .get(column)
            .and_then(|&pos| self.values.get(pos))
            .map(String::as_str)
    }

    /// Value of `column`, treating an absent column as empty.
    pub fn field(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }
}

/// A record that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complaint {
    pub date_received: NaiveDate,
    /// Product as submitted (not yet lowercased).
    pub product: String,
    /// Company as submitted, case preserved.
    pub company: String,
}

/// `(product, year)` bucket.
///
/// The derived ordering compares `product` first, then `year`. Years are
/// always four digits so string order equals numeric order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupKey {
    /// Lowercased product name.
    pub product: String,
    /// Four-digit year.
    pub year: String,
}

impl GroupKey {
    pub fn new(product: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            year: year.into(),
        }
    }
}

/// Summary statistics for one [`GroupKey`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub product: String,
    pub year: String,
    /// Number of accepted complaints in the group.
    pub total_complaints: u64,
    /// Number of distinct companies receiving at least one complaint.
    pub unique_companies: u64,
    /// Rounded share (0–100) of the most-complained-about company.
    pub highest_percent: u64,
}
