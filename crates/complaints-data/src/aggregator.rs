//! Grouping of accepted complaints by product and year.

use std::collections::BTreeMap;

use complaints_core::models::{Complaint, GroupKey, SummaryRow};
use complaints_core::time_utils::year_key;

use crate::stats::StatsGenerator;

// ── ComplaintAggregator ───────────────────────────────────────────────────────

/// Company names per `(product, year)`, in arrival order.
///
/// Keys live in a `BTreeMap`, so iteration is already in report order
/// (product, then year).
#[derive(Debug, Clone, Default)]
pub struct ComplaintAggregator {
    groups: BTreeMap<GroupKey, Vec<String>>,
}

impl ComplaintAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the complaint's company to the group for its lowercased
    /// product and received year, creating the group when absent.
    pub fn ingest(&mut self, complaint: &Complaint) {
        let key = GroupKey::new(
            complaint.product.to_lowercase(),
            year_key(complaint.date_received),
        );
        self.groups
            .entry(key)
            .or_default()
            .push(complaint.company.clone());
    }

    /// Every key observed so far, ascending.
    pub fn all_keys(&self) -> impl Iterator<Item = &GroupKey> {
        self.groups.keys()
    }

    /// Companies recorded for `key`, in arrival order.
    pub fn group(&self, key: &GroupKey) -> Option<&[String]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// `(key, companies)` pairs, ascending by key.
    pub fn groups(&self) -> impl Iterator<Item = (&GroupKey, &[String])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Number of distinct groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of complaints ingested across all groups.
    pub fn total_complaints(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Summary rows in report order. See [`StatsGenerator::generate`].
    pub fn generate(&self) -> Vec<SummaryRow> {
        StatsGenerator::generate(self)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
