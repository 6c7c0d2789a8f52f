//! Summary statistics per complaint group.

use complaints_core::calculations::ConcentrationCalculator;
use complaints_core::models::{GroupKey, SummaryRow};

use crate::aggregator::ComplaintAggregator;

/// Turns grouped company lists into [`SummaryRow`]s.
pub struct StatsGenerator;

impl StatsGenerator {
    /// One row per group, ordered by product then year.
    ///
    /// The order is fully determined by the keys; the numeric columns play
    /// no part in it.
    pub fn generate(aggregator: &ComplaintAggregator) -> Vec<SummaryRow> {
        aggregator
            .groups()
            .filter_map(|(key, companies)| Self::summarize(key, companies))
            .collect()
    }

    /// Statistics for a single group. Returns `None` for an empty group,
    /// which the aggregator never produces.
    pub fn summarize(key: &GroupKey, companies: &[String]) -> Option<SummaryRow> {
        let freq = ConcentrationCalculator::company_frequency(companies);
        let total = companies.len() as u64;
        let max_count = freq.values().copied().max()?;

        Some(SummaryRow {
            product: key.product.clone(),
            year: key.year.clone(),
            total_complaints: total,
            unique_companies: freq.len() as u64,
            highest_percent: ConcentrationCalculator::highest_percent(max_count, total)?,
        })
    }
}
