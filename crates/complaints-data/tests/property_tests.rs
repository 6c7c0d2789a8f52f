//! Property tests for the grouping and summary invariants.
//!
//! Uses proptest to verify:
//! 1. Grouping: each group holds exactly the accepted companies for its key
//! 2. Count identities: totals, distinct counts and percent bounds agree
//! 3. Ordering: rows are strictly ascending by (product, year)
//! 4. Rejection: rejected rows never reach a group

use proptest::prelude::*;
use std::collections::{BTreeMap, HashSet};

use complaints_core::calculations::ConcentrationCalculator;
use complaints_core::formatting::format_row;
use complaints_core::models::{GroupKey, RawRecord};
use complaints_data::aggregator::ComplaintAggregator;
use complaints_data::analysis::aggregate_records;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_product() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "Debt collection",
        "DEBT COLLECTION",
        "Mortgage",
        "Credit reporting, credit repair services, or other personal consumer reports",
        "Student loan",
        "",
    ])
}

fn arb_company() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "TRANSWORLD SYSTEMS INC",
        "Equifax, Inc.",
        "EQUIFAX, INC.",
        "Wells Fargo",
        "A",
        "",
    ])
}

/// `None` stands for an unparseable date.
fn arb_date() -> impl Strategy<Value = Option<(u32, u32, u32)>> {
    prop::option::weighted(0.85, (2011u32..2021, 1u32..=12, 1u32..=28))
}

type Row = (Option<(u32, u32, u32)>, &'static str, &'static str);

fn arb_rows() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec((arb_date(), arb_product(), arb_company()), 0..60)
}

// ── Helpers ──────────────────────────────────────────────────────────

fn to_record(line: u64, (date, product, company): &Row) -> RawRecord {
    let date = match date {
        Some((y, m, d)) => format!("{y:04}-{m:02}-{d:02}"),
        None => "2019-13-40".to_string(),
    };
    RawRecord::from_pairs(
        line,
        &[
            ("Date received", date.as_str()),
            ("Product", *product),
            ("Issue", "Incorrect information on your report"),
            ("Company", *company),
        ],
    )
}

/// Expected groups computed straight from the generated rows.
fn expected_groups(rows: &[Row]) -> BTreeMap<GroupKey, Vec<String>> {
    let mut groups: BTreeMap<GroupKey, Vec<String>> = BTreeMap::new();
    for (date, product, company) in rows {
        let Some((year, _, _)) = date else { continue };
        if product.is_empty() || company.is_empty() {
            continue;
        }
        groups
            .entry(GroupKey::new(product.to_lowercase(), format!("{year:04}")))
            .or_default()
            .push(company.to_string());
    }
    groups
}

fn run_rows(rows: &[Row]) -> (ComplaintAggregator, u64) {
    let records = rows
        .iter()
        .enumerate()
        .map(|(i, row)| -> complaints_core::Result<RawRecord> { Ok(to_record(i as u64 + 2, row)) });
    let (agg, report) = aggregate_records(records).unwrap();
    (agg, report.records_accepted)
}

// ── 1. Grouping ──────────────────────────────────────────────────────

proptest! {
    /// Every group holds exactly the accepted companies for its key, in
    /// arrival order.
    #[test]
    fn groups_match_accepted_records(rows in arb_rows()) {
        let (agg, _) = run_rows(&rows);
        let expected = expected_groups(&rows);

        prop_assert_eq!(agg.len(), expected.len());
        for (key, companies) in &expected {
            prop_assert_eq!(agg.group(key), Some(companies.as_slice()));
        }
    }
}

// ── 2. Count identities ──────────────────────────────────────────────

proptest! {
    /// totals equal group sizes, unique counts equal distinct names and the
    /// percentage stays inside its bounds.
    #[test]
    fn summary_counts_are_consistent(rows in arb_rows()) {
        let (agg, _) = run_rows(&rows);
        let expected = expected_groups(&rows);

        for row in agg.generate() {
            let key = GroupKey::new(row.product.clone(), row.year.clone());
            let companies = &expected[&key];
            let distinct: HashSet<&String> = companies.iter().collect();

            prop_assert_eq!(row.total_complaints, companies.len() as u64);
            prop_assert_eq!(row.unique_companies, distinct.len() as u64);
            prop_assert!(row.unique_companies <= row.total_complaints);

            let floor = ConcentrationCalculator::highest_percent(1, row.total_complaints).unwrap();
            prop_assert!(row.highest_percent >= floor);
            prop_assert!(row.highest_percent <= 100);
        }
    }
}

// ── 3. Ordering ──────────────────────────────────────────────────────

proptest! {
    /// Rows are strictly ascending by (product, year): sorted, no duplicates.
    #[test]
    fn rows_are_strictly_ordered(rows in arb_rows()) {
        let (agg, _) = run_rows(&rows);
        let summary = agg.generate();

        for pair in summary.windows(2) {
            let a = (&pair[0].product, &pair[0].year);
            let b = (&pair[1].product, &pair[1].year);
            prop_assert!(a < b, "{:?} should sort before {:?}", a, b);
        }
    }
}

// ── 4. Rejection ─────────────────────────────────────────────────────

proptest! {
    /// Only rows with a valid date, product and company are counted.
    #[test]
    fn rejected_rows_are_not_counted(rows in arb_rows()) {
        let (agg, accepted) = run_rows(&rows);
        let expected: usize = expected_groups(&rows).values().map(Vec::len).sum();

        prop_assert_eq!(accepted, expected as u64);
        prop_assert_eq!(agg.total_complaints(), expected);
    }
}

// ── 5. Quoting ───────────────────────────────────────────────────────

proptest! {
    /// A formatted line is quoted exactly when the product has a comma.
    #[test]
    fn product_quoted_only_with_comma(rows in arb_rows()) {
        let (agg, _) = run_rows(&rows);
        for row in agg.generate() {
            let line = format_row(&row);
            prop_assert_eq!(line.starts_with('"'), row.product.contains(','));
            let suffix = format!(",{}", row.highest_percent);
            prop_assert!(line.ends_with(&suffix));
        }
    }
}
