//! Per-row acceptance rules.

use complaints_core::error::ComplaintError;
use complaints_core::models::{Complaint, RawRecord, COL_COMPANY, COL_DATE_RECEIVED, COL_PRODUCT};
use complaints_core::time_utils::parse_date_received;
use tracing::warn;

/// Stateless gate between the record source and the aggregator.
///
/// A record is accepted only when `Date received` parses as `YYYY-MM-DD`
/// and neither `Product` nor `Company` is empty. Both checks always run and
/// each one logs its own warning, so a row failing both produces two
/// diagnostics.
pub struct RecordValidator;

impl RecordValidator {
    /// `true` when the record would be accepted.
    pub fn accept(record: &RawRecord) -> bool {
        Self::validate(record).is_ok()
    }

    /// Validate `record`, returning the accepted [`Complaint`] or every
    /// reason it was rejected. The date reason, when present, comes first.
    pub fn validate(record: &RawRecord) -> Result<Complaint, Vec<ComplaintError>> {
        let mut reasons = Vec::new();

        let date = match parse_date_received(record.field(COL_DATE_RECEIVED)) {
            Ok(date) => Some(date),
            Err(e) => {
                warn!("Skipping row {} because Date received: {}", record.line, e);
                reasons.push(e);
                None
            }
        };

        let product = record.field(COL_PRODUCT);
        let company = record.field(COL_COMPANY);
        let mut missing = Vec::new();
        if product.is_empty() {
            missing.push(COL_PRODUCT);
        }
        if company.is_empty() {
            missing.push(COL_COMPANY);
        }
        if !missing.is_empty() {
            warn!(
                "Skipping row {} because of missing values in: {}",
                record.line,
                missing.join(", ")
            );
            reasons.extend(missing.into_iter().map(ComplaintError::MissingField));
        }

        match date {
            Some(date_received) if reasons.is_empty() => Ok(Complaint {
                date_received,
                product: product.to_string(),
                company: company.to_string(),
            }),
            _ => Err(reasons),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(date: &str, product: &str, company: &str) -> RawRecord {
        RawRecord::from_pairs(
            2,
            &[
                ("Date received", date),
                ("Product", product),
                ("Sub-product", "I do not know"),
                ("Company", company),
            ],
        )
    }

    #[test]
    fn test_valid_record_is_accepted() {
        let rec = record("2019-09-24", "Debt collection", "TRANSWORLD SYSTEMS INC");
        assert!(RecordValidator::accept(&rec));

        let complaint = RecordValidator::validate(&rec).unwrap();
        assert_eq!(
            complaint.date_received,
            NaiveDate::from_ymd_opt(2019, 9, 24).unwrap()
        );
        assert_eq!(complaint.product, "Debt collection");
        assert_eq!(complaint.company, "TRANSWORLD SYSTEMS INC");
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let rec = record("2019-13-40", "Debt collection", "ACME");
        assert!(!RecordValidator::accept(&rec));

        let reasons = RecordValidator::validate(&rec).unwrap_err();
        assert_eq!(reasons.len(), 1);
        assert!(matches!(reasons[0], ComplaintError::InvalidDate(_)));
    }

    #[test]
    fn test_empty_product_is_rejected() {
        let reasons = RecordValidator::validate(&record("2019-01-01", "", "ACME")).unwrap_err();
        assert!(matches!(reasons[..], [ComplaintError::MissingField("Product")]));
    }

    #[test]
    fn test_empty_company_is_rejected() {
        let reasons = RecordValidator::validate(&record("2019-01-01", "Mortgage", "")).unwrap_err();
        assert!(matches!(reasons[..], [ComplaintError::MissingField("Company")]));
    }

    #[test]
    fn test_both_checks_run_when_date_is_bad() {
        let reasons = RecordValidator::validate(&record("not-a-date", "", "")).unwrap_err();
        assert_eq!(reasons.len(), 3);
        assert!(matches!(reasons[0], ComplaintError::InvalidDate(_)));
        assert!(matches!(reasons[1], ComplaintError::MissingField("Product")));
        assert!(matches!(reasons[2], ComplaintError::MissingField("Company")));
        assert!(reasons.iter().all(ComplaintError::is_recoverable));
    }

    #[test]
    fn test_missing_columns_count_as_empty() {
        let rec = RawRecord::from_pairs(5, &[("Date received", "2019-01-01")]);
        let reasons = RecordValidator::validate(&rec).unwrap_err();
        assert_eq!(reasons.len(), 2);
    }

    #[test]
    fn test_whitespace_company_is_not_empty() {
        assert!(RecordValidator::accept(&record("2019-01-01", "Mortgage", " ")));
    }
}
