//! Structural completeness checks on an extracted document.
//!
//! A missing reporting date cannot reach this point: strategies fail with
//! `DateNotFound` and `ParsedDocument` holds a non-optional date. Null prices
//! and returns are legal since some carriers publish returns only.

use std::collections::HashSet;

use kaiji_core::ParsedDocument;

use crate::error::{ValidationError, ValidationFailure};
use crate::parsers::catalog_for;

pub fn validate(doc: &ParsedDocument) -> Result<(), ValidationError> {
    let catalog = catalog_for(doc.carrier_code);
    let fail = |failure: ValidationFailure| {
        let found: Vec<String> = doc.accounts.iter().map(|a| a.account_code.clone()).collect();
        let missing = catalog
            .iter()
            .filter(|e| !found.iter().any(|c| c.as_str() == e.code))
            .map(|e| e.code.to_string())
            .collect();
        ValidationError {
            carrier: doc.carrier_code,
            failure,
            found,
            missing,
        }
    };

    if doc.accounts.is_empty() {
        return Err(fail(ValidationFailure::NoAccounts));
    }

    let mut seen = HashSet::new();
    for account in &doc.accounts {
        let code = &account.account_code;
        if account.account_name.trim().is_empty() {
            return Err(fail(ValidationFailure::EmptyAccountName { code: code.clone() }));
        }
        if !catalog.iter().any(|e| e.code == code.as_str()) {
            return Err(fail(ValidationFailure::UnknownAccountCode { code: code.clone() }));
        }
        if !seen.insert(code.as_str()) {
            return Err(fail(ValidationFailure::DuplicateAccountCode { code: code.clone() }));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use kaiji_core::{CarrierCode, FundRecord};

    fn doc(accounts: Vec<FundRecord>) -> ParsedDocument {
        ParsedDocument {
            carrier_code: CarrierCode::GibraltarLife,
            reporting_date: NaiveDate::from_ymd_opt(2025, 8, 31).unwrap(),
            accounts,
        }
    }

    fn record(index: usize) -> FundRecord {
        FundRecord::for_entry(&catalog_for(CarrierCode::GibraltarLife)[index])
    }

    #[test]
    fn test_empty_accounts_rejected_with_missing_list() {
        let err = validate(&doc(vec![])).unwrap_err();
        assert_eq!(err.failure, ValidationFailure::NoAccounts);
        assert!(err.found.is_empty());
        assert_eq!(err.missing.len(), 7);
        assert_eq!(err.carrier, CarrierCode::GibraltarLife);
    }

    #[test]
    fn test_null_values_are_accepted() {
        assert!(validate(&doc(vec![record(0), record(3)])).is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut r = record(0);
        r.account_name = " ".to_string();
        let err = validate(&doc(vec![r])).unwrap_err();
        assert!(matches!(err.failure, ValidationFailure::EmptyAccountName { .. }));
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let err = validate(&doc(vec![record(1), record(1)])).unwrap_err();
        assert_eq!(
            err.failure,
            ValidationFailure::DuplicateAccountCode {
                code: "gib-world-equity".to_string()
            }
        );
    }

    #[test]
    fn test_foreign_code_rejected() {
        let mut r = record(0);
        r.account_code = "sony-equity".to_string();
        let err = validate(&doc(vec![r])).unwrap_err();
        assert!(matches!(err.failure, ValidationFailure::UnknownAccountCode { .. }));
        assert!(err.to_string().contains("gibraltar_life"));
    }
}
