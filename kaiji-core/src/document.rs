//! Parsed document and soft-warning types

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::carrier::CarrierCode;
use crate::fund::{CatalogEntry, FundRecord};

/// Structured result for one disclosure document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDocument {
    pub carrier_code: CarrierCode,
    /// As-of date; month-only notations are normalized to month end
    pub reporting_date: NaiveDate,
    /// Records in the carrier's catalog order
    pub accounts: Vec<FundRecord>,
}

impl ParsedDocument {
    pub fn account(&self, code: &str) -> Option<&FundRecord> {
        self.accounts.iter().find(|a| a.account_code == code)
    }

    pub fn account_codes(&self) -> Vec<&str> {
        self.accounts.iter().map(|a| a.account_code.as_str()).collect()
    }
}

/// Why a catalog entry produced no record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum WarningKind {
    /// Coverage gap: no candidate name appears in the text
    NotFound,
    /// A concatenated run could not be split into enough parts
    NumericReconstruction {
        run: String,
        expected_parts: usize,
        found_parts: usize,
    },
    /// The name matched but neither its line nor the next matched the layout
    LayoutMismatch { line: String },
}

/// Entry-scoped problem recovered during extraction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionWarning {
    pub account_code: String,
    pub account_name: String,
    #[serde(flatten)]
    pub kind: WarningKind,
}

impl ExtractionWarning {
    pub fn new(entry: &CatalogEntry, kind: WarningKind) -> Self {
        Self {
            account_code: entry.code.to_string(),
            account_name: entry.name.to_string(),
            kind,
        }
    }

    pub fn is_coverage_gap(&self) -> bool {
        matches!(self.kind, WarningKind::NotFound)
    }
}

impl fmt::Display for ExtractionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WarningKind::NotFound => {
                write!(f, "{} ({}): not found in document", self.account_name, self.account_code)
            }
            WarningKind::NumericReconstruction {
                run,
                expected_parts,
                found_parts,
            } => write!(
                f,
                "{} ({}): could not split '{}' (expected {} parts, found {})",
                self.account_name, self.account_code, run, expected_parts, found_parts
            ),
            WarningKind::LayoutMismatch { line } => write!(
                f,
                "{} ({}): values not recognized in '{}'",
                self.account_name, self.account_code, line
            ),
        }
    }
}

/// Successful parse: a validated document plus the warnings recovered on the way
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParseOutcome {
    pub document: ParsedDocument,
    pub warnings: Vec<ExtractionWarning>,
}

impl ParseOutcome {
    pub fn into_document(self) -> ParsedDocument {
        self.document
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Codes of catalog entries that produced no record
    pub fn missing_codes(&self) -> Vec<&str> {
        self.warnings.iter().map(|w| w.account_code.as_str()).collect()
    }
}
