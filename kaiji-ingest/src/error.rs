//! Error types for the extraction engine

use std::fmt;

use kaiji_core::{CarrierCode, WarningKind};
use thiserror::Error;

/// Document-level failures surfaced by `parse_document`
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// No detector predicate matched
    #[error("carrier not recognized: no known disclosure markers in text")]
    CarrierUnrecognized,

    /// Neither the full nor the month-only date notation matched
    #[error("{carrier}: no reporting date found")]
    DateNotFound { carrier: CarrierCode },

    /// Post-extraction completeness check failed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A layout pattern failed to compile
    #[error("layout pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

/// A concatenated number run did not split into the expected parts.
///
/// Scoped to one catalog entry: strategies downgrade it to a warning and
/// carry on with the remaining entries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "cannot split '{run}' into {expected} values: need {} parts, found {found}",
    .expected + 1
)]
pub struct ReconstructionError {
    pub run: String,
    /// Number of sub-values requested
    pub expected: usize,
    /// Number of `.`-separated parts present
    pub found: usize,
}

impl From<ReconstructionError> for WarningKind {
    fn from(e: ReconstructionError) -> Self {
        WarningKind::NumericReconstruction {
            run: e.run,
            expected_parts: e.expected + 1,
            found_parts: e.found,
        }
    }
}

/// Which completeness rule failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    NoAccounts,
    EmptyAccountName { code: String },
    DuplicateAccountCode { code: String },
    UnknownAccountCode { code: String },
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::NoAccounts => f.write_str("no accounts extracted"),
            ValidationFailure::EmptyAccountName { code } => {
                write!(f, "account {code} has an empty name")
            }
            ValidationFailure::DuplicateAccountCode { code } => {
                write!(f, "account code {code} appears more than once")
            }
            ValidationFailure::UnknownAccountCode { code } => {
                write!(f, "account code {code} is not in the carrier catalog")
            }
        }
    }
}

/// Validation failure with enough context to diagnose layout drift
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "{carrier}: validation failed: {failure} (found {}, missing {})",
    .found.len(),
    .missing.len()
)]
pub struct ValidationError {
    pub carrier: CarrierCode,
    pub failure: ValidationFailure,
    /// Catalog codes present in the document
    pub found: Vec<String>,
    /// Catalog codes absent from the document
    pub missing: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconstruction_error_becomes_entry_warning() {
        let e = ReconstructionError {
            run: "249.230.99".to_string(),
            expected: 4,
            found: 3,
        };
        assert_eq!(
            e.to_string(),
            "cannot split '249.230.99' into 4 values: need 5 parts, found 3"
        );
        assert_eq!(
            WarningKind::from(e),
            WarningKind::NumericReconstruction {
                run: "249.230.99".to_string(),
                expected_parts: 5,
                found_parts: 3,
            }
        );
    }
}
