//! Per-file JSON report emitted by `kaiji parse`

use kaiji_core::ParseOutcome;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
pub struct FileReport {
    pub file: PathBuf,
    #[serde(flatten)]
    pub outcome: Option<ParseOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    pub fn parsed(file: PathBuf, outcome: ParseOutcome) -> Self {
        Self {
            file,
            outcome: Some(outcome),
            error: None,
        }
    }

    pub fn failed(file: PathBuf, error: impl Into<String>) -> Self {
        Self {
            file,
            outcome: None,
            error: Some(error.into()),
        }
    }

    pub fn has_warnings(&self) -> bool {
        self.outcome.as_ref().is_some_and(|o| o.has_warnings())
    }
}
