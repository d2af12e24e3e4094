//! kaiji-core: value types shared by the disclosure extraction engine and its callers

pub mod carrier;
pub mod document;
pub mod fund;

pub use carrier::CarrierCode;
pub use document::{ExtractionWarning, ParseOutcome, ParsedDocument, WarningKind};
pub use fund::{AccountType, CatalogEntry, FundRecord};
