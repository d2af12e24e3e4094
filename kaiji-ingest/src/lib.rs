//! kaiji-ingest: extraction of fund performance records from carrier
//! disclosure text, with carrier detection and per-carrier parsers.
//!
//! ```text
//! text -> normalize -> detect -> parsers::<carrier> -> validate -> ParseOutcome
//! ```
//!
//! The engine is synchronous and pure; `parse_document` may be called from
//! any number of threads at once.

pub mod date;
pub mod detect;
pub mod error;
mod layout;
pub mod numeric;
pub mod parsers;
pub mod pipeline;
pub mod text;
pub mod validate;

pub use date::{DateNotation, extract_date, extract_date_in};
pub use detect::detect;
pub use error::{ExtractionError, ReconstructionError, ValidationError, ValidationFailure};
pub use numeric::reconstruct;
pub use parsers::{CarrierExtraction, catalog_for};
pub use pipeline::parse_document;
pub use validate::validate;
