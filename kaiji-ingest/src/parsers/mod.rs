//! Carrier-specific extraction strategies.
//!
//! Every strategy has the same shape, `extract(text, catalog)`, and owns a
//! static `CATALOG`. Dispatch is a match over the closed `CarrierCode` set.

pub mod axa_life;
pub mod gibraltar_life;
pub mod prudential_life;
pub mod sony_life;
pub mod sony_life_annuity;

use chrono::NaiveDate;
use kaiji_core::{CarrierCode, CatalogEntry, ExtractionWarning, FundRecord};

use crate::error::ExtractionError;

/// Raw output of one strategy, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarrierExtraction {
    pub reporting_date: NaiveDate,
    pub accounts: Vec<FundRecord>,
    pub warnings: Vec<ExtractionWarning>,
}

/// Fixed fund catalog of a carrier layout
pub fn catalog_for(carrier: CarrierCode) -> &'static [CatalogEntry] {
    match carrier {
        CarrierCode::AxaLife => axa_life::CATALOG,
        CarrierCode::SonyLife => sony_life::CATALOG,
        CarrierCode::SonyLifeAnnuity => sony_life_annuity::CATALOG,
        CarrierCode::PrudentialLife => prudential_life::CATALOG,
        CarrierCode::GibraltarLife => gibraltar_life::CATALOG,
    }
}

/// Run the strategy registered for `carrier` with its own catalog
pub fn extract(carrier: CarrierCode, text: &str) -> Result<CarrierExtraction, ExtractionError> {
    let catalog = catalog_for(carrier);
    match carrier {
        CarrierCode::AxaLife => axa_life::extract(text, catalog),
        CarrierCode::SonyLife => sony_life::extract(text, catalog),
        CarrierCode::SonyLifeAnnuity => sony_life_annuity::extract(text, catalog),
        CarrierCode::PrudentialLife => prudential_life::extract(text, catalog),
        CarrierCode::GibraltarLife => gibraltar_life::extract(text, catalog),
    }
}
