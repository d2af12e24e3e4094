//! Prudential Life variable insurance disclosure parser
//!
//! Only return percentages are published, no unit price. Long fund names push
//! the figures onto the following line in the text stream.
//!
//! Expected text rows after PDF-to-text:
//!   変額保険 特別勘定の騰落率 2025年8月末現在
//!   特別勘定          1ヵ月     3ヵ月     6ヵ月     1年
//!   株式型            1.85%     4.02%     6.77%    14.10%
//!   世界債券型
//!                    △0.42%    1.10%     0.95%     3.08%

use kaiji_core::{AccountType, CarrierCode, CatalogEntry};
use regex::Regex;

use super::CarrierExtraction;
use crate::date::{DateNotation, extract_date};
use crate::error::ExtractionError;
use crate::layout::{extract_entries, signed_fields};
use crate::numeric::SIGNED;

pub static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "株式型",
        code: "pru-equity",
        account_type: AccountType::Equity,
        aliases: &[],
    },
    CatalogEntry {
        name: "米国株式型",
        code: "pru-us-equity",
        account_type: AccountType::Equity,
        aliases: &[],
    },
    CatalogEntry {
        name: "世界株式型",
        code: "pru-world-equity",
        account_type: AccountType::Equity,
        aliases: &["外国株式型"],
    },
    CatalogEntry {
        name: "債券型",
        code: "pru-bond",
        account_type: AccountType::Bond,
        aliases: &[],
    },
    CatalogEntry {
        name: "世界債券型",
        code: "pru-world-bond",
        account_type: AccountType::Bond,
        aliases: &["外国債券型"],
    },
    CatalogEntry {
        name: "総合型",
        code: "pru-balanced",
        account_type: AccountType::Balanced,
        aliases: &[],
    },
    CatalogEntry {
        name: "REIT型",
        code: "pru-reit",
        account_type: AccountType::Reit,
        aliases: &["リート型"],
    },
    CatalogEntry {
        name: "マネー型",
        code: "pru-money",
        account_type: AccountType::MoneyMarket,
        aliases: &["短期金融市場型"],
    },
];

/// Parse extracted Prudential Life disclosure text.
pub fn extract(
    text: &str,
    catalog: &[CatalogEntry],
) -> Result<CarrierExtraction, ExtractionError> {
    let reporting_date =
        extract_date(text, DateNotation::Plain)?.ok_or(ExtractionError::DateNotFound {
            carrier: CarrierCode::PrudentialLife,
        })?;

    // 1m 3m 6m 1y
    let layout = Regex::new(&format!(
        concat!(
            r"^\s*(?P<r1m>{SIGNED})\s+",
            r"(?P<r3m>{SIGNED})\s+",
            r"(?P<r6m>{SIGNED})\s+",
            r"(?P<r1y>{SIGNED})\s*$"
        ),
        SIGNED = SIGNED
    ))?;
    let (accounts, warnings) = extract_entries(text, catalog, &layout, signed_fields)?;

    Ok(CarrierExtraction {
        reporting_date,
        accounts,
        warnings,
    })
}
