//! Gibraltar Life variable insurance disclosure parser
//!
//! Funds younger than a horizon print a dash in that column.
//!
//! Expected text rows after PDF-to-text:
//!   ジブラルタ生命保険株式会社（プルデンシャル生命グループ）
//!   変額保険 特別勘定ユニット・プライス 2025年8月31日現在
//!   特別勘定名     ユニット・プライス   1ヵ月    3ヵ月    6ヵ月    1年
//!   日本株式型        231.56        1.20%   ▲0.80%    4.44%   16.02%
//!   世界REIT型        102.30       ▲0.31%    1.05%      ―        ―

use kaiji_core::{AccountType, CarrierCode, CatalogEntry};
use regex::Regex;

use super::CarrierExtraction;
use crate::date::{DateNotation, extract_date};
use crate::error::ExtractionError;
use crate::layout::{PRICE, extract_entries, signed_fields};
use crate::numeric::{DASH, SIGNED};

pub static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "日本株式型",
        code: "gib-japan-equity",
        account_type: AccountType::Equity,
        aliases: &["国内株式型"],
    },
    CatalogEntry {
        name: "世界株式型",
        code: "gib-world-equity",
        account_type: AccountType::Equity,
        aliases: &["外国株式型"],
    },
    CatalogEntry {
        name: "新興国株式型",
        code: "gib-emerging-equity",
        account_type: AccountType::Equity,
        aliases: &[],
    },
    CatalogEntry {
        name: "世界債券型",
        code: "gib-world-bond",
        account_type: AccountType::Bond,
        aliases: &["外国債券型"],
    },
    CatalogEntry {
        name: "バランス型",
        code: "gib-balanced",
        account_type: AccountType::Balanced,
        aliases: &[],
    },
    CatalogEntry {
        name: "世界REIT型",
        code: "gib-world-reit",
        account_type: AccountType::Reit,
        aliases: &["世界リート型"],
    },
    CatalogEntry {
        name: "マネー型",
        code: "gib-money",
        account_type: AccountType::MoneyMarket,
        aliases: &[],
    },
];

/// Parse extracted Gibraltar Life disclosure text.
pub fn extract(
    text: &str,
    catalog: &[CatalogEntry],
) -> Result<CarrierExtraction, ExtractionError> {
    let reporting_date =
        extract_date(text, DateNotation::Plain)?.ok_or(ExtractionError::DateNotFound {
            carrier: CarrierCode::GibraltarLife,
        })?;

    // PRICE then 1m 3m 6m 1y, each either a value or a dash
    let layout = Regex::new(&format!(
        concat!(
            r"^\s*(?P<price>{PRICE})\s+",
            r"(?P<r1m>{SIGNED}|{DASH})\s+",
            r"(?P<r3m>{SIGNED}|{DASH})\s+",
            r"(?P<r6m>{SIGNED}|{DASH})\s+",
            r"(?P<r1y>{SIGNED}|{DASH})\s*$"
        ),
        PRICE = PRICE,
        SIGNED = SIGNED,
        DASH = DASH
    ))?;
    let (accounts, warnings) = extract_entries(text, catalog, &layout, signed_fields)?;

    Ok(CarrierExtraction {
        reporting_date,
        accounts,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    const SAMPLE: &str = r#"
ジブラルタ生命保険株式会社（プルデンシャル生命グループ）
変額保険 特別勘定ユニット・プライス 2025年8月31日現在
特別勘定名     ユニット・プライス   1ヵ月    3ヵ月    6ヵ月    1年
日本株式型        231.56        1.20%   ▲0.80%    4.44%   16.02%
世界REIT型        102.30       ▲0.31%    1.05%      ―        ―
"#;

    #[test]
    fn test_dash_columns_are_null() {
        let out = extract(SAMPLE, CATALOG).unwrap();
        assert_eq!(out.reporting_date, NaiveDate::from_ymd_opt(2025, 8, 31).unwrap());

        let reit = out.accounts.iter().find(|a| a.account_code == "gib-world-reit").unwrap();
        assert_eq!(reit.unit_price, Some(dec!(102.30)));
        assert_eq!(reit.return_1m, Some(dec!(-0.31)));
        assert_eq!(reit.return_3m, Some(dec!(1.05)));
        assert_eq!(reit.return_6m, None);
        assert_eq!(reit.return_1y, None);
    }

    #[test]
    fn test_full_row() {
        let out = extract(SAMPLE, CATALOG).unwrap();
        let eq = &out.accounts[0];
        assert_eq!(eq.account_code, "gib-japan-equity");
        assert_eq!(eq.return_3m, Some(dec!(-0.80)));
        assert_eq!(eq.return_1y, Some(dec!(16.02)));
        assert_eq!(out.accounts.len(), 2);
    }
}
