//! Sony Life variable life insurance disclosure parser
//!
//! Expected text rows after PDF-to-text:
//!   特別勘定の運用状況 2025年8月29日現在
//!   特別勘定名    ユニット・プライス   1ヵ月    3ヵ月    6ヵ月    1年
//!   株式型          512.34         1.23%   ▲0.45%    3.21%   10.52%
//!   世界株式型      1,032.10       2.04%    5.11%    7.80%   18.33%

use kaiji_core::{AccountType, CarrierCode, CatalogEntry};
use regex::Regex;

use super::CarrierExtraction;
use crate::date::{DateNotation, extract_date};
use crate::error::ExtractionError;
use crate::layout::{PRICE, extract_entries, signed_fields};
use crate::numeric::SIGNED;

pub static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "株式型",
        code: "sony-equity",
        account_type: AccountType::Equity,
        aliases: &[],
    },
    CatalogEntry {
        name: "日本成長株式型",
        code: "sony-japan-growth-equity",
        account_type: AccountType::Equity,
        aliases: &[],
    },
    CatalogEntry {
        name: "世界コア株式型",
        code: "sony-world-core-equity",
        account_type: AccountType::Equity,
        aliases: &[],
    },
    CatalogEntry {
        name: "世界株式型",
        code: "sony-world-equity",
        account_type: AccountType::Equity,
        aliases: &["外国株式型"],
    },
    CatalogEntry {
        name: "米国株式型",
        code: "sony-us-equity",
        account_type: AccountType::Equity,
        aliases: &[],
    },
    CatalogEntry {
        name: "債券型",
        code: "sony-bond",
        account_type: AccountType::Bond,
        aliases: &[],
    },
    CatalogEntry {
        name: "世界債券型",
        code: "sony-world-bond",
        account_type: AccountType::Bond,
        aliases: &["外国債券型"],
    },
    CatalogEntry {
        name: "米国債券型",
        code: "sony-us-bond",
        account_type: AccountType::Bond,
        aliases: &[],
    },
    CatalogEntry {
        name: "総合型",
        code: "sony-balanced",
        account_type: AccountType::Balanced,
        aliases: &[],
    },
    CatalogEntry {
        name: "短期金融市場型",
        code: "sony-money",
        account_type: AccountType::MoneyMarket,
        aliases: &["マネー型"],
    },
];

/// Parse extracted Sony Life variable-insurance disclosure text.
pub fn extract(
    text: &str,
    catalog: &[CatalogEntry],
) -> Result<CarrierExtraction, ExtractionError> {
    let reporting_date =
        extract_date(text, DateNotation::Plain)?.ok_or(ExtractionError::DateNotFound {
            carrier: CarrierCode::SonyLife,
        })?;

    // PRICE 1m 3m 6m 1y
    let layout = Regex::new(&format!(
        concat!(
            r"^\s*(?P<price>{PRICE})\s+",
            r"(?P<r1m>{SIGNED})\s+",
            r"(?P<r3m>{SIGNED})\s+",
            r"(?P<r6m>{SIGNED})\s+",
            r"(?P<r1y>{SIGNED})\s*$"
        ),
        PRICE = PRICE,
        SIGNED = SIGNED
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
    use rust_decimal_macros::dec;

    const SAMPLE: &str = r#"
ソニー生命保険株式会社
変額保険（終身型） 特別勘定の運用状況 2025年8月29日現在
特別勘定名    ユニット・プライス   1ヵ月    3ヵ月    6ヵ月    1年
株式型          512.34         1.23%   ▲0.45%    3.21%   10.52%
世界株式型      1,032.10       2.04%    5.11%    7.80%   18.33%
債券型          118.02        −0.12%    0.30%   ▲1.05%   ▲2.40%
短期金融市場型   99.87         0.00%    0.01%    0.02%    0.03%
"#;

    #[test]
    fn test_parses_rows() {
        let out = extract(SAMPLE, CATALOG).unwrap();
        assert_eq!(out.accounts.len(), 4);

        let equity = &out.accounts[0];
        assert_eq!(equity.account_code, "sony-equity");
        assert_eq!(equity.unit_price, Some(dec!(512.34)));
        assert_eq!(equity.return_3m, Some(dec!(-0.45)));

        let world = &out.accounts[1];
        assert_eq!(world.unit_price, Some(dec!(1032.10)));
        assert_eq!(world.return_1y, Some(dec!(18.33)));

        let bond = &out.accounts[2];
        assert_eq!(bond.return_1m, Some(dec!(-0.12)));
        assert_eq!(bond.return_6m, Some(dec!(-1.05)));
    }

    #[test]
    fn test_unmatched_entries_are_warnings_not_records() {
        let out = extract(SAMPLE, CATALOG).unwrap();
        assert_eq!(out.warnings.len(), 6);
        assert!(out.warnings.iter().all(|w| w.is_coverage_gap()));
        assert!(out.accounts.iter().all(|a| !a.is_blank()));
    }
}
