//! Sony Life variable individual annuity disclosure parser
//!
//! The annuity product uses its own fund line-up and full-width sign and
//! percent glyphs. The as-of date usually sits in parentheses after the table
//! title; a full date anywhere in the document still beats a month-only title.
//!
//! Expected text rows after PDF-to-text:
//!   変額個人年金保険 ユニットプライス・騰落率（2025年8月末）
//!   特別勘定名   ユニットプライス   1ヵ月    3ヵ月    6ヵ月    1年
//!   バランス型20   105.87   ＋0.29％  ＋2.06％  ＋1.74％  ＋2.29％
//!   株式型         143.10   ▲1.02％  ＋3.40％  ＋5.95％ ＋12.08％

use kaiji_core::{AccountType, CarrierCode, CatalogEntry};
use regex::Regex;

use super::CarrierExtraction;
use crate::date::{DateNotation, extract_date_in};
use crate::error::ExtractionError;
use crate::layout::{PRICE, extract_entries, signed_fields};
use crate::numeric::SIGNED;

pub static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "バランス型20",
        code: "sonya-balanced-20",
        account_type: AccountType::Balanced,
        aliases: &["バランス型(株式20)"],
    },
    CatalogEntry {
        name: "バランス型40",
        code: "sonya-balanced-40",
        account_type: AccountType::Balanced,
        aliases: &["バランス型(株式40)"],
    },
    CatalogEntry {
        name: "バランス型60",
        code: "sonya-balanced-60",
        account_type: AccountType::Balanced,
        aliases: &["バランス型(株式60)"],
    },
    CatalogEntry {
        name: "株式型",
        code: "sonya-equity",
        account_type: AccountType::Equity,
        aliases: &[],
    },
    CatalogEntry {
        name: "債券型",
        code: "sonya-bond",
        account_type: AccountType::Bond,
        aliases: &[],
    },
    CatalogEntry {
        name: "短期金融市場型",
        code: "sonya-money",
        account_type: AccountType::MoneyMarket,
        aliases: &[],
    },
];

/// Parse extracted Sony Life annuity disclosure text.
///
/// Parenthesized dates are tried before bare `…現在` dates, full dates in
/// either notation before month-only ones.
pub fn extract(
    text: &str,
    catalog: &[CatalogEntry],
) -> Result<CarrierExtraction, ExtractionError> {
    let notations = [DateNotation::Parenthesized, DateNotation::Plain];
    let reporting_date =
        extract_date_in(text, &notations)?.ok_or(ExtractionError::DateNotFound {
            carrier: CarrierCode::SonyLifeAnnuity,
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
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_signed_full_width_line() {
        let text = "\
ソニー生命 変額個人年金保険（2025年8月末）
バランス型20 105.87 ＋0.29％ ＋2.06％ ＋1.74％ ＋2.29％
";
        let out = extract(text, CATALOG).unwrap();
        assert_eq!(out.reporting_date, NaiveDate::from_ymd_opt(2025, 8, 31).unwrap());

        let rec = &out.accounts[0];
        assert_eq!(rec.account_name, "バランス型20");
        assert_eq!(rec.unit_price, Some(dec!(105.87)));
        assert_eq!(rec.return_1m, Some(dec!(0.29)));
        assert_eq!(rec.return_3m, Some(dec!(2.06)));
        assert_eq!(rec.return_6m, Some(dec!(1.74)));
        assert_eq!(rec.return_1y, Some(dec!(2.29)));
    }

    #[test]
    fn test_balanced_variants_do_not_collide() {
        let text = "\
（2025年8月末）
バランス型40 110.00 ＋0.10％ ＋0.20％ ＋0.30％ ＋0.40％
バランス型20 101.00 ▲0.10％ ＋0.20％ ＋0.30％ ＋0.40％
";
        let out = extract(text, CATALOG).unwrap();
        let codes: Vec<_> = out.accounts.iter().map(|a| a.account_code.as_str()).collect();
        assert_eq!(codes, vec!["sonya-balanced-20", "sonya-balanced-40"]);
        assert_eq!(out.accounts[0].return_1m, Some(dec!(-0.10)));
    }

    #[test]
    fn test_falls_back_to_plain_date() {
        let text = "\
変額個人年金保険 2025年7月31日現在
株式型 143.10 ▲1.02％ ＋3.40％ ＋5.95％ ＋12.08％
";
        let out = extract(text, CATALOG).unwrap();
        assert_eq!(out.reporting_date, NaiveDate::from_ymd_opt(2025, 7, 31).unwrap());
    }

    #[test]
    fn test_plain_full_date_beats_parenthesized_month() {
        let text = "\
変額個人年金保険 ユニットプライス・騰落率（2025年8月）
作成日 2025年8月29日現在
株式型 143.10 ▲1.02％ ＋3.40％ ＋5.95％ ＋12.08％
";
        let out = extract(text, CATALOG).unwrap();
        assert_eq!(out.reporting_date, NaiveDate::from_ymd_opt(2025, 8, 29).unwrap());
    }
}
