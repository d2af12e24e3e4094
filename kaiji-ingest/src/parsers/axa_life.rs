//! AXA Life unit-linked disclosure parser
//!
//! Expected text rows after PDF-to-text. The unit price and the 1-month,
//! 3-month and 1-year returns come out of the table as one run:
//!
//!   ユニット・リンク保険 特別勘定の運用実績 2025年8月末現在
//!   特別勘定名        ユニットプライス  1ヵ月  3ヵ月  1年
//!   世界株式型        249.230.994.135.11
//!   日本株式型        180.45▲1.232.104.56

use kaiji_core::{AccountType, CarrierCode, CatalogEntry, FundRecord, WarningKind};
use regex::{Captures, Regex};

use super::CarrierExtraction;
use crate::date::{DateNotation, extract_date};
use crate::error::ExtractionError;
use crate::layout::extract_entries;
use crate::numeric::{RUN, reconstruct};

/// Sub-values per run: unit price, 1m, 3m, 1y
const VALUES_PER_RUN: usize = 4;

pub static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "日本株式型",
        code: "axa-ul-japan-equity",
        account_type: AccountType::Equity,
        aliases: &["国内株式型"],
    },
    CatalogEntry {
        name: "日本株式プラス型",
        code: "axa-ul-japan-equity-plus",
        account_type: AccountType::Equity,
        aliases: &[],
    },
    CatalogEntry {
        name: "米国株式型",
        code: "axa-ul-us-equity",
        account_type: AccountType::Equity,
        aliases: &[],
    },
    CatalogEntry {
        name: "欧州株式型",
        code: "axa-ul-europe-equity",
        account_type: AccountType::Equity,
        aliases: &[],
    },
    CatalogEntry {
        name: "世界株式型",
        code: "axa-ul-world-equity",
        account_type: AccountType::Equity,
        aliases: &["外国株式型"],
    },
    CatalogEntry {
        name: "新興国株式型",
        code: "axa-ul-emerging-equity",
        account_type: AccountType::Equity,
        aliases: &[],
    },
    CatalogEntry {
        name: "日本債券型",
        code: "axa-ul-japan-bond",
        account_type: AccountType::Bond,
        aliases: &["国内債券型"],
    },
    CatalogEntry {
        name: "米国債券型",
        code: "axa-ul-us-bond",
        account_type: AccountType::Bond,
        aliases: &[],
    },
    CatalogEntry {
        name: "世界債券型",
        code: "axa-ul-world-bond",
        account_type: AccountType::Bond,
        aliases: &["外国債券型"],
    },
    CatalogEntry {
        name: "新興国債券型",
        code: "axa-ul-emerging-bond",
        account_type: AccountType::Bond,
        aliases: &[],
    },
    CatalogEntry {
        name: "日本REIT型",
        code: "axa-ul-japan-reit",
        account_type: AccountType::Reit,
        aliases: &["J-REIT型", "Ｊ－ＲＥＩＴ型"],
    },
    CatalogEntry {
        name: "世界REIT型",
        code: "axa-ul-world-reit",
        account_type: AccountType::Reit,
        aliases: &["グローバルREIT型"],
    },
    CatalogEntry {
        name: "安定成長バランス型",
        code: "axa-ul-balanced-stable",
        account_type: AccountType::Balanced,
        aliases: &[],
    },
    CatalogEntry {
        name: "積極運用バランス型",
        code: "axa-ul-balanced-growth",
        account_type: AccountType::Balanced,
        aliases: &[],
    },
    CatalogEntry {
        name: "マネー型",
        code: "axa-ul-money",
        account_type: AccountType::MoneyMarket,
        aliases: &["短期金融市場型"],
    },
];

/// Parse extracted AXA unit-link disclosure text.
pub fn extract(
    text: &str,
    catalog: &[CatalogEntry],
) -> Result<CarrierExtraction, ExtractionError> {
    let reporting_date =
        extract_date(text, DateNotation::Plain)?.ok_or(ExtractionError::DateNotFound {
            carrier: CarrierCode::AxaLife,
        })?;

    let layout = Regex::new(&format!(r"^\s*(?P<run>{RUN})\s*$"))?;
    let (accounts, warnings) = extract_entries(text, catalog, &layout, split_run)?;

    Ok(CarrierExtraction {
        reporting_date,
        accounts,
        warnings,
    })
}

fn split_run(entry: &CatalogEntry, caps: &Captures<'_>) -> Result<FundRecord, WarningKind> {
    let run = caps.name("run").map(|m| m.as_str()).unwrap_or("");
    let values = reconstruct(run, VALUES_PER_RUN)?;

    let mut record = FundRecord::for_entry(entry);
    record.unit_price = Some(values[0]);
    record.return_1m = Some(values[1]);
    record.return_3m = Some(values[2]);
    record.return_1y = Some(values[3]);
    Ok(record)
}
