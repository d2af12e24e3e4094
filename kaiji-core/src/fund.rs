//! Fund record types for special-account performance snapshots

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Special account category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AccountType {
    #[serde(rename = "equity")]
    Equity,
    #[serde(rename = "bond")]
    Bond,
    #[serde(rename = "balanced")]
    Balanced,
    #[serde(rename = "reit")]
    Reit,
    #[serde(rename = "money_market")]
    MoneyMarket,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Equity => "equity",
            AccountType::Bond => "bond",
            AccountType::Balanced => "balanced",
            AccountType::Reit => "reit",
            AccountType::MoneyMarket => "money_market",
        }
    }
}

/// One entry of a carrier's fixed fund catalog.
///
/// Catalogs are static tables; the extractor only ever emits records whose
/// code comes from the catalog of the detected carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Canonical display name, also the first search candidate
    pub name: &'static str,
    /// Stable identifier, unique within a catalog
    pub code: &'static str,
    pub account_type: AccountType,
    /// Alternative spellings, searched after `name` in declaration order
    pub aliases: &'static [&'static str],
}

impl CatalogEntry {
    /// Search candidates: the canonical name first, then the aliases
    pub fn candidates(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }
}

/// Performance snapshot of one special account for one reporting date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FundRecord {
    pub account_name: String,
    pub account_code: String,
    pub account_type: AccountType,
    /// Per-unit valuation; `None` for formats that only publish returns
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub unit_price: Option<Decimal>,
    /// Percentage returns; `None` when the horizon is not published
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub return_1m: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub return_3m: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub return_6m: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub return_1y: Option<Decimal>,
}

impl FundRecord {
    /// Empty record for a catalog entry; values are filled in by the caller
    pub fn for_entry(entry: &CatalogEntry) -> Self {
        Self {
            account_name: entry.name.to_string(),
            account_code: entry.code.to_string(),
            account_type: entry.account_type,
            unit_price: None,
            return_1m: None,
            return_3m: None,
            return_6m: None,
            return_1y: None,
        }
    }

    /// Returns true if no numeric field carries a value
    pub fn is_blank(&self) -> bool {
        self.unit_price.is_none()
            && self.return_1m.is_none()
            && self.return_3m.is_none()
            && self.return_6m.is_none()
            && self.return_1y.is_none()
    }
}
