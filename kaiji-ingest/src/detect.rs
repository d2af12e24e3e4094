//! Carrier detection from distinguishing substrings.
//!
//! Rules are evaluated in order and the first match wins. A product variant
//! is listed before its carrier's generic rule, and Gibraltar precedes
//! Prudential because Gibraltar documents also print the group-level
//! Prudential name.

use kaiji_core::CarrierCode;
use tracing::debug;

use crate::error::ExtractionError;

/// Boolean combination of substring tests
#[derive(Debug, Clone, Copy)]
pub enum Marker {
    Contains(&'static str),
    All(&'static [Marker]),
    Any(&'static [Marker]),
}

impl Marker {
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Marker::Contains(s) => text.contains(*s),
            Marker::All(ms) => ms.iter().all(|m| m.matches(text)),
            Marker::Any(ms) => ms.iter().any(|m| m.matches(text)),
        }
    }
}

use Marker::{All, Any, Contains};

/// Ordered detection table
pub static RULES: &[(CarrierCode, Marker)] = &[
    (
        CarrierCode::SonyLifeAnnuity,
        All(&[Contains("ソニー生命"), Contains("変額個人年金")]),
    ),
    (
        CarrierCode::SonyLife,
        Any(&[Contains("ソニー生命"), Contains("Sony Life")]),
    ),
    (
        CarrierCode::GibraltarLife,
        Any(&[Contains("ジブラルタ生命"), Contains("Gibraltar Life")]),
    ),
    (
        CarrierCode::PrudentialLife,
        Any(&[Contains("プルデンシャル生命"), Contains("Prudential Life")]),
    ),
    (
        CarrierCode::AxaLife,
        All(&[
            Contains("アクサ生命"),
            Any(&[Contains("ユニット・リンク"), Contains("ユニットプライス")]),
        ]),
    ),
];

/// Identify the carrier that published `text`
pub fn detect(text: &str) -> Result<CarrierCode, ExtractionError> {
    let carrier = RULES
        .iter()
        .find(|(_, marker)| marker.matches(text))
        .map(|(code, _)| *code)
        .ok_or(ExtractionError::CarrierUnrecognized)?;

    debug!(carrier = %carrier, "detected carrier");
    Ok(carrier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annuity_variant_checked_before_generic() {
        let text = "ソニー生命保険株式会社\n変額個人年金保険 特別勘定の運用状況";
        assert_eq!(detect(text).unwrap(), CarrierCode::SonyLifeAnnuity);

        let text = "ソニー生命保険株式会社\n変額保険（終身型） 特別勘定";
        assert_eq!(detect(text).unwrap(), CarrierCode::SonyLife);
    }

    #[test]
    fn test_gibraltar_wins_over_shared_prudential_marker() {
        let text = "ジブラルタ生命保険株式会社（プルデンシャル生命グループ）";
        assert_eq!(detect(text).unwrap(), CarrierCode::GibraltarLife);

        let text = "プルデンシャル生命保険株式会社 変額保険 月次報告";
        assert_eq!(detect(text).unwrap(), CarrierCode::PrudentialLife);
    }

    #[test]
    fn test_axa_needs_product_marker() {
        assert!(matches!(
            detect("アクサ生命 ニュースリリース"),
            Err(ExtractionError::CarrierUnrecognized)
        ));
        assert_eq!(
            detect("アクサ生命 ユニット・リンク保険 運用実績").unwrap(),
            CarrierCode::AxaLife
        );
    }

    #[test]
    fn test_unknown_text_fails_closed() {
        let err = detect("明治安田生命 変額保険 特別勘定 2025年8月末現在").unwrap_err();
        assert!(matches!(err, ExtractionError::CarrierUnrecognized));
    }
}
