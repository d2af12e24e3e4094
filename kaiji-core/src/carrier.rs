//! Carrier identifiers for the disclosure formats the engine understands

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A cataloged carrier layout. Product variants get their own code when
/// their disclosure layout differs from the carrier's generic one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CarrierCode {
    #[serde(rename = "axa_life")]
    AxaLife,
    #[serde(rename = "sony_life")]
    SonyLife,
    #[serde(rename = "sony_life_annuity")]
    SonyLifeAnnuity,
    #[serde(rename = "prudential_life")]
    PrudentialLife,
    #[serde(rename = "gibraltar_life")]
    GibraltarLife,
}

impl CarrierCode {
    pub const ALL: [CarrierCode; 5] = [
        CarrierCode::AxaLife,
        CarrierCode::SonyLife,
        CarrierCode::SonyLifeAnnuity,
        CarrierCode::PrudentialLife,
        CarrierCode::GibraltarLife,
    ];

    /// Stable string form, identical to the serialized value
    pub fn as_str(&self) -> &'static str {
        match self {
            CarrierCode::AxaLife => "axa_life",
            CarrierCode::SonyLife => "sony_life",
            CarrierCode::SonyLifeAnnuity => "sony_life_annuity",
            CarrierCode::PrudentialLife => "prudential_life",
            CarrierCode::GibraltarLife => "gibraltar_life",
        }
    }

    /// Carrier name as printed on its own documents
    pub fn display_name(&self) -> &'static str {
        match self {
            CarrierCode::AxaLife => "アクサ生命 ユニット・リンク",
            CarrierCode::SonyLife => "ソニー生命 変額保険",
            CarrierCode::SonyLifeAnnuity => "ソニー生命 変額個人年金保険",
            CarrierCode::PrudentialLife => "プルデンシャル生命 変額保険",
            CarrierCode::GibraltarLife => "ジブラルタ生命 変額保険",
        }
    }
}

impl fmt::Display for CarrierCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarrierCode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        CarrierCode::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("unknown carrier code: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_through_str() {
        for code in CarrierCode::ALL {
            assert_eq!(code.as_str().parse::<CarrierCode>().unwrap(), code);
        }
        assert_eq!("AXA_LIFE".parse::<CarrierCode>().unwrap(), CarrierCode::AxaLife);
    }

    #[test]
    fn test_rejects_unknown_code() {
        let err = "meiji_yasuda".parse::<CarrierCode>().unwrap_err();
        assert!(err.to_string().contains("meiji_yasuda"));
    }

    #[test]
    fn test_serializes_as_snake_case_string() {
        let json = serde_json::to_string(&CarrierCode::SonyLifeAnnuity).unwrap();
        assert_eq!(json, "\"sony_life_annuity\"");
    }
}
