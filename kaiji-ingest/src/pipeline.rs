//! Single entry point: normalize, detect, extract, validate.

use kaiji_core::{ParseOutcome, ParsedDocument};
use tracing::info;

use crate::detect::detect;
use crate::error::ExtractionError;
use crate::parsers;
use crate::text::normalize;
use crate::validate::validate;

/// Parse one disclosure document's extracted text.
///
/// Document-level problems (unknown carrier, no date, nothing extracted) are
/// errors. Entry-level problems are returned as warnings next to the
/// validated document.
pub fn parse_document(raw_text: &str) -> Result<ParseOutcome, ExtractionError> {
    let text = normalize(raw_text);
    let carrier = detect(&text)?;
    let extraction = parsers::extract(carrier, &text)?;

    let document = ParsedDocument {
        carrier_code: carrier,
        reporting_date: extraction.reporting_date,
        accounts: extraction.accounts,
    };
    validate(&document)?;

    info!(
        carrier = %carrier,
        reporting_date = %document.reporting_date,
        accounts = document.accounts.len(),
        warnings = extraction.warnings.len(),
        "parsed disclosure document"
    );

    Ok(ParseOutcome {
        document,
        warnings: extraction.warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationFailure;
    use kaiji_core::CarrierCode;

    #[test]
    fn test_full_width_digits_are_normalized_first() {
        let text = "\
プルデンシャル生命 変額保険 ２０２５年８月末現在
株式型 １．８５% ４．０２% ６．７７% １４．１０%
";
        let out = parse_document(text).unwrap();
        assert_eq!(out.document.carrier_code, CarrierCode::PrudentialLife);
        assert_eq!(out.document.accounts.len(), 1);
        assert_eq!(out.warnings.len(), 7);
    }

    #[test]
    fn test_no_rows_is_a_validation_error() {
        let text = "\
プルデンシャル生命 変額保険 2025年8月末現在
（本資料に掲載する特別勘定はありません）
";
        match parse_document(text) {
            Err(ExtractionError::Validation(e)) => {
                assert_eq!(e.failure, ValidationFailure::NoAccounts);
                assert_eq!(e.missing.len(), 8);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_no_date_is_fatal_even_with_rows() {
        let text = "ソニー生命 変額保険\n株式型 512.34 1.23% ▲0.45% 3.21% 10.52%\n";
        assert!(matches!(
            parse_document(text),
            Err(ExtractionError::DateNotFound {
                carrier: CarrierCode::SonyLife
            })
        ));
    }
}
