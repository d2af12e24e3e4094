//! Numeric token handling: signed value parsing and reconstruction of
//! concatenated digit runs.
//!
//! Some layouts print a unit price and several returns with no separator:
//!
//!   249.230.994.135.11   =>   249.23 | 0.99 | 4.13 | 5.11
//!
//! Every sub-value carries exactly two fractional digits, so the run is split
//! on `.` and each part donates its first two characters to the value on its
//! left and the remainder to the integer digits of the value on its right.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::ReconstructionError;

/// Regex fragment: a signed decimal, optionally followed by a percent glyph
pub(crate) const SIGNED: &str = r"[+＋\-−－▲△]?\s*\d[\d,]*(?:\.\d+)?\s*[%％]?";

/// Regex fragment: placeholder printed for an unpublished horizon
pub(crate) const DASH: &str = r"[―—ー－‐\-]";

/// Regex fragment: a concatenated run of digits, periods and sign glyphs
pub(crate) const RUN: &str = r"[+＋\-−－▲△]?\d[\d.,+＋\-−－▲△ ]*\d";

/// Glyphs that turn the following value negative. `▲`/`△` are the
/// dedicated negative marks of Japanese financial tables.
pub fn is_negative_glyph(c: char) -> bool {
    matches!(c, '▲' | '△' | '-' | '−' | '－')
}

pub fn is_positive_glyph(c: char) -> bool {
    matches!(c, '+' | '＋')
}

/// Parse one signed field such as `＋0.29％`, `▲1.20%` or `1,234.56`.
///
/// Returns `None` for dash placeholders and anything that is not a number.
pub fn parse_signed(token: &str) -> Option<Decimal> {
    let token = token.trim();
    let token = token
        .strip_suffix('%')
        .or_else(|| token.strip_suffix('％'))
        .unwrap_or(token)
        .trim_end();

    let mut chars = token.chars();
    let first = chars.next()?;
    let (negative, digits) = if is_negative_glyph(first) {
        (true, chars.as_str())
    } else if is_positive_glyph(first) {
        (false, chars.as_str())
    } else {
        (false, token)
    };

    let digits = digits.trim_start().replace(',', "");
    if digits.is_empty() || !digits.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }

    let value = Decimal::from_str(&digits).ok()?;
    Some(if negative { -value } else { value })
}

/// Split a concatenated run into `expected` two-decimal values.
///
/// Sign glyphs and whitespace are removed before splitting; a value is negated
/// when a negative glyph sat inside the character span it was rebuilt from.
pub fn reconstruct(run: &str, expected: usize) -> Result<Vec<Decimal>, ReconstructionError> {
    let mut cleaned = String::with_capacity(run.len());
    let mut negative_at = Vec::new();

    for c in run.chars() {
        if is_negative_glyph(c) {
            negative_at.push(cleaned.len());
        } else if is_positive_glyph(c) || c.is_whitespace() || c == ',' {
            continue;
        } else {
            cleaned.push(c);
        }
    }

    let parts: Vec<&str> = cleaned.split('.').collect();
    let fail = || ReconstructionError {
        run: run.to_string(),
        expected,
        found: parts.len(),
    };

    if parts.len() < expected + 1 || !cleaned.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return Err(fail());
    }

    let mut values = Vec::with_capacity(expected);
    // byte offset of parts[k - 1] within `cleaned`
    let mut prev_offset = 0;
    // leading chars of parts[k - 1] already used as the previous fraction
    let mut claimed = 0;

    for k in 1..=expected {
        let prev = parts[k - 1];
        let cur = parts[k];

        let integer = prev.get(claimed..).unwrap_or("");
        if integer.is_empty() || cur.len() < 2 {
            return Err(fail());
        }
        let fraction = &cur[..2];

        let start = prev_offset + claimed;
        let cur_offset = prev_offset + prev.len() + 1;
        let end = cur_offset + 2;

        let mut value = Decimal::from_str(&format!("{integer}.{fraction}")).map_err(|_| fail())?;
        if negative_at.iter().any(|&p| p >= start && p < end) {
            value = -value;
        }
        values.push(value);

        prev_offset = cur_offset;
        claimed = 2;
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reconstructs_price_and_three_returns() {
        let v = reconstruct("249.230.994.135.11", 4).unwrap();
        assert_eq!(v, vec![dec!(249.23), dec!(0.99), dec!(4.13), dec!(5.11)]);
    }

    #[test]
    fn test_negative_glyph_attaches_to_following_value() {
        let v = reconstruct("180.45▲1.232.104.56", 4).unwrap();
        assert_eq!(v, vec![dec!(180.45), dec!(-1.23), dec!(2.10), dec!(4.56)]);

        let v = reconstruct("97.12△0.45△12.3011.02", 4).unwrap();
        assert_eq!(v, vec![dec!(97.12), dec!(-0.45), dec!(-12.30), dec!(11.02)]);
    }

    #[test]
    fn test_leading_minus_applies_to_first_value() {
        let v = reconstruct("−9.870.010.020.03", 4).unwrap();
        assert_eq!(v[0], dec!(-9.87));
        assert_eq!(v[1], dec!(0.01));
    }

    #[test]
    fn test_whitespace_separated_run_still_splits() {
        let v = reconstruct("249.23 0.99 4.13 ＋5.11", 4).unwrap();
        assert_eq!(v, vec![dec!(249.23), dec!(0.99), dec!(4.13), dec!(5.11)]);
    }

    #[test]
    fn test_multi_digit_integer_parts() {
        let v = reconstruct("1,032.5012.34105.670.00", 4).unwrap();
        assert_eq!(v, vec![dec!(1032.50), dec!(12.34), dec!(105.67), dec!(0.00)]);
    }

    #[test]
    fn test_too_few_parts_fails() {
        let err = reconstruct("249.230.99", 4).unwrap_err();
        assert_eq!(err.expected, 4);
        assert_eq!(err.found, 3);
        assert!(err.to_string().contains("need 5 parts"));
    }

    #[test]
    fn test_short_fraction_fails() {
        assert!(reconstruct("249.2.99.13.11", 4).is_err());
    }

    #[test]
    fn test_extra_parts_are_ignored() {
        let v = reconstruct("1.002.003.004.005.00", 4).unwrap();
        assert_eq!(v, vec![dec!(1.00), dec!(2.00), dec!(3.00), dec!(4.00)]);
    }

    #[test]
    fn test_parse_signed_variants() {
        assert_eq!(parse_signed("＋0.29％"), Some(dec!(0.29)));
        assert_eq!(parse_signed("▲1.20%"), Some(dec!(-1.20)));
        assert_eq!(parse_signed("△ 3.5"), Some(dec!(-3.5)));
        assert_eq!(parse_signed("−0.07"), Some(dec!(-0.07)));
        assert_eq!(parse_signed("12,345.67"), Some(dec!(12345.67)));
        assert_eq!(parse_signed("―"), None);
        assert_eq!(parse_signed("-"), None);
        assert_eq!(parse_signed(""), None);
    }
}
