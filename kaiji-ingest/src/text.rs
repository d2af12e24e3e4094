//! Text normalization applied before detection and extraction.
//!
//! PDF-to-text output mixes full-width and ASCII digits, sometimes within one
//! table. Digits, the decimal point and the thousands separator are folded to
//! ASCII; sign and percent glyphs are left alone because the carrier layouts
//! interpret them.

/// Fold full-width digits/period/comma to ASCII and unify line endings.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '０'..='９' => {
                let digit = c as u32 - '０' as u32;
                out.push(char::from(b'0' + digit as u8));
            }
            '．' => out.push('.'),
            '，' => out.push(','),
            '\u{3000}' => out.push(' '),
            '\r' => {
                if chars.peek() != Some(&'\n') {
                    out.push('\n');
                }
            }
            _ => out.push(c),
        }
    }

    out
}

/// Leading decoration that may precede a fund name in a table cell
pub(crate) const BULLET_GLYPHS: &str = "・■●◆";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folds_full_width_digits() {
        assert_eq!(normalize("２０２５年８月末"), "2025年8月末");
        assert_eq!(normalize("１，２３４．５６"), "1,234.56");
    }

    #[test]
    fn test_keeps_sign_and_percent_glyphs() {
        assert_eq!(normalize("＋０．２９％ ▲1.20%"), "＋0.29％ ▲1.20%");
    }

    #[test]
    fn test_unifies_line_endings() {
        assert_eq!(normalize("a\r\nb\rc\n"), "a\nb\nc\n");
    }

    #[test]
    fn test_ideographic_space_becomes_ascii() {
        assert_eq!(normalize("株式型\u{3000}512.34"), "株式型 512.34");
    }
}
