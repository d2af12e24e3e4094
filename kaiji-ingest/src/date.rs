//! Reporting-date extraction.
//!
//! Two notations are recognized:
//!   2025年8月29日現在   full date, taken as-is
//!   2025年8月末現在     year and month only, normalized to the month's last day
//!
//! Some carriers print the date in parentheses after a table title, e.g.
//! `ユニットプライス・騰落率（2025年8月末）`, where the trailing marker is optional.

use chrono::{Datelike, NaiveDate};
use regex::{Captures, Regex};

/// Where the date is expected to appear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateNotation {
    /// Bare date followed by a marker such as 現在
    Plain,
    /// Date enclosed in （…） or (…)
    Parenthesized,
}

const YEAR_MONTH: &str = r"(?P<y>\d{4})\s*年\s*(?P<m>\d{1,2})\s*月";
const DAY: &str = r"\s*(?P<d>\d{1,2})\s*日";
const FULL_MARKER: &str = r"\s*(?:現在|時点|基準)";
const PARTIAL_MARKER: &str = r"\s*(?:末日?\s*(?:現在|時点)?|現在|時点)";

/// Find the reporting date. Full dates are tried before month-only ones.
pub fn extract_date(text: &str, notation: DateNotation) -> Result<Option<NaiveDate>, regex::Error> {
    extract_date_in(text, &[notation])
}

/// Like [`extract_date`] over several notations: a full date in any of them
/// beats a month-only date, and notations are tried in the given order.
pub fn extract_date_in(
    text: &str,
    notations: &[DateNotation],
) -> Result<Option<NaiveDate>, regex::Error> {
    for &notation in notations {
        let re = Regex::new(&full_pattern(notation))?;
        if let Some(date) = re.captures_iter(text).find_map(|c| full_date(&c)) {
            return Ok(Some(date));
        }
    }

    for &notation in notations {
        let re = Regex::new(&partial_pattern(notation))?;
        if let Some(date) = re.captures_iter(text).find_map(|c| month_end_date(&c)) {
            return Ok(Some(date));
        }
    }

    Ok(None)
}

fn full_pattern(notation: DateNotation) -> String {
    match notation {
        DateNotation::Plain => format!("{YEAR_MONTH}{DAY}{FULL_MARKER}"),
        DateNotation::Parenthesized => {
            format!(r"[（(]\s*{YEAR_MONTH}{DAY}(?:{FULL_MARKER})?\s*[）)]")
        }
    }
}

fn partial_pattern(notation: DateNotation) -> String {
    match notation {
        DateNotation::Plain => format!("{YEAR_MONTH}{PARTIAL_MARKER}"),
        DateNotation::Parenthesized => {
            format!(r"[（(]\s*{YEAR_MONTH}(?:{PARTIAL_MARKER})?\s*[）)]")
        }
    }
}

fn year_month(caps: &Captures<'_>) -> Option<(i32, u32)> {
    let year: i32 = caps.name("y")?.as_str().parse().ok()?;
    let month: u32 = caps.name("m")?.as_str().parse().ok()?;
    Some((year, month))
}

fn full_date(caps: &Captures<'_>) -> Option<NaiveDate> {
    let (year, month) = year_month(caps)?;
    let day: u32 = caps.name("d")?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_end_date(caps: &Captures<'_>) -> Option<NaiveDate> {
    let (year, month) = year_month(caps)?;
    last_day_of_month(year, month)
}

/// Last calendar day of the given month, or `None` for an invalid month
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    next.pred_opt()
}
