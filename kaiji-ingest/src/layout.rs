//! Catalog-driven row matching shared by the carrier strategies.
//!
//! For each catalog entry the canonical name and then its aliases are looked
//! up as the first cell of a line. The carrier layout is applied to the
//! remainder of each such line, or to the next non-blank line when the table
//! wrapped, and the first occurrence that fits wins. Headings and fund lists
//! that merely repeat a name are skipped this way.

use kaiji_core::{CatalogEntry, ExtractionWarning, FundRecord, WarningKind};
use regex::{Captures, Regex};
use tracing::warn;

use crate::numeric::parse_signed;
use crate::text::BULLET_GLYPHS;

/// Regex fragment: an unsigned unit price
pub(crate) const PRICE: &str = r"\d[\d,]*\.\d+";

/// Where a catalog entry's name was found
#[derive(Debug, Clone, Copy)]
pub(crate) struct NameHit<'t> {
    /// Name or alias that matched
    pub candidate: &'static str,
    /// Text following the name on its own line
    pub rest: &'t str,
    /// Next non-blank line, for wrapped rows
    pub next: Option<&'t str>,
}

impl<'t> NameHit<'t> {
    /// Apply `layout` to the name line, then to the continuation line
    pub fn values(&self, layout: &Regex) -> Option<Captures<'t>> {
        layout
            .captures(self.rest)
            .or_else(|| self.next.and_then(|line| layout.captures(line.trim())))
    }
}

/// Every line-start occurrence of `entry`, candidates in declaration order
/// and lines in document order within each candidate
pub(crate) fn find_entry<'t>(
    lines: &[&'t str],
    entry: &CatalogEntry,
) -> Result<Vec<NameHit<'t>>, regex::Error> {
    let mut hits = Vec::new();
    for candidate in entry.candidates() {
        let re = Regex::new(&format!(
            r"^[\s{BULLET_GLYPHS}]*{}(?:\s+(?P<rest>.*))?$",
            regex::escape(candidate)
        ))?;

        for (i, &line) in lines.iter().enumerate() {
            let Some(caps) = re.captures(line) else {
                continue;
            };
            let rest = caps.name("rest").map(|m| m.as_str()).unwrap_or("");
            let next = lines[i + 1..]
                .iter()
                .find(|l| !l.trim().is_empty())
                .copied();
            hits.push(NameHit {
                candidate,
                rest,
                next,
            });
        }
    }

    Ok(hits)
}

/// Run every catalog entry through `layout` and `build`.
///
/// The first occurrence whose values fit `layout` is built. Entries that are
/// not found, fit the layout nowhere, or fail in `build` are omitted from the
/// records and reported as warnings.
pub(crate) fn extract_entries<F>(
    text: &str,
    catalog: &[CatalogEntry],
    layout: &Regex,
    mut build: F,
) -> Result<(Vec<FundRecord>, Vec<ExtractionWarning>), regex::Error>
where
    F: FnMut(&CatalogEntry, &Captures<'_>) -> Result<FundRecord, WarningKind>,
{
    let lines: Vec<&str> = text.lines().collect();
    let mut records = Vec::new();
    let mut warnings = Vec::new();

    for entry in catalog {
        let hits = find_entry(&lines, entry)?;
        let Some(first) = hits.first() else {
            warn!(code = entry.code, name = entry.name, "coverage gap: account not found");
            warnings.push(ExtractionWarning::new(entry, WarningKind::NotFound));
            continue;
        };

        let mismatch = |hit: &NameHit<'_>| WarningKind::LayoutMismatch {
            line: format!("{} {}", hit.candidate, hit.rest)
                .trim_end()
                .to_string(),
        };

        let fitted = hits
            .iter()
            .find_map(|hit| hit.values(layout).map(|caps| (hit, caps)));
        let built = match fitted {
            // a matched row with nothing readable is not a record
            Some((hit, caps)) => build(entry, &caps).and_then(|r| {
                if r.is_blank() {
                    Err(mismatch(hit))
                } else {
                    Ok(r)
                }
            }),
            None => Err(mismatch(first)),
        };

        match built {
            Ok(record) => records.push(record),
            Err(kind) => {
                let w = ExtractionWarning::new(entry, kind);
                warn!(code = entry.code, "{w}");
                warnings.push(w);
            }
        }
    }

    Ok((records, warnings))
}

/// Record builder for whitespace-separated layouts.
///
/// Reads the optional groups `price`, `r1m`, `r3m`, `r6m` and `r1y`; groups
/// the layout does not define stay `None`, as do dash placeholders.
pub(crate) fn signed_fields(
    entry: &CatalogEntry,
    caps: &Captures<'_>,
) -> Result<FundRecord, WarningKind> {
    let field = |name: &str| caps.name(name).and_then(|m| parse_signed(m.as_str()));

    let mut record = FundRecord::for_entry(entry);
    record.unit_price = field("price");
    record.return_1m = field("r1m");
    record.return_3m = field("r3m");
    record.return_6m = field("r6m");
    record.return_1y = field("r1y");
    Ok(record)
}
