//! Free-text search over float records.
//!
//! A term matches a record if any rule matches: id substring, formatted
//! coordinates, cycle number, basin keyword or latitude band keyword. The
//! keyword rules always classify from coordinates and ignore the record's
//! precomputed `region`.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::FloatRecord;
use crate::query::spatial;

static YEAR_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(20\d{2})\b").expect("year pattern is valid"));

/// Trimmed, lower-cased, non-empty search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Normalize a raw term. Blank input means "match everything" and yields
    /// `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let term = raw.trim().to_lowercase();
        if term.is_empty() {
            None
        } else {
            Some(Self(term))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, record: &FloatRecord) -> bool {
        matches(record, &self.0)
    }
}

/// Earliest and latest `20xx` year tokens in the raw search term
pub fn extract_years(raw: &str) -> Option<(i32, i32)> {
    YEAR_TOKEN
        .captures_iter(raw)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<i32>().ok())
        .fold(None, |span, year| match span {
            None => Some((year, year)),
            Some((first, last)) => Some((first.min(year), last.max(year))),
        })
}

/// Match a record against an already normalized term
pub fn matches(record: &FloatRecord, term: &str) -> bool {
    matches_id(record, term)
        || matches_coordinates(record, term)
        || matches_cycle(record, term)
        || matches_basin_keyword(record, term)
        || matches_band_keyword(record, term)
}

fn matches_id(record: &FloatRecord, term: &str) -> bool {
    record.id.to_lowercase().contains(term)
}

fn matches_coordinates(record: &FloatRecord, term: &str) -> bool {
    format!("{:.1},{:.1}", record.lat, record.lon).contains(term)
        || format!("{:.0},{:.0}", record.lat, record.lon).contains(term)
}

fn matches_cycle(record: &FloatRecord, term: &str) -> bool {
    record
        .cycle
        .is_some_and(|cycle| cycle.to_string().contains(term))
}

fn matches_basin_keyword(record: &FloatRecord, term: &str) -> bool {
    let (lat, lon) = (record.lat, record.lon);
    (term.contains("atlantic") && spatial::is_atlantic(lat, lon))
        || (term.contains("pacific") && spatial::is_pacific(lat, lon))
        || (term.contains("indian") && spatial::is_indian(lat, lon))
}

fn matches_band_keyword(record: &FloatRecord, term: &str) -> bool {
    let lat = record.lat;
    ((term.contains("north") || term == "arctic") && spatial::is_north(lat))
        || ((term.contains("south") || term == "antarctic") && spatial::is_south(lat))
        || ((term.contains("equatorial") || term == "equator") && spatial::is_equatorial(lat))
}
