//! Date range filtering

use chrono::NaiveDate;

use crate::{
    errors::FloatQueryError,
    models::{DateRange, FloatRecord},
};

/// Parse an ISO `YYYY-MM-DD` calendar date
pub fn parse_date(value: &str) -> Result<NaiveDate, FloatQueryError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| FloatQueryError::InvalidDate(value.to_string()))
}

fn supplied(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl DateRange {
    /// Build a range from optional caller bounds.
    ///
    /// Each bound falls back to the matching end of `default` on its own.
    /// Blank strings count as not supplied.
    pub fn resolve(
        start: Option<&str>,
        end: Option<&str>,
        default: DateRange,
    ) -> Result<Self, FloatQueryError> {
        let start = supplied(start)
            .map(parse_date)
            .transpose()?
            .unwrap_or(default.start());
        let end = supplied(end)
            .map(parse_date)
            .transpose()?
            .unwrap_or(default.end());
        DateRange::new(start, end)
    }
}

/// Restricts records to an inclusive date range.
///
/// A range that does not narrow the default range filters nothing: every
/// record passes, dated or not. Under a narrowing range, records without a
/// `time` are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemporalFilter {
    range: DateRange,
    narrowing: bool,
}

impl TemporalFilter {
    pub fn new(range: DateRange, default: &DateRange) -> Self {
        Self {
            range,
            narrowing: range.narrows(default),
        }
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn is_narrowing(&self) -> bool {
        self.narrowing
    }

    pub fn accepts(&self, record: &FloatRecord) -> bool {
        if !self.narrowing {
            return true;
        }
        record.time.is_some_and(|date| self.range.contains(date))
    }

    /// Records accepted by the filter, in input order
    pub fn apply<'a>(&self, records: &'a [FloatRecord]) -> Vec<&'a FloatRecord> {
        records.iter().filter(|r| self.accepts(r)).collect()
    }
}
