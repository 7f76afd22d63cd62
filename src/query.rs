//! Float query engine.
//!
//! A query runs the temporal filter first, then the free-text search, over a
//! caller-owned slice of records. The result borrows the matching records in
//! input order. Years in the search term replace the date range for that
//! query, spanning the earliest to the latest year mentioned, and are handed
//! back as `suggested_date_range` so the caller can keep them for later
//! queries.

pub mod search;
pub mod spatial;
pub mod temporal;

use serde::Serialize;
use tracing::debug;

use crate::{
    errors::FloatQueryError,
    models::{DateRange, FloatRecord, QueryFilter},
};

pub use search::SearchTerm;
pub use spatial::RegionLabel;
pub use temporal::TemporalFilter;

/// Result of one query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryOutcome<'a> {
    /// Matching records, in input order
    pub floats: Vec<&'a FloatRecord>,
    /// Date range the records were filtered with
    pub effective_range: DateRange,
    /// Year span taken from the search term, if it contained any years
    pub suggested_date_range: Option<DateRange>,
}

impl QueryOutcome<'_> {
    pub fn len(&self) -> usize {
        self.floats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floats.is_empty()
    }
}

/// Stateless query engine.
///
/// Holds only the default date range, so one engine can serve concurrent
/// callers by shared reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatQueryEngine {
    default_range: DateRange,
}

impl FloatQueryEngine {
    pub fn new(default_range: DateRange) -> Self {
        Self { default_range }
    }

    pub fn default_range(&self) -> DateRange {
        self.default_range
    }

    /// Filter `records` by date range and search term.
    ///
    /// Explicit dates are validated even when a year in the search term
    /// overrides them.
    pub fn filter_floats<'a>(
        &self,
        records: &'a [FloatRecord],
        filter: &QueryFilter,
    ) -> Result<QueryOutcome<'a>, FloatQueryError> {
        let explicit_range = DateRange::resolve(
            filter.start_date.as_deref(),
            filter.end_date.as_deref(),
            self.default_range,
        )?;

        let raw_term = filter.search_term.as_deref().unwrap_or_default();
        let suggested_date_range = search::extract_years(raw_term)
            .and_then(|(first, last)| DateRange::years(first, last));
        if let Some(range) = suggested_date_range {
            debug!(
                "Search term {:?} selects {} to {}",
                raw_term,
                range.start(),
                range.end()
            );
        }

        let effective_range = suggested_date_range.unwrap_or(explicit_range);
        let temporal = TemporalFilter::new(effective_range, &self.default_range);
        let term = SearchTerm::parse(raw_term);

        let floats: Vec<&FloatRecord> = temporal
            .apply(records)
            .into_iter()
            .filter(|record| term.as_ref().map_or(true, |t| t.matches(record)))
            .collect();

        debug!(
            "Query matched {} of {} floats (range {} to {}, {})",
            floats.len(),
            records.len(),
            temporal.range().start(),
            temporal.range().end(),
            if temporal.is_narrowing() { "narrowing" } else { "unfiltered" }
        );

        Ok(QueryOutcome {
            floats,
            effective_range,
            suggested_date_range,
        })
    }
}

/// Run one query with the default engine
pub fn filter_floats<'a>(
    records: &'a [FloatRecord],
    start_date: Option<&str>,
    end_date: Option<&str>,
    search_term: Option<&str>,
) -> Result<QueryOutcome<'a>, FloatQueryError> {
    let filter = QueryFilter {
        start_date: start_date.map(str::to_string),
        end_date: end_date.map(str::to_string),
        search_term: search_term.map(str::to_string),
    };
    FloatQueryEngine::default().filter_floats(records, &filter)
}
