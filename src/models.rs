//! Data models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::FloatQueryError;
use crate::query::spatial;
use serde_helpers::*;

/// Operational status of a float
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloatStatus {
    #[default]
    Active,
    Inactive,
}

/// One observation reported by an ARGO float.
///
/// Records come from an upstream snapshot and are never mutated by the query
/// engine. Measurements that are absent were not measured; they are not zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatRecord {
    /// WMO-style identifier, unique within a snapshot
    pub id: String,
    /// Latitude in decimal degrees, -90..=90
    pub lat: f64,
    /// Longitude in decimal degrees, -180..=180
    pub lon: f64,
    /// Sea temperature in degrees Celsius
    pub temperature: Option<f64>,
    /// Practical salinity (PSU)
    pub salinity: Option<f64>,
    /// Pressure in decibar
    pub pressure: Option<f64>,
    /// Dissolved oxygen
    pub oxygen: Option<f64>,
    /// Profiling cycle number
    pub cycle: Option<u32>,
    /// Observation date.
    ///
    /// Upstream sends plain dates as well as timestamps; only the calendar
    /// date is kept.
    #[serde(default, deserialize_with = "deserialize_observation_date")]
    pub time: Option<NaiveDate>,
    #[serde(default)]
    pub status: FloatStatus,
    /// Precomputed basin label, e.g. "Pacific"
    pub region: Option<String>,
}

impl FloatRecord {
    /// Create an active record with no measurements
    pub fn new(id: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id: id.into(),
            lat,
            lon,
            temperature: None,
            salinity: None,
            pressure: None,
            oxygen: None,
            cycle: None,
            time: None,
            status: FloatStatus::Active,
            region: None,
        }
    }

    /// Check the coordinate invariant
    pub fn validate(&self) -> Result<(), FloatQueryError> {
        let lat_ok = self.lat.is_finite() && (-90.0..=90.0).contains(&self.lat);
        let lon_ok = self.lon.is_finite() && (-180.0..=180.0).contains(&self.lon);
        if !(lat_ok && lon_ok) {
            return Err(FloatQueryError::InvalidCoordinates {
                id: self.id.clone(),
                lat: self.lat,
                lon: self.lon,
            });
        }
        Ok(())
    }

    /// Basin label of this record, lower-cased.
    ///
    /// Uses the precomputed `region` when upstream supplied one, otherwise
    /// derives it from the coordinates.
    pub fn basin(&self) -> Option<String> {
        match self.region.as_deref().map(str::trim) {
            Some(region) if !region.is_empty() => Some(region.to_lowercase()),
            _ => spatial::primary_basin(self.lat, self.lon).map(str::to_string),
        }
    }
}

/// Inclusive calendar date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range, failing if `start` is after `end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, FloatQueryError> {
        if start > end {
            return Err(FloatQueryError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// January 1 to December 31 of `year`
    pub fn year(year: i32) -> Option<Self> {
        Self::years(year, year)
    }

    /// January 1 of `first` to December 31 of `last`
    pub fn years(first: i32, last: i32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(first, 1, 1)?;
        let end = NaiveDate::from_ymd_opt(last, 12, 31)?;
        (start <= end).then_some(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// True if this range cuts off any part of `other`
    pub fn narrows(&self, other: &DateRange) -> bool {
        self.start > other.start || self.end < other.end
    }
}

impl Default for DateRange {
    /// 2015-01-01 to 2024-12-31
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2015, 1, 1).unwrap_or(NaiveDate::MIN),
            end: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or(NaiveDate::MAX),
        }
    }
}

/// Per-request filter parameters.
///
/// Dates are kept as the caller supplied them and parsed when the query
/// runs, so malformed input surfaces as a query error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryFilter {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub search_term: Option<String>,
}

impl QueryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_date(mut self, date: impl Into<String>) -> Self {
        self.start_date = Some(date.into());
        self
    }

    pub fn end_date(mut self, date: impl Into<String>) -> Self {
        self.end_date = Some(date.into());
        self
    }

    pub fn search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }
}

/// Custom deserializers
mod serde_helpers {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer};

    const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

    pub fn deserialize_observation_date<'de, D>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        match value.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => parse_observation_date(s)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("unrecognised observation time: {}", s))),
        }
    }

    fn parse_observation_date(s: &str) -> Option<NaiveDate> {
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(date);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.date_naive());
        }
        if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%:z") {
            return Some(dt.date_naive());
        }
        DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(|dt| dt.date())
    }
}
