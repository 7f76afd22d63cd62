//! Errors for ARGO float queries
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FloatQueryError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid coordinates for float {id}: lat={lat}, lon={lon}")]
    InvalidCoordinates { id: String, lat: f64, lon: f64 },

    #[error("Unknown region label: {0}")]
    UnknownRegion(String),

    #[error("Duplicate float id in snapshot: {0}")]
    DuplicateId(String),

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Configuration error")]
    ConfigError(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("IO error")]
    IoError(#[from] std::io::Error),
}
