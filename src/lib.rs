//! Date, region and free-text filtering for ARGO float snapshots

pub mod config;
pub mod errors;
pub mod models;
pub mod query;
pub mod snapshot;
pub mod stats;

pub use errors::FloatQueryError;
pub use models::{DateRange, FloatRecord, FloatStatus, QueryFilter};
pub use query::{filter_floats, FloatQueryEngine, QueryOutcome};
