//! Application configuration

use std::path::PathBuf;

use chrono::NaiveDate;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde_with::{serde_as, NoneAsEmptyString};

use crate::errors::FloatQueryError;
use crate::models::{DateRange, QueryFilter};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub snapshot: SnapshotConfig,
    #[serde(default)]
    pub defaults: DefaultRangeConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SnapshotConfig {
    pub path: PathBuf,
}

/// Date range applied when a query leaves its bounds unset
#[derive(Debug, Deserialize, Clone)]
pub struct DefaultRangeConfig {
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,
    #[serde(default = "default_end_date")]
    pub end_date: NaiveDate,
}

fn default_start_date() -> NaiveDate {
    DateRange::default().start()
}

fn default_end_date() -> NaiveDate {
    DateRange::default().end()
}

impl Default for DefaultRangeConfig {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            end_date: default_end_date(),
        }
    }
}

/// Query to run; empty strings are treated as unset
#[serde_as]
#[derive(Debug, Deserialize, Clone, Default)]
pub struct QueryConfig {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub search_term: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(
                Environment::with_prefix("FLOATQUERY")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), FloatQueryError> {
        self.snapshot.validate()?;
        self.defaults.date_range()?;
        Ok(())
    }
}

impl SnapshotConfig {
    fn validate(&self) -> Result<(), FloatQueryError> {
        if self.path.as_os_str().is_empty() {
            return Err(FloatQueryError::ConfigurationError {
                message: "Snapshot path cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl DefaultRangeConfig {
    pub fn date_range(&self) -> Result<DateRange, FloatQueryError> {
        DateRange::new(self.start_date, self.end_date).map_err(|e| {
            FloatQueryError::ConfigurationError {
                message: format!("Default date range is invalid: {}", e),
            }
        })
    }
}

impl QueryConfig {
    pub fn to_filter(&self) -> QueryFilter {
        QueryFilter {
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            search_term: self.search_term.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_load_config() {
        env::set_var("FLOATQUERY__SNAPSHOT__PATH", "/tmp/floats.json");
        env::set_var("FLOATQUERY__DEFAULTS__START_DATE", "2016-01-01");
        env::set_var("FLOATQUERY__QUERY__SEARCH_TERM", "pacific 2021");
        env::set_var("FLOATQUERY__QUERY__START_DATE", "");

        let config = AppConfig::load().unwrap();
        assert_eq!(config.snapshot.path, PathBuf::from("/tmp/floats.json"));
        assert_eq!(
            config.defaults.start_date,
            NaiveDate::from_ymd_opt(2016, 1, 1).unwrap()
        );
        assert_eq!(config.defaults.end_date, default_end_date());
        assert_eq!(config.query.search_term.as_deref(), Some("pacific 2021"));
        assert_eq!(config.query.start_date, None);
        assert!(config.validate().is_ok());

        let filter = config.query.to_filter();
        assert_eq!(filter.search_term.as_deref(), Some("pacific 2021"));
    }

    #[test]
    fn test_validate_invalid_default_range() {
        let config = AppConfig {
            snapshot: SnapshotConfig {
                path: PathBuf::from("/tmp/floats.json"),
            },
            defaults: DefaultRangeConfig {
                start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            },
            query: QueryConfig::default(),
        };

        assert!(matches!(
            config.validate(),
            Err(FloatQueryError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_validate_invalid_path() {
        let config = SnapshotConfig {
            path: PathBuf::from(""),
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_range_config() {
        let range = DefaultRangeConfig::default().date_range().unwrap();
        assert_eq!(range, DateRange::default());
    }
}
