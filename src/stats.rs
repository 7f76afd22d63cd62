//! Summary statistics over a set of float records

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{FloatRecord, FloatStatus};

/// Key used in `by_basin` for records outside every basin box
pub const UNCLASSIFIED: &str = "unclassified";

/// Counts and measurement means for a set of records.
///
/// Means only cover records where the value was measured and are `None`
/// when no record measured it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FloatStatistics {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub mean_temperature: Option<f64>,
    pub mean_salinity: Option<f64>,
    pub mean_pressure: Option<f64>,
    pub mean_oxygen: Option<f64>,
    pub by_basin: BTreeMap<String, usize>,
}

#[derive(Debug, Default)]
struct RunningMean {
    sum: f64,
    count: usize,
}

impl RunningMean {
    fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value.filter(|v| v.is_finite()) {
            self.sum += v;
            self.count += 1;
        }
    }

    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

impl FloatStatistics {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a FloatRecord>,
    {
        let mut stats = Self::default();
        let mut temperature = RunningMean::default();
        let mut salinity = RunningMean::default();
        let mut pressure = RunningMean::default();
        let mut oxygen = RunningMean::default();

        for record in records {
            stats.total += 1;
            match record.status {
                FloatStatus::Active => stats.active += 1,
                FloatStatus::Inactive => stats.inactive += 1,
            }
            temperature.push(record.temperature);
            salinity.push(record.salinity);
            pressure.push(record.pressure);
            oxygen.push(record.oxygen);

            let basin = record
                .basin()
                .unwrap_or_else(|| UNCLASSIFIED.to_string());
            *stats.by_basin.entry(basin).or_insert(0) += 1;
        }

        stats.mean_temperature = temperature.mean();
        stats.mean_salinity = salinity.mean();
        stats.mean_pressure = pressure.mean();
        stats.mean_oxygen = oxygen.mean();
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_statistics() {
        let stats = FloatStatistics::from_records(&[]);
        assert_eq!(stats, FloatStatistics::default());
        assert_eq!(stats.mean_temperature, None);
    }

    #[test]
    fn test_means_skip_unmeasured_values() {
        let mut a = FloatRecord::new("A", 10.0, -140.0);
        a.temperature = Some(20.0);
        a.salinity = Some(35.0);
        let mut b = FloatRecord::new("B", -40.0, 0.0);
        b.temperature = Some(10.0);
        b.status = FloatStatus::Inactive;
        let c = FloatRecord::new("C", 40.0, 60.0);

        let stats = FloatStatistics::from_records(&[a, b, c]);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.inactive, 1);
        assert_eq!(stats.mean_temperature, Some(15.0));
        assert_eq!(stats.mean_salinity, Some(35.0));
        assert_eq!(stats.mean_pressure, None);
        assert_eq!(stats.mean_oxygen, None);
    }

    #[test]
    fn test_basin_counts() {
        let mut tagged = FloatRecord::new("tagged", 0.0, 0.0);
        tagged.region = Some("Southern".to_string());
        let records = vec![
            FloatRecord::new("A", 10.0, -140.0),
            FloatRecord::new("B", 12.0, 170.0),
            FloatRecord::new("C", -40.0, 0.0),
            FloatRecord::new("D", 40.0, 60.0),
            tagged,
        ];

        let stats = FloatStatistics::from_records(&records);
        assert_eq!(stats.by_basin.get("pacific"), Some(&2));
        assert_eq!(stats.by_basin.get("atlantic"), Some(&1));
        assert_eq!(stats.by_basin.get("southern"), Some(&1));
        assert_eq!(stats.by_basin.get(UNCLASSIFIED), Some(&1));
    }
}
