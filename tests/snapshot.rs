use std::io::Write;

use argo_float_query::{
    errors::FloatQueryError, snapshot::load_snapshot, stats::FloatStatistics, DateRange,
    FloatQueryEngine, QueryFilter,
};
use tempfile::NamedTempFile;

const SNAPSHOT: &str = r#"{
    "status": "success",
    "count": 5,
    "floats": [
        {
            "id": "WMO_2021_Pac_5904321_42",
            "lat": -35.0,
            "lon": 150.0,
            "temperature": 18.5,
            "salinity": 35.2,
            "pressure": 4.8,
            "oxygen": 5.1,
            "cycle": 42,
            "time": "2021-03-14 00:00:00",
            "status": "active",
            "data_source": "demo"
        },
        {
            "id": "WMO_2020_Atl_6901234_7",
            "lat": 25.5,
            "lon": -40.3,
            "temperature": 22.5,
            "salinity": null,
            "cycle": 7,
            "time": "2020-08-02",
            "status": "inactive"
        },
        {
            "id": "WMO_2021_Ind_2902111_3",
            "lat": -10.0,
            "lon": 75.0,
            "cycle": 3,
            "time": "2021-11-30T08:15:00Z",
            "status": "active"
        },
        {
            "id": "WMO_2019_Sou_5905000_118",
            "lat": -65.0,
            "lon": 20.0,
            "cycle": 118,
            "time": "2019-01-20",
            "status": "active",
            "region": "Southern"
        },
        {
            "id": "WMO_unknown_1",
            "lat": 5.0,
            "lon": -140.0,
            "time": null,
            "status": "active"
        }
    ]
}"#;

fn write_snapshot(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_load_and_query_snapshot() {
    let file = write_snapshot(SNAPSHOT);
    let records = load_snapshot(file.path()).await.unwrap();
    assert_eq!(records.len(), 5);

    let engine = FloatQueryEngine::default();

    let outcome = engine
        .filter_floats(&records, &QueryFilter::new().search_term("Pacific"))
        .unwrap();
    let ids: Vec<_> = outcome.floats.iter().map(|&r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["WMO_2021_Pac_5904321_42", "WMO_unknown_1"]);

    let outcome = engine
        .filter_floats(&records, &QueryFilter::new().search_term("indian 2021"))
        .unwrap();
    let ids: Vec<_> = outcome.floats.iter().map(|&r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["WMO_2021_Ind_2902111_3"]);
    assert_eq!(outcome.suggested_date_range, DateRange::year(2021));
}

#[tokio::test]
async fn test_query_by_cycle_and_coordinates() {
    let file = write_snapshot(SNAPSHOT);
    let records = load_snapshot(file.path()).await.unwrap();
    let engine = FloatQueryEngine::default();

    let outcome = engine
        .filter_floats(&records, &QueryFilter::new().search_term("118"))
        .unwrap();
    assert_eq!(outcome.len(), 1);
    assert_eq!(outcome.floats[0].id, "WMO_2019_Sou_5905000_118");

    let outcome = engine
        .filter_floats(&records, &QueryFilter::new().search_term("25.5,-40.3"))
        .unwrap();
    assert_eq!(outcome.len(), 1);
    assert_eq!(outcome.floats[0].cycle, Some(7));
}

#[tokio::test]
async fn test_statistics_over_query_result() {
    let file = write_snapshot(SNAPSHOT);
    let records = load_snapshot(file.path()).await.unwrap();

    let outcome = FloatQueryEngine::default()
        .filter_floats(&records, &QueryFilter::new().start_date("2020-01-01"))
        .unwrap();
    assert_eq!(outcome.len(), 3);

    let stats = FloatStatistics::from_records(outcome.floats.iter().copied());
    assert_eq!(stats.total, 3);
    assert_eq!(stats.inactive, 1);
    assert_eq!(stats.mean_temperature, Some(20.5));
    assert_eq!(stats.mean_salinity, Some(35.2));
    assert_eq!(stats.by_basin.get("pacific"), Some(&1));
    assert_eq!(stats.by_basin.get("atlantic"), Some(&1));
    assert_eq!(stats.by_basin.get("indian"), Some(&1));
}

#[tokio::test]
async fn test_invalid_query_is_reported() {
    let file = write_snapshot(SNAPSHOT);
    let records = load_snapshot(file.path()).await.unwrap();

    let result = FloatQueryEngine::default().filter_floats(
        &records,
        &QueryFilter::new()
            .start_date("2022-01-01")
            .end_date("2021-01-01"),
    );
    assert!(matches!(result, Err(FloatQueryError::InvalidRange { .. })));
}

#[tokio::test]
async fn test_missing_snapshot_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_snapshot(&dir.path().join("missing.json")).await;
    assert!(matches!(result, Err(FloatQueryError::IoError(_))));
}
