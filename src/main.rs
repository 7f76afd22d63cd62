//! ARGO float query utility

use argo_float_query::{
    config::AppConfig, errors::FloatQueryError, query::FloatQueryEngine, snapshot,
    stats::FloatStatistics, DateRange, FloatRecord,
};
use serde::Serialize;
use tracing::{error, info};

/// Response body in the shape of the locations endpoint
#[derive(Debug, Serialize)]
struct LocationsResponse<'a> {
    status: &'static str,
    count: usize,
    floats: &'a [&'a FloatRecord],
    effective_range: DateRange,
    suggested_date_range: Option<DateRange>,
    statistics: FloatStatistics,
}

#[tokio::main]
async fn main() -> Result<(), FloatQueryError> {
    #[cfg(feature = "dotenvy")]
    dotenvy::dotenv().ok();

    // Logs go to stderr, stdout carries the response
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let engine = FloatQueryEngine::new(config.defaults.date_range()?);
    let records = snapshot::load_snapshot(&config.snapshot.path).await?;
    let filter = config.query.to_filter();

    let outcome = match engine.filter_floats(&records, &filter) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Query failed: {}", e);
            return Err(e);
        }
    };
    info!(
        "Query returned {} of {} floats",
        outcome.len(),
        records.len()
    );

    let response = LocationsResponse {
        status: "success",
        count: outcome.len(),
        floats: &outcome.floats,
        effective_range: outcome.effective_range,
        suggested_date_range: outcome.suggested_date_range,
        statistics: FloatStatistics::from_records(outcome.floats.iter().copied()),
    };
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
