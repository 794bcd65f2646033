use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use naam_ai::error::AppError;
use naam_ai::predictor::NameDatabase;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the name database backing stage-3 lookups. A `.csv` extension selects
/// the roster loader; anything else is treated as a JSON object. No path means
/// an empty database, which is a valid configuration.
pub(crate) fn load_database(path: Option<&Path>) -> Result<NameDatabase, AppError> {
    let Some(path) = path else {
        return Ok(NameDatabase::empty());
    };

    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let db = if is_csv {
        NameDatabase::from_csv_path(path)?
    } else {
        NameDatabase::from_json_path(path)?
    };
    Ok(db)
}
