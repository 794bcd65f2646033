use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use naam_ai::config::AppConfig;
use naam_ai::error::AppError;
use naam_ai::predictor::GenderPredictor;
use naam_ai::telemetry;
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::{load_database, AppState};
use crate::routes::with_service_routes;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(database) = args.database.take() {
        config.database.path = Some(database);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let database = load_database(config.database.path.as_deref())?;
    let known_names = database.len();
    let predictor = Arc::new(GenderPredictor::new(database));

    let app = with_service_routes(predictor)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, known_names, "gender prediction service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
