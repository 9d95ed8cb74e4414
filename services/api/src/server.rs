use crate::cli::ServeArgs;
use crate::infra::{AppState, ReceptionistServices};
use crate::routes::with_receptionist_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use receptionist::config::AppConfig;
use receptionist::error::AppError;
use receptionist::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        started_at: Instant::now(),
        environment: config.environment,
    };

    let services = ReceptionistServices::from_config(&config)?;
    let app = with_receptionist_routes(services)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "receptionist bot service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
