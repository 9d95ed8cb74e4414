use crate::infra::{AppState, ReceptionistServices};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use chrono::Utc;
use receptionist::bots::bot_router;
use receptionist::calls::call_router;
use receptionist::lookup::lookup_router;
use receptionist::visitors::visitor_router;
use serde_json::json;

pub(crate) fn with_receptionist_routes(services: ReceptionistServices) -> Router {
    let ReceptionistServices {
        directory,
        bots,
        calls,
        visitors,
    } = services;

    lookup_router(directory)
        .merge(bot_router(bots))
        .merge(call_router(calls))
        .merge(visitor_router(visitors))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

/// `HEAD /health` is answered by the same route with the body stripped.
pub(crate) async fn healthcheck(Extension(state): Extension<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "uptime_seconds": state.started_at.elapsed().as_secs_f64(),
        "version": env!("CARGO_PKG_VERSION"),
        "environment": state.environment.label(),
        "services": {
            "api": "operational",
            "webhooks": "operational",
            "functions": "operational",
        },
    }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
