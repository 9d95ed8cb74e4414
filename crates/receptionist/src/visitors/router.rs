use std::sync::Arc;

use axum::{body::Bytes, extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::{debug, info};

use super::domain::{PreCallContext, VisitorInfo};
use crate::error::AppError;
use crate::lookup::router::function_cors;

/// Router for the pre-call webhook.
pub fn visitor_router(visitors: Vec<VisitorInfo>) -> Router {
    Router::new()
        .route(
            "/api/webhooks/pre-call",
            get(status_handler).post(pre_call_handler),
        )
        .layer(function_cors())
        .with_state(Arc::new(visitors))
}

pub(crate) async fn pre_call_handler(
    State(visitors): State<Arc<Vec<VisitorInfo>>>,
    body: Bytes,
) -> Result<Json<PreCallContext>, AppError> {
    let payload: Value = serde_json::from_slice(&body)?;
    debug!(body = %payload, "pre-call webhook received");

    let context = PreCallContext::pick(&visitors, &mut rand::thread_rng(), Utc::now())
        .ok_or_else(|| AppError::Internal("no visitors configured".to_string()))?;
    info!(visitor_id = %context.visitor_info.id, "pre-call context prepared");
    Ok(Json(context))
}

pub(crate) async fn status_handler() -> Json<Value> {
    Json(json!({
        "message": "Pre-call webhook endpoint is active",
        "timestamp": Utc::now(),
    }))
}
