use axum::{
    body::Bytes,
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use super::service::{lookup_employee, FunctionCallResponse, LookupResult};
use crate::directory::EmployeeDirectory;

pub const EMPLOYEE_LOOKUP_PATH: &str = "/api/functions/employee-lookup";

/// Router exposing the employee lookup function to the voice platform.
pub fn lookup_router(directory: EmployeeDirectory) -> Router {
    Router::new()
        .route(
            EMPLOYEE_LOOKUP_PATH,
            get(describe_handler)
                .post(lookup_handler)
                .layer(function_cors())
                .options(preflight_handler),
        )
        .with_state(directory)
}

/// Browser and platform callers hit this endpoint cross-origin.
///
/// `CorsLayer` answers every `OPTIONS` request itself, so the lookup route
/// layers it beneath [`preflight_handler`] instead of around it.
pub fn function_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

pub(crate) fn status_for(result: &LookupResult) -> StatusCode {
    match result {
        LookupResult::InvalidRequest => StatusCode::BAD_REQUEST,
        LookupResult::Found(_) | LookupResult::NotFound(_) => StatusCode::OK,
    }
}

pub(crate) async fn lookup_handler(
    State(directory): State<EmployeeDirectory>,
    body: Bytes,
) -> Response {
    let payload: Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(err) => {
            error!(error = %err, "function call body is not valid JSON");
            let response = FunctionCallResponse::failure("Internal server error");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    info!(body = %payload, "function call received");

    let result = lookup_employee(&directory, &payload);
    let status = status_for(&result);
    (status, Json(FunctionCallResponse::from(result))).into_response()
}

pub(crate) async fn describe_handler() -> Json<Value> {
    Json(json!({
        "message": "Employee lookup function is active",
        "description": "POST with employee_name to lookup employee information",
        "example": { "employee_name": "Sarah Johnson" },
        "supported_formats": [
            { "employee_name": "Sarah Johnson" },
            { "parameters": { "employee_name": "Sarah Johnson" } },
            { "args": ["Sarah Johnson"] },
        ],
    }))
}

const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// Answers both plain `OPTIONS` requests and CORS preflights with `{}`.
pub(crate) async fn preflight_handler() -> impl IntoResponse {
    (
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS),
        ],
        Json(json!({})),
    )
}
