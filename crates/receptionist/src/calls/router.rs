use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::domain::CallLog;
use super::store::CallLogStore;
use crate::error::AppError;
use crate::lookup::router::function_cors;
use crate::openmic::OpenMicClient;

/// Shared state for the call log routes.
pub struct CallRoutesState<S> {
    pub store: Arc<S>,
    pub upstream: OpenMicClient,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CallLogQuery {
    #[serde(default)]
    pub(crate) bot_uid: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaceCallRequest {
    pub(crate) phone_number: String,
    pub(crate) bot_uid: String,
}

/// Router for the post-call webhook and upstream call history.
pub fn call_router<S>(state: Arc<CallRoutesState<S>>) -> Router
where
    S: CallLogStore + 'static,
{
    Router::new()
        .route(
            "/api/webhooks/post-call",
            get(list_logs_handler::<S>).post(post_call_handler::<S>),
        )
        .route(
            "/api/calls",
            get(upstream_logs_handler::<S>).post(place_call_handler::<S>),
        )
        .layer(function_cors())
        .with_state(state)
}

pub(crate) async fn post_call_handler<S>(
    State(state): State<Arc<CallRoutesState<S>>>,
    body: Bytes,
) -> Result<Json<Value>, AppError>
where
    S: CallLogStore + 'static,
{
    let payload: Value = serde_json::from_slice(&body)?;

    let log = CallLog::from_webhook(&payload, Utc::now());
    let call_id = log.id.clone();
    let timestamp = log.timestamp;
    let bot_uid = log.bot_uid.clone();

    // File-backed stores write synchronously while holding their lock.
    let store = Arc::clone(&state.store);
    tokio::task::spawn_blocking(move || store.append(log))
        .await
        .map_err(|err| AppError::Internal(format!("call log task failed: {err}")))??;

    info!(%call_id, %bot_uid, "call log stored");
    Ok(Json(json!({
        "success": true,
        "message": "Call log recorded successfully",
        "call_id": call_id,
        "timestamp": timestamp,
    })))
}

pub(crate) async fn list_logs_handler<S>(
    State(state): State<Arc<CallRoutesState<S>>>,
) -> Result<Json<Vec<CallLog>>, AppError>
where
    S: CallLogStore + 'static,
{
    Ok(Json(state.store.list()?))
}

pub(crate) async fn upstream_logs_handler<S>(
    State(state): State<Arc<CallRoutesState<S>>>,
    Query(query): Query<CallLogQuery>,
) -> Json<Vec<Value>>
where
    S: CallLogStore + 'static,
{
    let bot_uid = query.bot_uid.as_deref().filter(|uid| !uid.is_empty());
    Json(state.upstream.call_logs(bot_uid).await)
}

pub(crate) async fn place_call_handler<S>(
    State(state): State<Arc<CallRoutesState<S>>>,
    Json(request): Json<PlaceCallRequest>,
) -> Result<Json<Value>, AppError>
where
    S: CallLogStore + 'static,
{
    let body = state
        .upstream
        .create_phone_call(&request.phone_number, &request.bot_uid)
        .await?;
    Ok(Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calls::store::{CallLogError, InMemoryCallLogStore, JsonFileCallLogStore};
    use crate::config::{OpenMicConfig, DEFAULT_OPENMIC_API_BASE};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    struct BrokenStore;

    impl CallLogStore for BrokenStore {
        fn append(&self, _log: CallLog) -> Result<(), CallLogError> {
            Err(CallLogError::Unavailable("disk full".to_string()))
        }
        fn list(&self) -> Result<Vec<CallLog>, CallLogError> {
            Err(CallLogError::Unavailable("disk full".to_string()))
        }
    }

    fn state<S: CallLogStore>(store: S) -> Arc<CallRoutesState<S>> {
        let upstream = OpenMicClient::new(OpenMicConfig {
            api_key: String::new(),
            api_base: DEFAULT_OPENMIC_API_BASE.to_string(),
            phone_number: "+1234567890".to_string(),
        })
        .expect("client builds");
        Arc::new(CallRoutesState {
            store: Arc::new(store),
            upstream,
        })
    }

    #[tokio::test]
    async fn post_call_stores_log() {
        let store = InMemoryCallLogStore::default();
        let state = state(store.clone());
        let body = Bytes::from(r#"{"bot_uid":"bot_1","duration":42}"#);

        let response = post_call_handler::<InMemoryCallLogStore>(State(state), body)
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let logs = store.list().expect("list");
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].call_duration.as_u64(), Some(42));
    }

    #[tokio::test]
    async fn post_call_persists_to_file_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("logs").join("call-logs.json");
        let store = JsonFileCallLogStore::open(&path).expect("store opens");
        let body = Bytes::from(r#"{"bot_uid":"bot_1","duration":93.6}"#);

        let response = post_call_handler::<JsonFileCallLogStore>(State(state(store)), body)
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let reopened = JsonFileCallLogStore::open(&path).expect("store reopens");
        let logs = reopened.list().expect("list");
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].bot_uid, "bot_1");
        assert_eq!(logs[0].call_duration.as_f64(), Some(93.6));
    }

    #[tokio::test]
    async fn invalid_json_is_rejected_without_storing() {
        let store = InMemoryCallLogStore::default();
        let state = state(store.clone());

        let response =
            post_call_handler::<InMemoryCallLogStore>(State(state), Bytes::from("nope"))
                .await
                .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(store.list().expect("list").is_empty());
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_internal_error() {
        let response =
            post_call_handler::<BrokenStore>(State(state(BrokenStore)), Bytes::from("{}"))
                .await
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = list_logs_handler::<BrokenStore>(State(state(BrokenStore)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn place_call_without_credentials_is_unavailable() {
        let request = PlaceCallRequest {
            phone_number: "+15550100".to_string(),
            bot_uid: "bot_1".to_string(),
        };
        let response = place_call_handler::<InMemoryCallLogStore>(
            State(state(InMemoryCallLogStore::default())),
            Json(request),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
