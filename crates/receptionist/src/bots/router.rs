use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use super::domain::{Bot, BotId, CreateBotRequest, UpdateBotRequest, RECEPTIONIST_PROMPT};
use super::repository::BotRepository;
use super::service::BotService;
use crate::error::AppError;

/// Router exposing CRUD endpoints for bot configurations.
pub fn bot_router<R>(service: Arc<BotService<R>>) -> Router
where
    R: BotRepository + 'static,
{
    Router::new()
        .route("/api/bots", get(list_handler::<R>).post(create_handler::<R>))
        .route("/api/bots/prompt", get(prompt_handler))
        .route(
            "/api/bots/:uid",
            get(get_handler::<R>)
                .patch(update_handler::<R>)
                .delete(delete_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<BotService<R>>>,
) -> Result<Json<Vec<Bot>>, AppError>
where
    R: BotRepository + 'static,
{
    Ok(Json(service.list()?))
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<BotService<R>>>,
    Json(request): Json<CreateBotRequest>,
) -> Result<(StatusCode, Json<Bot>), AppError>
where
    R: BotRepository + 'static,
{
    let bot = service.create(request)?;
    Ok((StatusCode::CREATED, Json(bot)))
}

pub(crate) async fn get_handler<R>(
    State(service): State<Arc<BotService<R>>>,
    Path(uid): Path<String>,
) -> Result<Json<Bot>, AppError>
where
    R: BotRepository + 'static,
{
    Ok(Json(service.get(&BotId(uid))?))
}

pub(crate) async fn update_handler<R>(
    State(service): State<Arc<BotService<R>>>,
    Path(uid): Path<String>,
    Json(request): Json<UpdateBotRequest>,
) -> Result<Json<Bot>, AppError>
where
    R: BotRepository + 'static,
{
    Ok(Json(service.update(&BotId(uid), request)?))
}

pub(crate) async fn delete_handler<R>(
    State(service): State<Arc<BotService<R>>>,
    Path(uid): Path<String>,
) -> Result<Json<Value>, AppError>
where
    R: BotRepository + 'static,
{
    service.delete(&BotId(uid))?;
    Ok(Json(json!({ "message": "Bot deleted successfully" })))
}

pub(crate) async fn prompt_handler() -> Json<Value> {
    Json(json!({ "prompt": RECEPTIONIST_PROMPT }))
}
