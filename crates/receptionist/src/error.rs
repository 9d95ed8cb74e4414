use crate::bots::{BotRepositoryError, BotServiceError};
use crate::calls::CallLogError;
use crate::config::ConfigError;
use crate::openmic::OpenMicError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;
use tracing::error;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Bots(BotServiceError),
    CallLogs(CallLogError),
    Upstream(OpenMicError),
    Payload(serde_json::Error),
    Input(String),
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Input(_) | AppError::Payload(_) => StatusCode::BAD_REQUEST,
            AppError::Bots(BotServiceError::Validation { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Bots(BotServiceError::Repository(BotRepositoryError::NotFound)) => {
                StatusCode::NOT_FOUND
            }
            AppError::Bots(BotServiceError::Repository(BotRepositoryError::Conflict)) => {
                StatusCode::CONFLICT
            }
            AppError::Upstream(OpenMicError::NotConfigured) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Bots(BotServiceError::Repository(BotRepositoryError::Unavailable(_)))
            | AppError::CallLogs(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Bots(err) => write!(f, "bot error: {}", err),
            AppError::CallLogs(err) => write!(f, "call log error: {}", err),
            AppError::Upstream(err) => write!(f, "upstream error: {}", err),
            AppError::Payload(err) => write!(f, "request body is not valid JSON: {}", err),
            AppError::Input(message) => write!(f, "invalid input: {}", message),
            AppError::Internal(message) => write!(f, "internal error: {}", message),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Bots(err) => Some(err),
            AppError::CallLogs(err) => Some(err),
            AppError::Upstream(err) => Some(err),
            AppError::Payload(err) => Some(err),
            AppError::Input(_) | AppError::Internal(_) => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<BotServiceError> for AppError {
    fn from(value: BotServiceError) -> Self {
        Self::Bots(value)
    }
}

impl From<CallLogError> for AppError {
    fn from(value: CallLogError) -> Self {
        Self::CallLogs(value)
    }
}

impl From<OpenMicError> for AppError {
    fn from(value: OpenMicError) -> Self {
        Self::Upstream(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Payload(value)
    }
}
