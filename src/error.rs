//! Application error type and its HTTP mapping.
//!
//! Every layer returns [`AppError`]. Handlers let it bubble up with `?` and
//! axum renders it through [`IntoResponse`] using the v2 body shape:
//!
//! ```json
//! { "mensaje": "Usuario no encontrado", "timestamp": "2025-06-26T12:00:00Z" }
//! ```
//!
//! v1 handlers render their own legacy bodies, see
//! [`crate::api::handlers::v1`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Value, json};

/// Error body returned by the v2 surface.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub mensaje: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub detalles: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Conflict { message, .. }
            | AppError::Internal { message, .. } => message,
        }
    }

    /// Name of the violated unique constraint, when the error came from one.
    pub fn constraint(&self) -> Option<&str> {
        match self {
            AppError::Conflict { details, .. } => details.get("constraint")?.as_str(),
            _ => None,
        }
    }

    /// Replaces the client-facing message, keeping kind and details.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            AppError::Validation { details, .. } => AppError::Validation { message, details },
            AppError::NotFound { details, .. } => AppError::NotFound { message, details },
            AppError::Conflict { details, .. } => AppError::Conflict { message, details },
            AppError::Internal { details, .. } => AppError::Internal { message, details },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Only validation details are meant for clients; the rest stays in the logs.
        let (message, details) = match self {
            AppError::Validation { message, details } => (message, details),
            AppError::Internal { message, details } => {
                tracing::error!(%message, %details, "Request failed with internal error");
                (message, Value::Null)
            }
            AppError::NotFound { message, .. } | AppError::Conflict { message, .. } => {
                (message, Value::Null)
            }
        };

        let body = ErrorBody {
            mensaje: message,
            timestamp: Utc::now(),
            detalles: details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&e).unwrap_or(Value::Null);
        AppError::bad_request("Datos de entrada inválidos", details)
    }
}

/// Maps a database error, keeping unique violations distinguishable.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::conflict(
            "Unique constraint violation",
            json!({ "constraint": db.constraint() }),
        );
    }

    tracing::error!(error = %e, "Database error");
    AppError::internal("Database error", json!({}))
}
