use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A record with the same natural key was found before inserting.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// The store rejected an insert on a uniqueness or foreign-key constraint.
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl AppError {
    /// Map an insert failure, turning constraint violations into `Conflict`.
    pub fn from_insert(err: DbErr, what: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::warn!(%detail, "Unique constraint violated inserting {what}");
                Self::Conflict(format!("{what} conflicts with an existing record"))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                tracing::warn!(%detail, "Foreign key violated inserting {what}");
                Self::Conflict(format!("{what} references a record that no longer exists"))
            }
            _ => Self::Database(err),
        }
    }

    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Database(_) | Self::Internal(_) | Self::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::AlreadyExists(_) | Self::Conflict(_) => StatusCode::CONFLICT,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            Self::Database(e) => {
                tracing::error!("Database error: {e:?}");
                "Database error".to_string()
            }
            Self::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                "Internal server error".to_string()
            }
            Self::Config(e) => {
                tracing::error!("Config error: {e:?}");
                "Configuration error".to_string()
            }
            Self::BadRequest(msg)
            | Self::NotFound(msg)
            | Self::AlreadyExists(msg)
            | Self::Conflict(msg) => msg,
        };

        let body = Json(json!({
            "Message": message,
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
