use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::validation::ValidationErrors;

/// Error enumeration for storage failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists: {0}")]
    Conflict(String),
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Entity kinds named in not-found errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Job,
    Application,
}

impl EntityKind {
    pub const fn label(self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Job => "job",
            EntityKind::Application => "application",
        }
    }
}

/// Error raised by the board services. None of these are recovered locally.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error("authentication required")]
    Unauthenticated,
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("{} {id} not found", .kind.label())]
    NotFound { kind: EntityKind, id: u64 },
    #[error("conflict: {0}")]
    Conflict(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("credential processing failed: {0}")]
    Credential(String),
}

impl BoardError {
    pub fn forbidden(reason: impl Into<String>) -> Self {
        Self::Forbidden(reason.into())
    }

    pub fn not_found(kind: EntityKind, id: u64) -> Self {
        Self::NotFound { kind, id }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            BoardError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            BoardError::Unauthenticated | BoardError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            BoardError::Forbidden(_) => StatusCode::FORBIDDEN,
            BoardError::NotFound { .. } | BoardError::Repository(RepositoryError::NotFound) => {
                StatusCode::NOT_FOUND
            }
            BoardError::Conflict(_) | BoardError::Repository(RepositoryError::Conflict(_)) => {
                StatusCode::CONFLICT
            }
            BoardError::Repository(RepositoryError::Unavailable(_))
            | BoardError::Credential(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for BoardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let payload = match &self {
            BoardError::Validation(errors) => json!({
                "error": "validation failed",
                "fields": errors.fields,
            }),
            other => json!({ "error": other.to_string() }),
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "board request failed");
        }
        (status, Json(payload)).into_response()
    }
}
