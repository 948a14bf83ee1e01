//! Shared API plumbing: the error type every handler returns and the helper
//! that runs a storage call on a pooled connection.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use postboard_content::ContentError;
use postboard_db::DbPool;
use rusqlite::Connection;
use thiserror::Error;

/// API error type mapping to HTTP status codes.
///
/// Rendered as `{"detail": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Unprocessable(String),
    #[error("{0}")]
    Conflict(String),
    #[error("internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(serde_json::json!({
            "detail": message
        }));

        (status, body).into_response()
    }
}

impl From<ContentError> for ApiError {
    fn from(e: ContentError) -> Self {
        match e {
            ContentError::UserNotFound(_) => ApiError::NotFound("User not found".to_string()),
            ContentError::PostNotFound(_) => ApiError::NotFound("Post not found".to_string()),
            ContentError::UsernameTaken(_) => {
                ApiError::Conflict("Username already registered".to_string())
            }
            ContentError::Database(err) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<postboard_types::ValidationError> for ApiError {
    fn from(e: postboard_types::ValidationError) -> Self {
        ApiError::Unprocessable(e.to_string())
    }
}

/// Runs `f` on a connection checked out from `pool` inside a blocking task.
///
/// The connection is scoped to this call and goes back to the pool when the
/// closure returns or unwinds.
pub(crate) async fn with_conn<T, F>(pool: &DbPool, f: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&Connection) -> Result<T, ContentError> + Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let conn = pool
            .get()
            .map_err(|e| ApiError::InternalServerError(format!("db connection failed: {}", e)))?;
        f(&conn).map_err(ApiError::from)
    })
    .await
    .map_err(|e| ApiError::InternalServerError(format!("task join error: {}", e)))?
}
