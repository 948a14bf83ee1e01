//! Handlers for `/users/`.

use crate::api::{with_conn, ApiError};
use crate::AppState;
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::Json,
};
use postboard_content::{create_user, get_user, list_users};
use postboard_types::{NewUser, User};
use std::sync::Arc;

/// POST /users/
pub async fn create_user_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<NewUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    payload.validate()?;

    let user = with_conn(&state.pool, move |conn| create_user(conn, &payload)).await?;
    tracing::debug!(user_id = user.id, "user created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users/{id}
pub async fn get_user_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    let user = with_conn(&state.pool, move |conn| get_user(conn, user_id)).await?;
    Ok(Json(user))
}

/// GET /users/
pub async fn list_users_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = with_conn(&state.pool, list_users).await?;
    Ok(Json(users))
}
