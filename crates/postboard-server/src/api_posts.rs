//! Handlers for `/posts/`.
//!
//! `user_id` in a create payload is stored as-is. There is no foreign key
//! from posts to users, so a post may name a user that was never created.

use crate::api::{with_conn, ApiError};
use crate::AppState;
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::Json,
};
use postboard_content::{create_post, delete_post, get_post, list_posts};
use postboard_types::{NewPost, Post};
use std::sync::Arc;

/// POST /posts/
pub async fn create_post_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<NewPost>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    payload.validate()?;

    let post = with_conn(&state.pool, move |conn| create_post(conn, &payload)).await?;
    tracing::debug!(post_id = post.id, user_id = post.user_id, "post created");

    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /posts/{id}
pub async fn get_post_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(post_id): Path<i64>,
) -> Result<Json<Post>, ApiError> {
    let post = with_conn(&state.pool, move |conn| get_post(conn, post_id)).await?;
    Ok(Json(post))
}

/// GET /posts/
pub async fn list_posts_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = with_conn(&state.pool, list_posts).await?;
    Ok(Json(posts))
}

/// DELETE /posts/{id}
///
/// Responds with the post as it was before deletion.
pub async fn delete_post_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(post_id): Path<i64>,
) -> Result<Json<Post>, ApiError> {
    let post = with_conn(&state.pool, move |conn| delete_post(conn, post_id)).await?;
    tracing::debug!(post_id = post.id, "post deleted");
    Ok(Json(post))
}
