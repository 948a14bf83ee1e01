//! Postboard server library logic.
//!
//! Exposes [`app`], which builds the axum router for the user and post
//! endpoints, and [`AppState`], the state shared by every handler.

pub mod api;
pub mod api_posts;
pub mod api_users;
pub mod config;

use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Extension, Json, Router,
};
use postboard_db::DbPool;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Each request checks out its own connection.
    pub pool: DbPool,
}

/// Maximum request body size (64 KiB). Payloads are a few short strings.
const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;

/// Health check handler.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Builds the application router with all routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/users/",
            get(api_users::list_users_handler).post(api_users::create_user_handler),
        )
        .route("/users/{id}", get(api_users::get_user_handler))
        .route(
            "/posts/",
            get(api_posts::list_posts_handler).post(api_posts::create_post_handler),
        )
        .route(
            "/posts/{id}",
            get(api_posts::get_post_handler).delete(api_posts::delete_post_handler),
        )
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(Arc::new(state)))
}
