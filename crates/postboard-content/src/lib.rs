//! Storage operations for Postboard users and posts.
//!
//! Every function takes a borrowed `rusqlite::Connection` and issues exactly
//! one statement. Callers own the connection's lifetime: the server checks
//! out one pooled connection per request and hands it to a single function
//! here.
//!
//! Posts reference users by a plain integer. Nothing here checks that the
//! referenced user exists.

mod posts;
mod users;

pub use posts::{create_post, delete_post, get_post, list_posts};
pub use users::{create_user, get_user, list_users};

use thiserror::Error;

/// Errors that can occur during user and post operations.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("user not found: {0}")]
    UserNotFound(i64),
    #[error("post not found: {0}")]
    PostNotFound(i64),
    #[error("username already taken: {0}")]
    UsernameTaken(String),
}
