//! Shared record types and payload validation for Postboard.
//!
//! This crate defines the two persisted entities (`User` and `Post`), the
//! payloads used to create them, and the column length limits those payloads
//! must respect. It has no database or HTTP dependencies so every other crate
//! in the workspace can share it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length of `User::username`, in characters.
pub const MAX_USERNAME_LEN: usize = 50;
/// Maximum length of `Post::title`, in characters.
pub const MAX_TITLE_LEN: usize = 50;
/// Maximum length of `Post::content`, in characters.
pub const MAX_CONTENT_LEN: usize = 280;

/// A persisted user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Generated primary key.
    pub id: i64,
    /// Unique handle.
    pub username: String,
}

/// A persisted post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Generated primary key.
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Author reference. Stored as a plain integer; not checked against the
    /// `user` table.
    pub user_id: i64,
}

/// Payload for creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
}

/// Payload for creating a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub user_id: i64,
}

/// A payload field exceeded its column limit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} must be at most {max} characters (got {actual})")]
pub struct ValidationError {
    /// Name of the offending field.
    pub field: &'static str,
    /// Maximum allowed length.
    pub max: usize,
    /// Length of the submitted value.
    pub actual: usize,
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError { field, max, actual });
    }
    Ok(())
}

impl NewUser {
    /// Checks the username against [`MAX_USERNAME_LEN`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the field that is too long.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_len("username", &self.username, MAX_USERNAME_LEN)
    }
}

impl NewPost {
    /// Checks title and content against their column limits.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for the first field that is too long.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_len("title", &self.title, MAX_TITLE_LEN)?;
        check_len("content", &self.content, MAX_CONTENT_LEN)
    }
}
