use crate::ContentError;
use postboard_types::{NewUser, User};
use rusqlite::{Connection, ErrorCode, OptionalExtension, Row};

/// Inserts a user and returns the persisted row.
///
/// # Errors
///
/// Returns `ContentError::UsernameTaken` if the username already exists.
pub fn create_user(conn: &Connection, new_user: &NewUser) -> Result<User, ContentError> {
    conn.query_row(
        "INSERT INTO \"user\" (username) VALUES (?1) RETURNING id, username",
        [&new_user.username],
        map_row_to_user,
    )
    .map_err(|e| {
        if e.sqlite_error_code() == Some(ErrorCode::ConstraintViolation) {
            ContentError::UsernameTaken(new_user.username.clone())
        } else {
            ContentError::Database(e)
        }
    })
}

/// Retrieves a user by id.
pub fn get_user(conn: &Connection, id: i64) -> Result<User, ContentError> {
    conn.query_row(
        "SELECT id, username FROM \"user\" WHERE id = ?1",
        [id],
        map_row_to_user,
    )
    .optional()?
    .ok_or(ContentError::UserNotFound(id))
}

/// Lists every user in storage order.
pub fn list_users(conn: &Connection) -> Result<Vec<User>, ContentError> {
    let mut stmt = conn.prepare("SELECT id, username FROM \"user\"")?;
    let rows = stmt.query_map([], map_row_to_user)?;
    let mut users = Vec::new();
    for row in rows {
        users.push(row?);
    }
    Ok(users)
}

fn map_row_to_user(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
    })
}
