use crate::ContentError;
use postboard_types::{NewPost, Post};
use rusqlite::{params, Connection, OptionalExtension, Row};

/// Inserts a post and returns the persisted row.
///
/// `user_id` is stored as given; it may name a user that does not exist.
pub fn create_post(conn: &Connection, new_post: &NewPost) -> Result<Post, ContentError> {
    let post = conn.query_row(
        "INSERT INTO posts (title, content, user_id) VALUES (?1, ?2, ?3)
         RETURNING id, title, content, user_id",
        params![new_post.title, new_post.content, new_post.user_id],
        map_row_to_post,
    )?;
    Ok(post)
}

/// Retrieves a post by id.
pub fn get_post(conn: &Connection, id: i64) -> Result<Post, ContentError> {
    conn.query_row(
        "SELECT id, title, content, user_id FROM posts WHERE id = ?1",
        [id],
        map_row_to_post,
    )
    .optional()?
    .ok_or(ContentError::PostNotFound(id))
}

/// Lists every post in storage order.
pub fn list_posts(conn: &Connection) -> Result<Vec<Post>, ContentError> {
    let mut stmt = conn.prepare("SELECT id, title, content, user_id FROM posts")?;
    let rows = stmt.query_map([], map_row_to_post)?;
    let mut posts = Vec::new();
    for row in rows {
        posts.push(row?);
    }
    Ok(posts)
}

/// Deletes a post and returns the row as it was before deletion.
pub fn delete_post(conn: &Connection, id: i64) -> Result<Post, ContentError> {
    conn.query_row(
        "DELETE FROM posts WHERE id = ?1 RETURNING id, title, content, user_id",
        [id],
        map_row_to_post,
    )
    .optional()?
    .ok_or(ContentError::PostNotFound(id))
}

fn map_row_to_post(row: &Row) -> rusqlite::Result<Post> {
    Ok(Post {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        user_id: row.get(3)?,
    })
}
