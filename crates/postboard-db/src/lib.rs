//! Database layer for Postboard.
//!
//! Provides SQLite connection pooling (via `r2d2`), WAL-mode initialization,
//! and embedded SQL migrations. The `user` and `posts` tables are created
//! through versioned migrations managed by this crate, so a fresh database
//! file is usable as soon as the server has started.
//!
//! Each request checks out one pooled connection and returns it when the
//! guard drops. Connections carry no state between requests.

mod migrations;
mod pool;

pub use migrations::{run_migrations, MigrationError};
pub use pool::{create_pool, DbPool, DbRuntimeSettings, PoolError};
