// src/state.rs
use sqlx::PgPool;

/// Shared application state handed to every handler. The pool is the
/// process-wide session factory; handlers check a connection out per
/// query and sqlx returns it to the pool when the guard drops, on
/// success and error paths alike.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

impl AppState {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}
