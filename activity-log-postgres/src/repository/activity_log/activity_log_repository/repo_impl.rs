use std::sync::Arc;

use sqlx::PgPool;

/// Postgres-backed repository for activity log entries.
///
/// Each call runs one statement against the pool; the check-then-insert pair
/// issued by the service is intentionally not wrapped in a transaction or
/// backed by a uniqueness constraint.
pub struct ActivityLogRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl ActivityLogRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}
