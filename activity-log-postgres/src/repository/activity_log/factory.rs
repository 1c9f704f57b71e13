use std::sync::Arc;

use sqlx::PgPool;

use super::activity_log_repository::ActivityLogRepositoryImpl;

/// Factory for creating activity log module repositories
///
/// This factory provides methods to build repositories over a shared
/// connection pool. This should be used as a singleton throughout the
/// application.
#[derive(Default)]
pub struct ActivityLogRepoFactory {
    // Currently no caches needed for the activity log module
}

impl ActivityLogRepoFactory {
    /// Create a new ActivityLogRepoFactory singleton
    pub fn new() -> Arc<Self> {
        Arc::new(Self {})
    }

    /// Build an ActivityLogRepository with the given pool
    pub fn build_activity_log_repo(&self, pool: Arc<PgPool>) -> Arc<ActivityLogRepositoryImpl> {
        Arc::new(ActivityLogRepositoryImpl::new(pool))
    }

    /// Build all activity log repositories with the given pool
    pub fn build_all_repos(&self, pool: Arc<PgPool>) -> ActivityLogRepositories {
        ActivityLogRepositories {
            activity_log_repository: self.build_activity_log_repo(pool),
        }
    }
}

/// Container for all activity log module repositories
pub struct ActivityLogRepositories {
    pub activity_log_repository: Arc<ActivityLogRepositoryImpl>,
}
