use std::sync::Arc;

use activity_log_db::service::activity_log_store::ActivityLogStore;
use sqlx::{PgPool, Postgres};

use crate::repository::activity_log::factory::{ActivityLogRepoFactory, ActivityLogRepositories};
use crate::repository::activity_log::ActivityLogRepositoryImpl;

pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Arc<PgPool> {
        &self.pool
    }

    /// Create the activity log repositories sharing this pool
    pub fn create_activity_log_repositories(&self) -> ActivityLogRepositories {
        let factory = ActivityLogRepoFactory::new();
        factory.build_all_repos(self.pool.clone())
    }

    /// Create an ActivityLogStore service wired to the postgres repository
    pub fn create_activity_log_store(
        &self,
    ) -> ActivityLogStore<Postgres, ActivityLogRepositoryImpl> {
        let repos = self.create_activity_log_repositories();
        ActivityLogStore::new(repos.activity_log_repository)
    }
}
