use activity_log_db::models::activity_log::ActivityLogModel;
use activity_log_db::models::dedup_key::ActivityDedupKey;
use activity_log_db::repository::find_by_dedup_key::FindByDedupKey;
use async_trait::async_trait;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::ActivityLogRepositoryImpl;

impl ActivityLogRepositoryImpl {
    pub(super) async fn find_by_dedup_key_impl(
        repo: &ActivityLogRepositoryImpl,
        key: &ActivityDedupKey,
    ) -> Result<Option<ActivityLogModel>, Box<dyn Error + Send + Sync>> {
        // A NULL $6 means the performer kind does not participate in the key
        let item = sqlx::query_as::<_, ActivityLogModel>(
            r#"
            SELECT * FROM activity_log
            WHERE activity_type = $1
              AND activity_action = $2
              AND activity_entity_id = $3
              AND coc_type = $4
              AND coc_id = $5
              AND ($6::performer_type IS NULL OR performed_by_type = $6)
            LIMIT 1
            "#,
        )
        .bind(key.activity_type)
        .bind(key.activity_action)
        .bind(key.activity_entity_id)
        .bind(key.coc_type)
        .bind(key.coc_id)
        .bind(key.performed_by_type)
        .fetch_optional(&*repo.pool)
        .await?;

        Ok(item)
    }
}

#[async_trait]
impl FindByDedupKey<Postgres, ActivityLogModel> for ActivityLogRepositoryImpl {
    async fn find_by_dedup_key(
        &self,
        key: &ActivityDedupKey,
    ) -> Result<Option<ActivityLogModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_dedup_key_impl(self, key).await
    }
}
