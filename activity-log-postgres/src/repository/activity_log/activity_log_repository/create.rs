use activity_log_db::models::activity_log::ActivityLogModel;
use activity_log_db::repository::create::Create;
use async_trait::async_trait;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::ActivityLogRepositoryImpl;

impl ActivityLogRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &ActivityLogRepositoryImpl,
        item: ActivityLogModel,
    ) -> Result<ActivityLogModel, Box<dyn Error + Send + Sync>> {
        sqlx::query(
            r#"
            INSERT INTO activity_log
            (id, activity_type, activity_action, activity_content, activity_entity_id, performed_by_type, performed_by_id, coc_type, coc_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(item.id)
        .bind(item.activity_type)
        .bind(item.activity_action)
        .bind(&item.activity_content)
        .bind(item.activity_entity_id)
        .bind(item.performed_by_type)
        .bind(item.performed_by_id)
        .bind(item.coc_type)
        .bind(item.coc_id)
        .bind(item.created_at)
        .execute(&*repo.pool)
        .await?;

        Ok(item)
    }
}

#[async_trait]
impl Create<Postgres, ActivityLogModel> for ActivityLogRepositoryImpl {
    async fn create(
        &self,
        item: ActivityLogModel,
    ) -> Result<ActivityLogModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}
