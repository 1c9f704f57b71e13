use activity_log_db::models::activity_log::ActivityLogModel;
use activity_log_db::models::common_enums::CocType;
use activity_log_db::repository::find_by_coc::FindByCoc;
use async_trait::async_trait;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::ActivityLogRepositoryImpl;

impl ActivityLogRepositoryImpl {
    pub(super) async fn find_by_coc_impl(
        repo: &ActivityLogRepositoryImpl,
        coc_type: CocType,
        coc_id: Uuid,
    ) -> Result<Vec<ActivityLogModel>, Box<dyn Error + Send + Sync>> {
        let items = sqlx::query_as::<_, ActivityLogModel>(
            r#"
            SELECT * FROM activity_log
            WHERE coc_type = $1 AND coc_id = $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(coc_type)
        .bind(coc_id)
        .fetch_all(&*repo.pool)
        .await?;

        Ok(items)
    }
}

#[async_trait]
impl FindByCoc<Postgres, ActivityLogModel> for ActivityLogRepositoryImpl {
    async fn find_by_coc(
        &self,
        coc_type: CocType,
        coc_id: Uuid,
    ) -> Result<Vec<ActivityLogModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_coc_impl(self, coc_type, coc_id).await
    }
}
