use activity_log_db::models::activity_log::ActivityLogModel;
use activity_log_db::repository::load_batch::LoadBatch;
use async_trait::async_trait;
use sqlx::Postgres;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::ActivityLogRepositoryImpl;

impl ActivityLogRepositoryImpl {
    pub(super) async fn load_batch_impl(
        repo: &ActivityLogRepositoryImpl,
        ids: &[Uuid],
    ) -> Result<Vec<Option<ActivityLogModel>>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, ActivityLogModel>(
            r#"SELECT * FROM activity_log WHERE id = ANY($1)"#,
        )
        .bind(ids)
        .fetch_all(&*repo.pool)
        .await?;

        let mut item_map = std::collections::HashMap::new();
        for item in rows {
            item_map.insert(item.id, item);
        }

        let mut result = Vec::with_capacity(ids.len());
        for id in ids {
            result.push(item_map.remove(id));
        }
        Ok(result)
    }
}

#[async_trait]
impl LoadBatch<Postgres, ActivityLogModel> for ActivityLogRepositoryImpl {
    async fn load_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Option<ActivityLogModel>>, Box<dyn Error + Send + Sync>> {
        Self::load_batch_impl(self, ids).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::activity_log::activity_log_repository::test_utils::create_test_activity_log;
    use crate::test_helper::setup_test_context;
    use activity_log_db::models::common_enums::CocType;
    use activity_log_db::repository::create::Create;
    use activity_log_db::repository::load_batch::LoadBatch;
    use uuid::Uuid;

    #[tokio::test]
    #[ignore] // requires a running postgres (DATABASE_URL)
    async fn test_load_batch_aligns_with_requested_ids(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let activity_log_repo = &ctx.activity_log_repos().activity_log_repository;

        let first = create_test_activity_log(CocType::Customer, Uuid::new_v4());
        let second = create_test_activity_log(CocType::Company, Uuid::new_v4());
        activity_log_repo.create(first.clone()).await?;
        activity_log_repo.create(second.clone()).await?;

        let missing_id = Uuid::new_v4();
        let loaded = activity_log_repo
            .load_batch(&[second.id, missing_id, first.id])
            .await?;

        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[0].as_ref().map(|e| e.id), Some(second.id));
        assert!(loaded[1].is_none());
        assert_eq!(loaded[2].as_ref().map(|e| e.id), Some(first.id));

        Ok(())
    }
}
