use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

use crate::models::common_enums::CocType;

/// Generic repository trait for listing entries attached to one business
/// entity (customer or company), newest first.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type
#[async_trait]
pub trait FindByCoc<DB: Database, T>: Send + Sync {
    /// List all entries attached to the given customer or company
    ///
    /// # Arguments
    /// * `coc_type` - Kind of business entity
    /// * `coc_id` - Identifier of the business entity
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - Matching entries ordered by creation time descending
    /// * `Err` - An error if the query could not be executed
    async fn find_by_coc(
        &self,
        coc_type: CocType,
        coc_id: Uuid,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
