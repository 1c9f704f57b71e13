use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for appending a single entity
///
/// This trait provides a standard interface for inserting one entity into a
/// data store. Any entity that implements the Identifiable trait can be
/// created using this trait. Returns the saved item with any store-assigned
/// fields populated.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Create<Postgres, ActivityLogModel> for ActivityLogRepositoryImpl {
///     async fn create(&self, item: ActivityLogModel) -> Result<ActivityLogModel, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Create<DB: Database, T: Identifiable>: Send + Sync {
    /// Insert a single entity
    ///
    /// # Arguments
    /// * `item` - The entity to persist
    ///
    /// # Returns
    /// * `Ok(T)` - The persisted entity
    /// * `Err` - An error if the insert could not be executed
    async fn create(&self, item: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
