use async_trait::async_trait;
use sqlx::Database;

use crate::models::dedup_key::ActivityDedupKey;

/// Generic repository trait for locating an existing entity by its dedup key
///
/// This trait provides the find-one half of the check-then-insert pattern
/// used to suppress duplicate log entries. Returns an Option to handle the
/// common case where no matching entry exists yet.
///
/// The find and the subsequent insert are not serialized as a unit; two
/// concurrent writers with the same key can both observe None and both
/// insert. Callers accept this race as documented behavior.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type
#[async_trait]
pub trait FindByDedupKey<DB: Database, T>: Send + Sync {
    /// Find an existing entity matching every constraint of the key
    ///
    /// # Returns
    /// * `Ok(Some(T))` - A matching entity
    /// * `Ok(None)` - If no entity matches the key
    /// * `Err` - An error if the query could not be executed
    async fn find_by_dedup_key(
        &self,
        key: &ActivityDedupKey,
    ) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
