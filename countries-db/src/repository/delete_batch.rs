use async_trait::async_trait;
use sqlx::Database;

/// Generic repository trait for deleting multiple entities in a batch
/// 
/// This trait provides a standard interface for batch deleting entities from a data store.
/// Association rows referencing a deleted entity are removed with it.
/// Returns the number of items successfully deleted.
/// 
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
#[async_trait]
pub trait DeleteBatch<DB: Database>: Send + Sync {
    /// Delete multiple items by their IDs in the current transaction
    /// 
    /// # Arguments
    /// * `ids` - A slice of ids of the entities to delete
    ///
    /// # Returns
    /// * `Ok(usize)` - The number of items successfully deleted
    /// * `Err` - An error if the statement could not be executed
    async fn delete_batch(
        &self,
        ids: &[i64],
    ) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}
