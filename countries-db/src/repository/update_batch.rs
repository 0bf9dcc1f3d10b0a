use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for updating multiple entities in a batch
/// 
/// This trait provides a standard interface for batch updating entities in a data store.
/// Every column of each item is written; callers apply patches before calling.
/// 
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait UpdateBatch<DB: Database, T: Identifiable>: Send + Sync {
    /// Update multiple items in the current transaction
    /// 
    /// # Arguments
    /// * `items` - A vector of entities to update, matched by id
    /// 
    /// # Returns
    /// * `Ok(Vec<T>)` - The items that matched an existing row
    /// * `Err` - An error if the statement failed (for example a unique violation)
    async fn update_batch(
        &self,
        items: Vec<T>,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
