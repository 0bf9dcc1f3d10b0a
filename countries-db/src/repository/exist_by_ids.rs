use async_trait::async_trait;
use sqlx::Database;

/// Generic repository trait for checking existence of multiple entities by their IDs
/// 
/// This trait provides a standard interface for checking whether multiple entities exist in a data store.
/// Returns a vector of tuples where each tuple contains the id and a boolean indicating existence,
/// in the order the ids were given.
/// 
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
#[async_trait]
pub trait ExistByIds<DB: Database>: Send + Sync {
    /// Check existence of multiple entities by their unique identifiers
    /// 
    /// # Arguments
    /// * `ids` - A slice of ids to check
    /// 
    /// # Returns
    /// * `Ok(Vec<(i64, bool)>)` - A vector of tuples mapping each ID to its existence status
    /// * `Err` - An error if the query could not be executed
    async fn exist_by_ids(&self, ids: &[i64]) -> Result<Vec<(i64, bool)>, Box<dyn std::error::Error + Send + Sync>>;
}
