use async_trait::async_trait;
use sqlx::Database;

use crate::models::name_keyed::NameKeyed;

/// Generic repository trait for finding an entity by its normalized name
/// 
/// Lookups go through the `name_hash` key, so `"Chile"` and `"CHILE"` find the
/// same row.
/// 
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement NameKeyed trait
///
/// # Example
/// ```ignore
/// let hash = name_hash("chile")?;
/// let country = country_repo.find_by_name_hash(hash).await?;
/// ```
#[async_trait]
pub trait FindByNameHash<DB: Database, T: NameKeyed>: Send + Sync {
    /// Find an entity by the hash of its lowercased name
    /// 
    /// # Returns
    /// * `Ok(Some(T))` - The found entity
    /// * `Ok(None)` - If no entity has that name
    /// * `Err` - An error if the query could not be executed
    async fn find_by_name_hash(&self, name_hash: i64) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
