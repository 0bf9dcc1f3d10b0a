use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for creating multiple entities in a batch
/// 
/// This trait provides a standard interface for batch creating entities in a data store.
/// Any entity that implements the Identifiable trait can be created using this trait.
/// All creates run on the caller's unit of work and become visible on commit.
/// Returns saved items with the generated ids populated.
/// 
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl CreateBatch<Postgres, CountryModel> for CountryRepositoryImpl {
///     async fn create_batch(&self, items: Vec<CountryModel>) -> Result<Vec<CountryModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait CreateBatch<DB: Database, T: Identifiable>: Send + Sync {
    /// Save multiple items in the current transaction
    /// 
    /// # Arguments
    /// * `items` - A vector of entities to create; their ids are ignored
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - A vector of created entities with ids populated
    /// * `Err` - An error if the statement failed (for example a unique violation)
    async fn create_batch(
        &self,
        items: Vec<T>,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
