use async_trait::async_trait;
use sqlx::Database;

use crate::models::link::CountryLinkModel;

/// Repository trait for creating country association rows
///
/// Pairs that are already linked are skipped, so linking is idempotent.
/// Callers are expected to have checked that both sides exist.
#[async_trait]
pub trait LinkBatch<DB: Database>: Send + Sync {
    /// Insert association rows in the current transaction
    ///
    /// # Returns
    /// * `Ok(usize)` - The number of rows actually inserted
    /// * `Err` - An error if the statement failed
    async fn link_batch(
        &self,
        links: &[CountryLinkModel],
    ) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}
