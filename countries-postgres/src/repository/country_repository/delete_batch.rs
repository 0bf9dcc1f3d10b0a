use async_trait::async_trait;
use countries_db::repository::delete_batch::DeleteBatch;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::CountryRepositoryImpl;

impl CountryRepositoryImpl {
    pub(super) async fn delete_batch_impl(
        repo: &CountryRepositoryImpl,
        ids: &[i64],
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(0);
        }

        // Association rows go with the country through ON DELETE CASCADE
        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let result = sqlx::query("DELETE FROM country WHERE id = ANY($1)")
            .bind(ids)
            .execute(&mut **transaction)
            .await?;

        Ok(result.rows_affected() as usize)
    }
}

#[async_trait]
impl DeleteBatch<Postgres> for CountryRepositoryImpl {
    async fn delete_batch(&self, ids: &[i64]) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::delete_batch_impl(self, ids).await
    }
}
