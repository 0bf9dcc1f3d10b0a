use async_trait::async_trait;
use countries_db::models::CatalogEntity;
use countries_db::repository::update_batch::UpdateBatch;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::CatalogRepositoryImpl;

impl<E: CatalogEntity> CatalogRepositoryImpl<E> {
    pub(super) async fn update_batch_impl(
        repo: &CatalogRepositoryImpl<E>,
        items: Vec<E>,
    ) -> Result<Vec<E>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!(
            "UPDATE {} SET name = $2, name_hash = $3, {} = $4 WHERE id = $1",
            E::TABLE,
            E::DETAIL_COLUMN
        );

        let mut updated_items = Vec::with_capacity(items.len());
        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        for item in items {
            let result = sqlx::query(&query)
                .bind(item.get_id())
                .bind(item.name())
                .bind(item.name_hash())
                .bind(item.detail())
                .execute(&mut **transaction)
                .await?;

            if result.rows_affected() > 0 {
                updated_items.push(item);
            }
        }

        Ok(updated_items)
    }
}

#[async_trait]
impl<E: CatalogEntity> UpdateBatch<Postgres, E> for CatalogRepositoryImpl<E> {
    async fn update_batch(&self, items: Vec<E>) -> Result<Vec<E>, Box<dyn Error + Send + Sync>> {
        Self::update_batch_impl(self, items).await
    }
}
