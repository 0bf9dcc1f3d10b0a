use async_trait::async_trait;
use countries_db::models::CatalogEntity;
use countries_db::repository::exist_by_ids::ExistByIds;
use sqlx::Postgres;
use std::collections::HashSet;
use std::error::Error;

use super::repo_impl::CatalogRepositoryImpl;

impl<E: CatalogEntity> CatalogRepositoryImpl<E> {
    pub(super) async fn exist_by_ids_impl(
        repo: &CatalogRepositoryImpl<E>,
        ids: &[i64],
    ) -> Result<Vec<(i64, bool)>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!("SELECT id FROM {} WHERE id = ANY($1)", E::TABLE);
        let found: HashSet<i64> = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query_scalar::<_, i64>(&query)
                .bind(ids)
                .fetch_all(&mut **transaction)
                .await?
                .into_iter()
                .collect()
        };

        Ok(ids.iter().map(|id| (*id, found.contains(id))).collect())
    }
}

#[async_trait]
impl<E: CatalogEntity> ExistByIds<Postgres> for CatalogRepositoryImpl<E> {
    async fn exist_by_ids(&self, ids: &[i64]) -> Result<Vec<(i64, bool)>, Box<dyn Error + Send + Sync>> {
        Self::exist_by_ids_impl(self, ids).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use countries_db::repository::{CreateBatch, ExistByIds};
    use serial_test::serial;
    use super::super::test_utils::test_utils::create_test_restaurant;

    #[tokio::test]
    #[serial]
    async fn test_exist_by_ids() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let Some(ctx) = setup_test_context().await? else {
            return Ok(());
        };
        let restaurant_repo = &ctx.repos().restaurant_repository;

        let saved = restaurant_repo
            .create_batch(vec![create_test_restaurant("Diner", None)])
            .await?;

        let results = restaurant_repo.exist_by_ids(&[saved[0].id, -7, saved[0].id]).await?;
        assert_eq!(results, vec![(saved[0].id, true), (-7, false), (saved[0].id, true)]);

        Ok(())
    }
}
