use async_trait::async_trait;
use countries_db::models::CatalogEntity;
use countries_db::repository::load_batch::LoadBatch;
use sqlx::Postgres;
use std::collections::HashMap;
use std::error::Error;

use super::repo_impl::{decode_catalog_row, CatalogRepositoryImpl};

impl<E: CatalogEntity> CatalogRepositoryImpl<E> {
    pub(super) async fn load_batch_impl(
        repo: &CatalogRepositoryImpl<E>,
        ids: &[i64],
    ) -> Result<Vec<Option<E>>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!("SELECT {} FROM {} WHERE id = ANY($1)", Self::columns(), E::TABLE);
        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(&query).bind(ids).fetch_all(&mut **transaction).await?
        };

        let mut item_map = HashMap::with_capacity(rows.len());
        for row in rows {
            let item = decode_catalog_row::<E>(&row)?;
            item_map.insert(item.get_id(), item);
        }

        Ok(ids.iter().map(|id| item_map.get(id).cloned()).collect())
    }
}

#[async_trait]
impl<E: CatalogEntity> LoadBatch<Postgres, E> for CatalogRepositoryImpl<E> {
    async fn load_batch(&self, ids: &[i64]) -> Result<Vec<Option<E>>, Box<dyn Error + Send + Sync>> {
        Self::load_batch_impl(self, ids).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use countries_db::repository::{CreateBatch, LoadBatch};
    use serial_test::serial;
    use super::super::test_utils::test_utils::create_test_restaurant;

    #[tokio::test]
    #[serial]
    async fn test_load_batch() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let Some(ctx) = setup_test_context().await? else {
            return Ok(());
        };
        let restaurant_repo = &ctx.repos().restaurant_repository;

        let saved = restaurant_repo
            .create_batch(vec![
                create_test_restaurant("Sushi Bar", Some("Sushi")),
                create_test_restaurant("Diner", None),
            ])
            .await?;

        let loaded = restaurant_repo.load_batch(&[saved[1].id, 0, saved[0].id]).await?;
        assert_eq!(loaded[0].as_ref(), Some(&saved[1]));
        assert!(loaded[1].is_none());
        assert_eq!(loaded[2].as_ref(), Some(&saved[0]));

        Ok(())
    }
}
