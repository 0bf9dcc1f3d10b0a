use async_trait::async_trait;
use countries_db::models::CatalogEntity;
use countries_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::CatalogRepositoryImpl;

impl<E: CatalogEntity> CatalogRepositoryImpl<E> {
    pub(super) async fn create_batch_impl(
        repo: &CatalogRepositoryImpl<E>,
        items: Vec<E>,
    ) -> Result<Vec<E>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!(
            "INSERT INTO {} (name, name_hash, {}) VALUES ($1, $2, $3) RETURNING id",
            E::TABLE,
            E::DETAIL_COLUMN
        );

        let mut saved_items = Vec::with_capacity(items.len());
        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        for item in items {
            let id: i64 = sqlx::query_scalar(&query)
                .bind(item.name())
                .bind(item.name_hash())
                .bind(item.detail())
                .fetch_one(&mut **transaction)
                .await?;

            saved_items.push(E::from_parts(id, item.name(), item.detail())?);
        }

        Ok(saved_items)
    }
}

#[async_trait]
impl<E: CatalogEntity> CreateBatch<Postgres, E> for CatalogRepositoryImpl<E> {
    async fn create_batch(&self, items: Vec<E>) -> Result<Vec<E>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use crate::utils::is_unique_violation;
    use countries_db::models::{CatalogEntity, HotelModel, NameKeyed};
    use countries_db::repository::create_batch::CreateBatch;
    use serial_test::serial;
    use super::super::test_utils::test_utils::{create_test_hotel, create_test_restaurant};

    #[tokio::test]
    #[serial]
    async fn test_create_batch() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let Some(ctx) = setup_test_context().await? else {
            return Ok(());
        };
        let repos = ctx.repos();

        let hotels = vec![create_test_hotel("Plaza", Some("4")), create_test_hotel("Ritz", None)];
        let saved = repos.hotel_repository.create_batch(hotels.clone()).await?;
        assert_eq!(saved.len(), 2);
        assert!(saved.iter().all(|h| h.id > 0));
        assert_eq!(saved[0].stars, hotels[0].stars);

        let restaurant = create_test_restaurant("Noma", Some("Nordic"));
        let saved = repos.restaurant_repository.create_batch(vec![restaurant.clone()]).await?;
        assert_eq!(saved[0].detail(), Some("Nordic"));

        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_duplicate_name_is_a_unique_violation() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let Some(ctx) = setup_test_context().await? else {
            return Ok(());
        };
        let hotel_repo = &ctx.repos().hotel_repository;

        let hotel = create_test_hotel("Plaza", None);
        hotel_repo.create_batch(vec![hotel.clone()]).await?;

        let shouting = HotelModel::from_parts(0, &hotel.name().to_uppercase(), Some("5"))?;
        let err = hotel_repo.create_batch(vec![shouting]).await.unwrap_err();
        assert!(is_unique_violation(err.as_ref()));

        Ok(())
    }
}
