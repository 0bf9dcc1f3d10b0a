use async_trait::async_trait;
use countries_db::models::CatalogEntity;
use countries_db::repository::delete_batch::DeleteBatch;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::CatalogRepositoryImpl;

impl<E: CatalogEntity> CatalogRepositoryImpl<E> {
    pub(super) async fn delete_batch_impl(
        repo: &CatalogRepositoryImpl<E>,
        ids: &[i64],
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(0);
        }

        // Country associations are removed by ON DELETE CASCADE
        let query = format!("DELETE FROM {} WHERE id = ANY($1)", E::TABLE);
        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let result = sqlx::query(&query)
            .bind(ids)
            .execute(&mut **transaction)
            .await?;

        Ok(result.rows_affected() as usize)
    }
}

#[async_trait]
impl<E: CatalogEntity> DeleteBatch<Postgres> for CatalogRepositoryImpl<E> {
    async fn delete_batch(&self, ids: &[i64]) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::delete_batch_impl(self, ids).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use countries_db::models::{CountryLinkModel, CountryModel};
    use countries_db::repository::{CreateBatch, DeleteBatch, LinkBatch, LoadBatch, LoadLinked};
    use serial_test::serial;
    use uuid::Uuid;
    use super::super::test_utils::test_utils::create_test_hotel;

    #[tokio::test]
    #[serial]
    async fn test_deleting_a_hotel_detaches_it_from_countries() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let Some(ctx) = setup_test_context().await? else {
            return Ok(());
        };
        let repos = ctx.repos();

        let country = repos
            .country_repository
            .create_batch(vec![CountryModel::new(&format!("Host {}", Uuid::new_v4().simple()), None)?])
            .await?
            .remove(0);
        let hotels = repos
            .hotel_repository
            .create_batch(vec![create_test_hotel("Plaza", None), create_test_hotel("Ritz", None)])
            .await?;
        repos
            .country_hotel_repository
            .link_batch(&[
                CountryLinkModel::new(country.id, hotels[0].id),
                CountryLinkModel::new(country.id, hotels[1].id),
            ])
            .await?;

        assert_eq!(repos.hotel_repository.delete_batch(&[hotels[0].id]).await?, 1);

        let linked = repos.country_hotel_repository.load_by_country_ids(&[country.id]).await?;
        assert_eq!(linked.len(), 1);
        assert_eq!(linked[0].1.id, hotels[1].id);
        assert!(repos.country_repository.load_batch(&[country.id]).await?[0].is_some());

        Ok(())
    }
}
