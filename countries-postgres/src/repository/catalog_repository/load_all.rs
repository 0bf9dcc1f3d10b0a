use async_trait::async_trait;
use countries_db::models::CatalogEntity;
use countries_db::repository::load_all::LoadAll;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{decode_catalog_row, CatalogRepositoryImpl};

impl<E: CatalogEntity> CatalogRepositoryImpl<E> {
    pub(super) async fn load_all_impl(
        repo: &CatalogRepositoryImpl<E>,
    ) -> Result<Vec<E>, Box<dyn Error + Send + Sync>> {
        let query = format!("SELECT {} FROM {} ORDER BY lower(name), id", Self::columns(), E::TABLE);
        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(&query).fetch_all(&mut **transaction).await?
        };

        rows.iter().map(decode_catalog_row::<E>).collect()
    }
}

#[async_trait]
impl<E: CatalogEntity> LoadAll<Postgres, E> for CatalogRepositoryImpl<E> {
    async fn load_all(&self) -> Result<Vec<E>, Box<dyn Error + Send + Sync>> {
        Self::load_all_impl(self).await
    }
}
