use async_trait::async_trait;
use countries_db::models::CatalogEntity;
use countries_db::repository::find_by_name_hash::FindByNameHash;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{decode_catalog_row, CatalogRepositoryImpl};

impl<E: CatalogEntity> CatalogRepositoryImpl<E> {
    pub(super) async fn find_by_name_hash_impl(
        repo: &CatalogRepositoryImpl<E>,
        name_hash: i64,
    ) -> Result<Option<E>, Box<dyn Error + Send + Sync>> {
        let query = format!("SELECT {} FROM {} WHERE name_hash = $1", Self::columns(), E::TABLE);
        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(&query)
                .bind(name_hash)
                .fetch_optional(&mut **transaction)
                .await?
        };

        row.map(|row| decode_catalog_row::<E>(&row)).transpose()
    }
}

#[async_trait]
impl<E: CatalogEntity> FindByNameHash<Postgres, E> for CatalogRepositoryImpl<E> {
    async fn find_by_name_hash(&self, name_hash: i64) -> Result<Option<E>, Box<dyn Error + Send + Sync>> {
        Self::find_by_name_hash_impl(self, name_hash).await
    }
}
