use async_trait::async_trait;
use countries_db::models::CountryModel;
use countries_db::repository::find_by_name_hash::FindByNameHash;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{CountryRepositoryImpl, COUNTRY_COLUMNS};
use crate::utils::TryFromRow;

impl CountryRepositoryImpl {
    pub(super) async fn find_by_name_hash_impl(
        repo: &CountryRepositoryImpl,
        name_hash: i64,
    ) -> Result<Option<CountryModel>, Box<dyn Error + Send + Sync>> {
        let query = format!("SELECT {COUNTRY_COLUMNS} FROM country WHERE name_hash = $1");
        let row = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(&query)
                .bind(name_hash)
                .fetch_optional(&mut **transaction)
                .await?
        };

        row.map(|row| CountryModel::try_from_row(&row)).transpose()
    }
}

#[async_trait]
impl FindByNameHash<Postgres, CountryModel> for CountryRepositoryImpl {
    async fn find_by_name_hash(
        &self,
        name_hash: i64,
    ) -> Result<Option<CountryModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_name_hash_impl(self, name_hash).await
    }
}
