use async_trait::async_trait;
use countries_db::models::CountryModel;
use countries_db::repository::load_all::LoadAll;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{CountryRepositoryImpl, COUNTRY_COLUMNS};
use crate::utils::TryFromRow;

impl CountryRepositoryImpl {
    pub(super) async fn load_all_impl(
        repo: &CountryRepositoryImpl,
    ) -> Result<Vec<CountryModel>, Box<dyn Error + Send + Sync>> {
        let query = format!("SELECT {COUNTRY_COLUMNS} FROM country ORDER BY lower(name), id");
        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(&query).fetch_all(&mut **transaction).await?
        };

        rows.iter().map(CountryModel::try_from_row).collect()
    }
}

#[async_trait]
impl LoadAll<Postgres, CountryModel> for CountryRepositoryImpl {
    async fn load_all(&self) -> Result<Vec<CountryModel>, Box<dyn Error + Send + Sync>> {
        Self::load_all_impl(self).await
    }
}
