use async_trait::async_trait;
use countries_db::models::CountryModel;
use countries_db::repository::load_batch::LoadBatch;
use sqlx::Postgres;
use std::collections::HashMap;
use std::error::Error;

use super::repo_impl::{CountryRepositoryImpl, COUNTRY_COLUMNS};
use crate::utils::TryFromRow;

impl CountryRepositoryImpl {
    pub(super) async fn load_batch_impl(
        repo: &CountryRepositoryImpl,
        ids: &[i64],
    ) -> Result<Vec<Option<CountryModel>>, Box<dyn Error + Send + Sync>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!("SELECT {COUNTRY_COLUMNS} FROM country WHERE id = ANY($1)");
        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(&query).bind(ids).fetch_all(&mut **transaction).await?
        };

        let mut item_map = HashMap::with_capacity(rows.len());
        for row in rows {
            let item = CountryModel::try_from_row(&row)?;
            item_map.insert(item.id, item);
        }

        Ok(ids.iter().map(|id| item_map.get(id).cloned()).collect())
    }
}

#[async_trait]
impl LoadBatch<Postgres, CountryModel> for CountryRepositoryImpl {
    async fn load_batch(
        &self,
        ids: &[i64],
    ) -> Result<Vec<Option<CountryModel>>, Box<dyn Error + Send + Sync>> {
        Self::load_batch_impl(self, ids).await
    }
}
