use async_trait::async_trait;
use countries_db::models::CountryModel;
use countries_db::repository::update_batch::UpdateBatch;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::CountryRepositoryImpl;

impl CountryRepositoryImpl {
    pub(super) async fn update_batch_impl(
        repo: &CountryRepositoryImpl,
        items: Vec<CountryModel>,
    ) -> Result<Vec<CountryModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut updated_items = Vec::with_capacity(items.len());
        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        for item in items {
            let result = sqlx::query(
                r#"
                UPDATE country SET
                    name = $2,
                    name_hash = $3,
                    iso_code = $4
                WHERE id = $1
                "#,
            )
            .bind(item.id)
            .bind(item.name.as_str())
            .bind(item.name_hash)
            .bind(item.iso_code.as_ref().map(|s| s.as_str()))
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
impl UpdateBatch<Postgres, CountryModel> for CountryRepositoryImpl {
    async fn update_batch(
        &self,
        items: Vec<CountryModel>,
    ) -> Result<Vec<CountryModel>, Box<dyn Error + Send + Sync>> {
        Self::update_batch_impl(self, items).await
    }
}
