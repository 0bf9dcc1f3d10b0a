use async_trait::async_trait;
use countries_db::models::{CatalogEntity, CountryLinkModel};
use countries_db::repository::link_batch::LinkBatch;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::CountryLinkRepositoryImpl;

impl<E: CatalogEntity> CountryLinkRepositoryImpl<E> {
    pub(super) async fn link_batch_impl(
        repo: &CountryLinkRepositoryImpl<E>,
        links: &[CountryLinkModel],
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        if links.is_empty() {
            return Ok(0);
        }

        let (country_ids, item_ids): (Vec<i64>, Vec<i64>) =
            links.iter().map(|l| (l.country_id, l.item_id)).unzip();

        let query = format!(
            r#"
            INSERT INTO {} (country_id, {})
            SELECT * FROM UNNEST($1::bigint[], $2::bigint[])
            ON CONFLICT DO NOTHING
            "#,
            E::LINK_TABLE,
            E::LINK_COLUMN
        );

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let result = sqlx::query(&query)
            .bind(country_ids)
            .bind(item_ids)
            .execute(&mut **transaction)
            .await?;

        Ok(result.rows_affected() as usize)
    }
}

#[async_trait]
impl<E: CatalogEntity> LinkBatch<Postgres> for CountryLinkRepositoryImpl<E> {
    async fn link_batch(&self, links: &[CountryLinkModel]) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::link_batch_impl(self, links).await
    }
}
