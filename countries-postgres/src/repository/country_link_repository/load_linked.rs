use async_trait::async_trait;
use countries_db::models::CatalogEntity;
use countries_db::repository::load_linked::LoadLinked;
use sqlx::{Postgres, Row};
use std::error::Error;

use super::repo_impl::CountryLinkRepositoryImpl;
use crate::repository::catalog_repository::repo_impl::decode_catalog_row;

impl<E: CatalogEntity> CountryLinkRepositoryImpl<E> {
    pub(super) async fn load_by_country_ids_impl(
        repo: &CountryLinkRepositoryImpl<E>,
        country_ids: &[i64],
    ) -> Result<Vec<(i64, E)>, Box<dyn Error + Send + Sync>> {
        if country_ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!(
            r#"
            SELECT l.country_id, e.id, e.name, e.name_hash, e.{detail}
            FROM {link} l
            JOIN {table} e ON e.id = l.{link_column}
            WHERE l.country_id = ANY($1)
            ORDER BY l.country_id, lower(e.name), e.id
            "#,
            detail = E::DETAIL_COLUMN,
            link = E::LINK_TABLE,
            table = E::TABLE,
            link_column = E::LINK_COLUMN,
        );
        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(&query)
                .bind(country_ids)
                .fetch_all(&mut **transaction)
                .await?
        };

        let mut linked = Vec::with_capacity(rows.len());
        for row in rows {
            let country_id: i64 = row.try_get("country_id")?;
            linked.push((country_id, decode_catalog_row::<E>(&row)?));
        }
        Ok(linked)
    }
}

#[async_trait]
impl<E: CatalogEntity> LoadLinked<Postgres, E> for CountryLinkRepositoryImpl<E> {
    async fn load_by_country_ids(
        &self,
        country_ids: &[i64],
    ) -> Result<Vec<(i64, E)>, Box<dyn Error + Send + Sync>> {
        Self::load_by_country_ids_impl(self, country_ids).await
    }
}
