use async_trait::async_trait;
use countries_db::models::CountryModel;
use countries_db::repository::pagination::{LoadPage, Page, PageRequest};
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::{CountryRepositoryImpl, COUNTRY_COLUMNS};
use crate::utils::TryFromRow;

impl CountryRepositoryImpl {
    pub(super) async fn load_page_impl(
        repo: &CountryRepositoryImpl,
        request: PageRequest,
    ) -> Result<Page<CountryModel>, Box<dyn Error + Send + Sync>> {
        let query = format!(
            "SELECT {COUNTRY_COLUMNS} FROM country ORDER BY lower(name), id LIMIT $1 OFFSET $2"
        );

        let (total, rows) = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM country")
                .fetch_one(&mut **transaction)
                .await?;
            let rows = sqlx::query(&query)
                .bind(request.limit)
                .bind(request.offset)
                .fetch_all(&mut **transaction)
                .await?;
            (total, rows)
        };

        let items = rows
            .iter()
            .map(CountryModel::try_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, usize::try_from(total)?))
    }
}

#[async_trait]
impl LoadPage<Postgres, CountryModel> for CountryRepositoryImpl {
    async fn load_page(
        &self,
        request: PageRequest,
    ) -> Result<Page<CountryModel>, Box<dyn Error + Send + Sync>> {
        Self::load_page_impl(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use countries_db::repository::{CreateBatch, LoadPage, PageRequest};
    use serial_test::serial;
    use super::super::test_utils::test_utils::create_test_country;

    #[tokio::test]
    #[serial]
    async fn test_second_page_of_fifteen() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let Some(ctx) = setup_test_context().await? else {
            return Ok(());
        };
        ctx.clear_tables().await?;
        let country_repo = &ctx.repos().country_repository;

        let countries: Vec<_> = (0..15)
            .map(|i| create_test_country(&format!("Country {i:02}"), None))
            .collect();
        country_repo.create_batch(countries).await?;

        let page = country_repo.load_page(PageRequest::try_for_page(10, 2)?).await?;
        assert_eq!(page.total, 15);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.items[0].name.as_str(), "Country 10");
        assert_eq!(page.items[4].name.as_str(), "Country 14");

        let beyond = country_repo.load_page(PageRequest::try_for_page(10, 3)?).await?;
        assert_eq!(beyond.total, 15);
        assert!(beyond.items.is_empty());

        let far_beyond = country_repo
            .load_page(PageRequest::try_for_page(2, i64::MAX)?)
            .await?;
        assert_eq!(far_beyond.total, 15);
        assert!(far_beyond.items.is_empty());

        Ok(())
    }
}
