use async_trait::async_trait;
use countries_db::models::CountryModel;
use countries_db::repository::create_batch::CreateBatch;
use sqlx::Postgres;
use std::error::Error;

use super::repo_impl::CountryRepositoryImpl;

impl CountryRepositoryImpl {
    pub(super) async fn create_batch_impl(
        repo: &CountryRepositoryImpl,
        items: Vec<CountryModel>,
    ) -> Result<Vec<CountryModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut saved_items = Vec::with_capacity(items.len());
        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;

        for mut item in items {
            let id: i64 = sqlx::query_scalar(
                r#"
                INSERT INTO country (name, name_hash, iso_code)
                VALUES ($1, $2, $3)
                RETURNING id
                "#,
            )
            .bind(item.name.as_str())
            .bind(item.name_hash)
            .bind(item.iso_code.as_ref().map(|s| s.as_str()))
            .fetch_one(&mut **transaction)
            .await?;

            item.id = id;
            saved_items.push(item);
        }

        Ok(saved_items)
    }
}

#[async_trait]
impl CreateBatch<Postgres, CountryModel> for CountryRepositoryImpl {
    async fn create_batch(
        &self,
        items: Vec<CountryModel>,
    ) -> Result<Vec<CountryModel>, Box<dyn Error + Send + Sync>> {
        Self::create_batch_impl(self, items).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use crate::utils::is_unique_violation;
    use countries_db::repository::create_batch::CreateBatch;
    use serial_test::serial;
    use super::super::test_utils::test_utils::{create_test_country, unique_name};

    #[tokio::test]
    #[serial]
    async fn test_create_batch() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let Some(ctx) = setup_test_context().await? else {
            return Ok(());
        };
        let country_repo = &ctx.repos().country_repository;

        let countries: Vec<_> = (0..5)
            .map(|i| create_test_country(&unique_name(&format!("Country {i}")), Some("XX")))
            .collect();

        let saved = country_repo.create_batch(countries.clone()).await?;

        assert_eq!(saved.len(), 5);
        for (saved, original) in saved.iter().zip(&countries) {
            assert!(saved.id > 0);
            assert_eq!(saved.name, original.name);
        }

        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_create_batch_empty() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let Some(ctx) = setup_test_context().await? else {
            return Ok(());
        };
        let country_repo = &ctx.repos().country_repository;

        let saved = country_repo.create_batch(Vec::new()).await?;
        assert!(saved.is_empty());

        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn test_duplicate_name_in_other_case_is_a_unique_violation() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let Some(ctx) = setup_test_context().await? else {
            return Ok(());
        };
        let country_repo = &ctx.repos().country_repository;

        let name = unique_name("Chile");
        country_repo.create_batch(vec![create_test_country(&name, None)]).await?;

        let err = country_repo
            .create_batch(vec![create_test_country(&name.to_uppercase(), None)])
            .await
            .unwrap_err();
        assert!(is_unique_violation(err.as_ref()));

        Ok(())
    }
}
