use countries_db::models::CountryModel;
use std::error::Error;

use super::repo_impl::{CountryRepositoryImpl, COUNTRY_COLUMNS};
use crate::utils::TryFromRow;

impl CountryRepositoryImpl {
    /// Bulk insert in a single statement, skipping names that are already stored.
    ///
    /// A row inserted by a concurrent session between the caller's existence
    /// check and this statement is skipped rather than failing the batch.
    /// Returns only the rows this call inserted.
    pub async fn create_missing(
        &self,
        items: Vec<CountryModel>,
    ) -> Result<Vec<CountryModel>, Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let mut names = Vec::with_capacity(items.len());
        let mut name_hashes = Vec::with_capacity(items.len());
        let mut iso_codes = Vec::with_capacity(items.len());
        for item in &items {
            names.push(item.name.to_string());
            name_hashes.push(item.name_hash);
            iso_codes.push(item.iso_code.as_ref().map(|s| s.to_string()));
        }

        let query = format!(
            r#"
            INSERT INTO country (name, name_hash, iso_code)
            SELECT * FROM UNNEST($1::varchar[], $2::bigint[], $3::varchar[])
            ON CONFLICT (name_hash) DO NOTHING
            RETURNING {COUNTRY_COLUMNS}
            "#
        );
        let rows = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            sqlx::query(&query)
                .bind(names)
                .bind(name_hashes)
                .bind(iso_codes)
                .fetch_all(&mut **transaction)
                .await?
        };

        rows.iter().map(CountryModel::try_from_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use countries_db::repository::CreateBatch;
    use serial_test::serial;
    use super::super::test_utils::test_utils::{create_test_country, unique_name};

    #[tokio::test]
    #[serial]
    async fn test_create_missing_skips_stored_names() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let Some(ctx) = setup_test_context().await? else {
            return Ok(());
        };
        let country_repo = &ctx.repos().country_repository;

        let stored_name = unique_name("Stored");
        country_repo
            .create_batch(vec![create_test_country(&stored_name, Some("ST"))])
            .await?;

        let fresh = create_test_country(&unique_name("Fresh"), None);
        let inserted = country_repo
            .create_missing(vec![
                create_test_country(&stored_name.to_lowercase(), Some("XX")),
                fresh.clone(),
            ])
            .await?;

        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0].name, fresh.name);
        assert!(inserted[0].id > 0);
        assert!(inserted[0].iso_code.is_none());

        Ok(())
    }
}
