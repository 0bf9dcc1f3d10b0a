use std::collections::HashSet;
use std::error::Error;

use super::repo_impl::CountryRepositoryImpl;

impl CountryRepositoryImpl {
    /// The subset of `name_hashes` already stored, fetched in one query.
    pub async fn find_existing_name_hashes(
        &self,
        name_hashes: &[i64],
    ) -> Result<HashSet<i64>, Box<dyn Error + Send + Sync>> {
        if name_hashes.is_empty() {
            return Ok(HashSet::new());
        }

        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let existing: Vec<i64> =
            sqlx::query_scalar("SELECT name_hash FROM country WHERE name_hash = ANY($1)")
                .bind(name_hashes)
                .fetch_all(&mut **transaction)
                .await?;

        Ok(existing.into_iter().collect())
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
    async fn test_find_existing_name_hashes() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let Some(ctx) = setup_test_context().await? else {
            return Ok(());
        };
        let country_repo = &ctx.repos().country_repository;

        let stored = create_test_country(&unique_name("Stored"), None);
        let fresh = create_test_country(&unique_name("Fresh"), None);
        country_repo.create_batch(vec![stored.clone()]).await?;

        let existing = country_repo
            .find_existing_name_hashes(&[stored.name_hash, fresh.name_hash])
            .await?;
        assert!(existing.contains(&stored.name_hash));
        assert!(!existing.contains(&fresh.name_hash));

        assert!(country_repo.find_existing_name_hashes(&[]).await?.is_empty());

        Ok(())
    }
}
