//! Test helper module for transaction-based test isolation
//!
//! Database tests run inside a transaction that is rolled back when the
//! [`TestContext`] is dropped. When `DATABASE_URL` is not set the helpers
//! return `None` and the calling test returns early.

use crate::config::{AppConfig, ConfigError};
use postgres_unit_of_work::Executor;
use crate::postgres_repositories::PostgresRepositories;
use crate::repository::db_init::init_database;
use crate::repository::CountryRepositories;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::OnceCell;

static SCHEMA: OnceCell<()> = OnceCell::const_new();

/// Test context that provides a transactional database session
pub struct TestContext {
    pub executor: Executor,
    pub repos: CountryRepositories,
}

impl TestContext {
    pub fn repos(&self) -> &CountryRepositories {
        &self.repos
    }

    /// Empty every table inside this context's transaction.
    ///
    /// For tests that assert on whole-table contents; the rows come back on rollback.
    pub async fn clear_tables(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        sqlx::raw_sql("DELETE FROM country; DELETE FROM hotel; DELETE FROM restaurant;")
            .execute(&mut **transaction)
            .await?;
        Ok(())
    }
}

async fn connect(max_connections: u32) -> Result<Option<PgPool>, Box<dyn Error + Send + Sync>> {
    let mut config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(ConfigError::Missing(_)) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    config.max_connections = max_connections;

    let schema_config = config.clone();
    SCHEMA
        .get_or_try_init(|| async move {
            let pool = schema_config.connect().await?;
            init_database(&pool).await?;
            Ok::<(), sqlx::Error>(())
        })
        .await?;

    Ok(Some(config.connect().await?))
}

/// Setup a test context with a transactional database session
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///     let Some(ctx) = setup_test_context().await? else { return Ok(()) };
///     let country_repo = &ctx.repos().country_repository;
///     // All changes are rolled back when ctx is dropped
///     Ok(())
/// }
/// ```
pub async fn setup_test_context() -> Result<Option<TestContext>, Box<dyn Error + Send + Sync>> {
    let Some(pool) = connect(1).await? else {
        return Ok(None);
    };
    let repositories = PostgresRepositories::new(Arc::new(pool));
    let executor = repositories.begin().await?;
    let repos = repositories.build_all_repos(&executor);
    Ok(Some(TestContext { executor, repos }))
}

/// Setup shared repositories for tests that exercise services, which open
/// and commit their own transactions.
pub async fn setup_shared_repos() -> Result<Option<Arc<PostgresRepositories>>, Box<dyn Error + Send + Sync>> {
    let Some(pool) = connect(5).await? else {
        return Ok(None);
    };
    Ok(Some(Arc::new(PostgresRepositories::new(Arc::new(pool)))))
}

/// Repositories over a pool that never connects, for exercising code paths
/// that must fail before touching the database.
pub fn offline_repos() -> Arc<PostgresRepositories> {
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect_lazy("postgres://offline@127.0.0.1:1/countries")
        .expect("valid connection string");
    Arc::new(PostgresRepositories::new(Arc::new(pool)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use countries_db::models::CountryModel;
    use countries_db::repository::{CreateBatch, FindByNameHash};
    use serial_test::serial;
    use uuid::Uuid;

    #[tokio::test]
    #[serial]
    async fn test_transaction_rollback() -> Result<(), Box<dyn Error + Send + Sync>> {
        let name = format!("Rollback {}", Uuid::new_v4());
        let country = CountryModel::new(&name, None)?;
        {
            let Some(ctx) = setup_test_context().await? else {
                return Ok(());
            };
            let country_repo = &ctx.repos().country_repository;
            country_repo.create_batch(vec![country.clone()]).await?;

            assert!(country_repo.find_by_name_hash(country.name_hash).await?.is_some());
        }

        let Some(ctx) = setup_test_context().await? else {
            return Ok(());
        };
        let country_repo = &ctx.repos().country_repository;
        assert!(country_repo.find_by_name_hash(country.name_hash).await?.is_none());

        Ok(())
    }
}
