use postgres_unit_of_work::Executor;
use sqlx::PgPool;
use std::error::Error;
use std::sync::Arc;

use countries_db::models::CatalogEntity;

use crate::repository::{
    CatalogRepositoryImpl, CountryLinkRepositoryImpl, CountryRepoFactory, CountryRepositories,
};

/// Entry point to the storage layer: owns the pool and builds
/// transaction-scoped repositories.
///
/// Repositories built on the same [`Executor`] share one transaction. Nothing
/// is visible to other sessions until [`PostgresRepositories::commit`]; an
/// executor dropped without commit rolls back.
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
    factory: Arc<CountryRepoFactory>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self {
            pool,
            factory: CountryRepoFactory::new(),
        }
    }

    /// Begin a transaction and wrap it in a shared executor
    pub async fn begin(&self) -> Result<Executor, sqlx::Error> {
        let tx = self.pool.begin().await?;
        Ok(Executor::new(tx))
    }

    /// Commit the executor's transaction
    pub async fn commit(&self, executor: Executor) -> Result<(), Box<dyn Error + Send + Sync>> {
        let tx = executor
            .tx
            .lock()
            .await
            .take()
            .ok_or("Transaction has been consumed")?;
        tx.commit().await?;
        Ok(())
    }

    /// Create all repositories sharing the executor's transaction
    pub fn build_all_repos(&self, executor: &Executor) -> CountryRepositories {
        self.factory.build_all_repos(executor)
    }

    pub fn build_catalog_repo<E: CatalogEntity>(
        &self,
        executor: &Executor,
    ) -> Arc<CatalogRepositoryImpl<E>> {
        self.factory.build_catalog_repo(executor)
    }

    pub fn build_link_repo<E: CatalogEntity>(
        &self,
        executor: &Executor,
    ) -> Arc<CountryLinkRepositoryImpl<E>> {
        self.factory.build_link_repo(executor)
    }
}
