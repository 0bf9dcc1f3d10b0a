use postgres_unit_of_work::Executor;
use std::sync::Arc;

use countries_db::models::{CatalogEntity, HotelModel, RestaurantModel};

use super::{CatalogRepositoryImpl, CountryLinkRepositoryImpl, CountryRepositoryImpl};

/// Factory for the country module repositories (without caching)
pub struct CountryRepoFactory {}

impl CountryRepoFactory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {})
    }

    pub fn build_country_repo(&self, executor: &Executor) -> Arc<CountryRepositoryImpl> {
        Arc::new(CountryRepositoryImpl::new(executor.clone()))
    }

    /// Build the table repository of one catalog entity
    pub fn build_catalog_repo<E: CatalogEntity>(
        &self,
        executor: &Executor,
    ) -> Arc<CatalogRepositoryImpl<E>> {
        Arc::new(CatalogRepositoryImpl::new(executor.clone()))
    }

    /// Build the country association repository of one catalog entity
    pub fn build_link_repo<E: CatalogEntity>(
        &self,
        executor: &Executor,
    ) -> Arc<CountryLinkRepositoryImpl<E>> {
        Arc::new(CountryLinkRepositoryImpl::new(executor.clone()))
    }

    /// Build all repositories on the given executor
    pub fn build_all_repos(&self, executor: &Executor) -> CountryRepositories {
        CountryRepositories {
            country_repository: self.build_country_repo(executor),
            hotel_repository: self.build_catalog_repo(executor),
            restaurant_repository: self.build_catalog_repo(executor),
            country_hotel_repository: self.build_link_repo(executor),
            country_restaurant_repository: self.build_link_repo(executor),
        }
    }
}

/// Container for all repositories sharing one transaction
pub struct CountryRepositories {
    pub country_repository: Arc<CountryRepositoryImpl>,
    pub hotel_repository: Arc<CatalogRepositoryImpl<HotelModel>>,
    pub restaurant_repository: Arc<CatalogRepositoryImpl<RestaurantModel>>,
    pub country_hotel_repository: Arc<CountryLinkRepositoryImpl<HotelModel>>,
    pub country_restaurant_repository: Arc<CountryLinkRepositoryImpl<RestaurantModel>>,
}
