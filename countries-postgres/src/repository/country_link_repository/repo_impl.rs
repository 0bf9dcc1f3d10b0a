use countries_db::models::CatalogEntity;
use std::marker::PhantomData;

use postgres_unit_of_work::Executor;

/// Repository over the association table between countries and `E`.
pub struct CountryLinkRepositoryImpl<E: CatalogEntity> {
    pub executor: Executor,
    _entity: PhantomData<fn() -> E>,
}

impl<E: CatalogEntity> CountryLinkRepositoryImpl<E> {
    pub fn new(executor: Executor) -> Self {
        Self {
            executor,
            _entity: PhantomData,
        }
    }
}
