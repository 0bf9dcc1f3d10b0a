use countries_db::models::CatalogEntity;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;
use std::marker::PhantomData;

use postgres_unit_of_work::Executor;

/// Table repository for one catalog entity (hotel or restaurant).
///
/// SQL is assembled from the entity's table and column constants, which are
/// compile-time identifiers; values are always bound.
pub struct CatalogRepositoryImpl<E: CatalogEntity> {
    pub executor: Executor,
    _entity: PhantomData<fn() -> E>,
}

impl<E: CatalogEntity> CatalogRepositoryImpl<E> {
    pub fn new(executor: Executor) -> Self {
        Self {
            executor,
            _entity: PhantomData,
        }
    }

    /// `id, name, name_hash, <detail>`
    pub(super) fn columns() -> String {
        format!("id, name, name_hash, {}", E::DETAIL_COLUMN)
    }
}

/// Decodes a row selected with [`CatalogRepositoryImpl::columns`], possibly
/// under a table alias.
pub(crate) fn decode_catalog_row<E: CatalogEntity>(row: &PgRow) -> Result<E, Box<dyn Error + Send + Sync>> {
    let id: i64 = row.try_get("id")?;
    let name: String = row.try_get("name")?;
    let detail: Option<String> = row.try_get(E::DETAIL_COLUMN)?;
    Ok(E::from_parts(id, &name, detail.as_deref())?)
}
