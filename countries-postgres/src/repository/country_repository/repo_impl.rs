use countries_db::models::CountryModel;
use postgres_unit_of_work::Executor;
use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

/// Column list shared by every country SELECT and RETURNING clause.
pub(super) const COUNTRY_COLUMNS: &str = "id, name, name_hash, iso_code";

pub struct CountryRepositoryImpl {
    pub executor: Executor,
}

impl CountryRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for CountryModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(CountryModel {
            id: row.try_get("id")?,
            name: get_heapless_string(row, "name")?,
            name_hash: row.try_get("name_hash")?,
            iso_code: get_optional_heapless_string(row, "iso_code")?,
        })
    }
}
