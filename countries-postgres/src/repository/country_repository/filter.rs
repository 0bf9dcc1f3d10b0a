use countries_api::domain::CountryFilter;
use countries_db::models::{CatalogEntity, CountryModel, HotelModel, RestaurantModel};
use sqlx::{Postgres, QueryBuilder};
use std::error::Error;

use super::repo_impl::CountryRepositoryImpl;
use crate::utils::{contains_pattern, TryFromRow};

/// Builds the country search.
///
/// Every present term narrows the result (logical AND) with a
/// case-insensitive substring match. Terms on hotels or restaurants each get
/// their own `EXISTS`, so `restaurant` and `type` may match different
/// restaurants of the same country.
pub(super) fn build_filter_query(filter: &CountryFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(
        "SELECT c.id, c.name, c.name_hash, c.iso_code FROM country c WHERE TRUE",
    );

    if let Some(term) = &filter.country {
        query.push(" AND c.name ILIKE ").push_bind(contains_pattern(term));
    }
    if let Some(term) = &filter.iso {
        query.push(" AND c.iso_code ILIKE ").push_bind(contains_pattern(term));
    }
    if let Some(term) = &filter.restaurant {
        push_linked_term::<RestaurantModel>(&mut query, "name", term);
    }
    if let Some(term) = &filter.restaurant_type {
        push_linked_term::<RestaurantModel>(&mut query, RestaurantModel::DETAIL_COLUMN, term);
    }
    if let Some(term) = &filter.hotel {
        push_linked_term::<HotelModel>(&mut query, "name", term);
    }
    if let Some(term) = &filter.stars {
        push_linked_term::<HotelModel>(&mut query, HotelModel::DETAIL_COLUMN, term);
    }

    query.push(" ORDER BY lower(c.name), c.id");
    query
}

fn push_linked_term<E: CatalogEntity>(
    query: &mut QueryBuilder<'static, Postgres>,
    column: &str,
    term: &str,
) {
    query
        .push(format!(
            " AND EXISTS (SELECT 1 FROM {link} l JOIN {table} e ON e.id = l.{link_column} WHERE l.country_id = c.id AND e.{column} ILIKE ",
            link = E::LINK_TABLE,
            table = E::TABLE,
            link_column = E::LINK_COLUMN,
        ))
        .push_bind(contains_pattern(term))
        .push(")");
}

impl CountryRepositoryImpl {
    /// Countries matching every present filter term, ordered by name.
    ///
    /// Blank terms are ignored; an empty filter returns every country.
    pub async fn filter(
        &self,
        filter: &CountryFilter,
    ) -> Result<Vec<CountryModel>, Box<dyn Error + Send + Sync>> {
        let mut query = build_filter_query(&filter.clone().normalized());
        let rows = {
            let mut tx = self.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query.build().fetch_all(&mut **transaction).await?
        };

        rows.iter().map(CountryModel::try_from_row).collect()
    }
}
