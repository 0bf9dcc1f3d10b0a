use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Repository trait for eager loading the entities linked to a set of countries
///
/// Returns `(country_id, entity)` pairs ordered by country id, then by entity
/// name. An entity linked to several of the countries appears once per country.
#[async_trait]
pub trait LoadLinked<DB: Database, T: Identifiable>: Send + Sync {
    async fn load_by_country_ids(
        &self,
        country_ids: &[i64],
    ) -> Result<Vec<(i64, T)>, Box<dyn std::error::Error + Send + Sync>>;
}
