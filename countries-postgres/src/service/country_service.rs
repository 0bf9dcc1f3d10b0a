use async_trait::async_trait;
use countries_api::domain::{
    AttachRequest, Country, CountryFilter, CountryPage, ImportSummary, Listing, PageQuery,
    RegisterCountry, UpdateCountry,
};
use countries_api::{ApiError, ApiResult, CountryService, CountrySource};
use countries_db::models::{CatalogEntity, CountryModel, HotelModel, NameKeyed, RestaurantModel};
use countries_db::repository::{
    CreateBatch, DeleteBatch, ExistByIds, FindByNameHash, LinkBatch, LoadAll, LoadBatch, LoadPage,
    PageRequest, UpdateBatch,
};
use countries_db::utils::name_hash;
use std::sync::Arc;
use validator::Validate;

use super::aggregate::load_aggregates;
use super::attach::{distinct_ids, plan_links};
use super::import::{missing_countries, prepare_import};
use crate::postgres_repositories::PostgresRepositories;
use crate::repository::CountryRepositories;
use crate::utils::{conflict_or_database_error, database_error};

/// Country service on Postgres.
///
/// Each call runs in its own unit of work and commits only on success.
pub struct CountryServiceImpl {
    repositories: Arc<PostgresRepositories>,
    source: Arc<dyn CountrySource>,
}

impl CountryServiceImpl {
    pub fn new(repositories: Arc<PostgresRepositories>, source: Arc<dyn CountrySource>) -> Self {
        Self {
            repositories,
            source,
        }
    }

    async fn attach<E: CatalogEntity>(&self, request: AttachRequest) -> ApiResult<Country> {
        request.validate()?;
        let hash = name_hash(&request.country_name).map_err(ApiError::InternalError)?;

        let executor = self.repositories.begin().await?;
        let repos = self.repositories.build_all_repos(&executor);
        let catalog_repo = self.repositories.build_catalog_repo::<E>(&executor);
        let link_repo = self.repositories.build_link_repo::<E>(&executor);

        let country = repos
            .country_repository
            .find_by_name_hash(hash)
            .await
            .map_err(database_error)?
            .ok_or_else(|| {
                ApiError::BadRequest(format!("Country '{}' does not exist.", request.country_name))
            })?;

        let ids = distinct_ids(&request.ids);
        let existence = catalog_repo.exist_by_ids(&ids).await.map_err(database_error)?;
        let links = plan_links(country.id, &existence).map_err(|missing| {
            ApiError::BadRequest(format!("No {} with id {}.", E::LABEL, missing))
        })?;

        let inserted = link_repo.link_batch(&links).await.map_err(database_error)?;
        let attached = to_country(&repos, country).await?;
        self.repositories.commit(executor).await.map_err(database_error)?;

        tracing::info!(
            country = %attached.name,
            entity = E::LABEL,
            requested = request.ids.len(),
            inserted,
            "attached to country"
        );
        Ok(attached)
    }
}

async fn to_country(repos: &CountryRepositories, country: CountryModel) -> ApiResult<Country> {
    load_aggregates(repos, vec![country])
        .await
        .map_err(database_error)?
        .pop()
        .map(Country::from)
        .ok_or_else(|| ApiError::InternalError("Country vanished while loading".to_string()))
}

async fn to_listing(repos: &CountryRepositories, countries: Vec<CountryModel>) -> ApiResult<Listing<Country>> {
    let aggregates = load_aggregates(repos, countries).await.map_err(database_error)?;
    Ok(Listing::from_items(aggregates.into_iter().map(Country::from).collect()))
}

fn duplicate_name(name: &str) -> String {
    format!("Country '{name}' already exists.")
}

#[async_trait]
impl CountryService for CountryServiceImpl {
    async fn get_all(&self) -> ApiResult<Listing<Country>> {
        let executor = self.repositories.begin().await?;
        let repos = self.repositories.build_all_repos(&executor);

        let countries = repos.country_repository.load_all().await.map_err(database_error)?;
        to_listing(&repos, countries).await
    }

    async fn get_page(&self, query: PageQuery) -> ApiResult<CountryPage> {
        query.validate()?;
        let request =
            PageRequest::try_for_page(query.page_size, query.page).map_err(ApiError::ValidationError)?;

        let executor = self.repositories.begin().await?;
        let repos = self.repositories.build_all_repos(&executor);

        let page = repos
            .country_repository
            .load_page(request)
            .await
            .map_err(database_error)?;
        let total = page.total;
        let countries = load_aggregates(&repos, page.items)
            .await
            .map_err(database_error)?
            .into_iter()
            .map(Country::from)
            .collect();

        Ok(CountryPage {
            total,
            page: query.page,
            page_size: query.page_size,
            countries,
        })
    }

    async fn filter(&self, filter: CountryFilter) -> ApiResult<Listing<Country>> {
        let filter = filter.normalized();
        tracing::debug!(?filter, "filtering countries");

        let executor = self.repositories.begin().await?;
        let repos = self.repositories.build_all_repos(&executor);

        let countries = repos
            .country_repository
            .filter(&filter)
            .await
            .map_err(database_error)?;
        to_listing(&repos, countries).await
    }

    async fn save(&self, request: RegisterCountry) -> ApiResult<Country> {
        request.validate()?;
        let model = CountryModel::new(&request.name, request.iso_code.as_deref())
            .map_err(ApiError::ValidationError)?;

        let executor = self.repositories.begin().await?;
        let repos = self.repositories.build_all_repos(&executor);

        if repos
            .country_repository
            .find_by_name_hash(model.name_hash)
            .await
            .map_err(database_error)?
            .is_some()
        {
            return Err(ApiError::Conflict(duplicate_name(&request.name)));
        }

        let created = repos
            .country_repository
            .create_batch(vec![model])
            .await
            .map_err(|e| conflict_or_database_error(e, || duplicate_name(&request.name)))?
            .pop()
            .ok_or_else(|| ApiError::InternalError("Insert returned no row".to_string()))?;
        let created = to_country(&repos, created).await?;
        self.repositories.commit(executor).await.map_err(database_error)?;

        tracing::info!(id = created.id, country = %created.name, "country created");
        Ok(created)
    }

    async fn update(&self, request: UpdateCountry) -> ApiResult<Country> {
        request.validate()?;

        let executor = self.repositories.begin().await?;
        let repos = self.repositories.build_all_repos(&executor);

        let existing = repos
            .country_repository
            .load_batch(&[request.id])
            .await
            .map_err(database_error)?
            .pop()
            .flatten()
            .ok_or_else(|| ApiError::NotFound(format!("No country with id {}.", request.id)))?;

        let patched = existing
            .patched(request.name.as_deref(), request.iso_code.as_deref())
            .map_err(ApiError::ValidationError)?;

        if patched.name_hash != existing.name_hash
            && repos
                .country_repository
                .find_by_name_hash(patched.name_hash)
                .await
                .map_err(database_error)?
                .is_some()
        {
            return Err(ApiError::Conflict(duplicate_name(patched.name())));
        }

        repos
            .country_repository
            .update_batch(vec![patched.clone()])
            .await
            .map_err(|e| conflict_or_database_error(e, || duplicate_name(patched.name())))?;
        let updated = to_country(&repos, patched).await?;
        self.repositories.commit(executor).await.map_err(database_error)?;

        tracing::info!(id = updated.id, country = %updated.name, "country updated");
        Ok(updated)
    }

    async fn delete(&self, name: &str) -> ApiResult<Country> {
        if name.trim().is_empty() {
            return Err(ApiError::ValidationError("Country name must not be blank.".to_string()));
        }
        let hash = name_hash(name).map_err(ApiError::InternalError)?;

        let executor = self.repositories.begin().await?;
        let repos = self.repositories.build_all_repos(&executor);

        let country = repos
            .country_repository
            .find_by_name_hash(hash)
            .await
            .map_err(database_error)?
            .ok_or_else(|| ApiError::NotFound(format!("Country '{name}' does not exist.")))?;

        let removed = to_country(&repos, country).await?;
        repos
            .country_repository
            .delete_batch(&[removed.id])
            .await
            .map_err(database_error)?;
        self.repositories.commit(executor).await.map_err(database_error)?;

        tracing::info!(id = removed.id, country = %removed.name, "country deleted");
        Ok(removed)
    }

    async fn attach_hotels(&self, request: AttachRequest) -> ApiResult<Country> {
        self.attach::<HotelModel>(request).await
    }

    async fn attach_restaurants(&self, request: AttachRequest) -> ApiResult<Country> {
        self.attach::<RestaurantModel>(request).await
    }

    async fn update_list(&self) -> ApiResult<ImportSummary> {
        // Fetch before opening a transaction; a failed fetch writes nothing
        let records = self.source.fetch_countries().await?;
        let fetched = records.len();
        let prepared = prepare_import(records);
        let name_hashes = prepared.name_hashes();
        let candidates = prepared.candidates.len();

        let executor = self.repositories.begin().await?;
        let repos = self.repositories.build_all_repos(&executor);

        let existing = repos
            .country_repository
            .find_existing_name_hashes(&name_hashes)
            .await
            .map_err(database_error)?;
        let missing = missing_countries(prepared.candidates, &existing);
        let inserted = repos
            .country_repository
            .create_missing(missing)
            .await
            .map_err(database_error)?
            .len();
        self.repositories.commit(executor).await.map_err(database_error)?;

        let summary = ImportSummary {
            fetched,
            inserted,
            already_present: candidates.saturating_sub(inserted),
            duplicates: prepared.duplicates,
            rejected: prepared.rejected,
        };
        tracing::info!(
            fetched = summary.fetched,
            inserted = summary.inserted,
            already_present = summary.already_present,
            duplicates = summary.duplicates,
            rejected = summary.rejected,
            "country list imported"
        );
        Ok(summary)
    }
}
