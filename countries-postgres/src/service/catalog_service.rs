use async_trait::async_trait;
use countries_api::domain::{CatalogDraft, CatalogPatch, Listing};
use countries_api::{ApiError, ApiResult, CatalogService};
use countries_db::models::{CatalogEntity, HotelModel, RestaurantModel};
use countries_db::repository::{CreateBatch, DeleteBatch, FindByNameHash, LoadAll, LoadBatch, UpdateBatch};
use std::marker::PhantomData;
use std::sync::Arc;
use validator::Validate;

use crate::postgres_repositories::PostgresRepositories;
use crate::repository::CatalogRepositoryImpl;
use crate::utils::{conflict_or_database_error, database_error};

/// CRUD over one catalog table; hotels and restaurants share this implementation.
pub struct CatalogServiceImpl<E: CatalogEntity> {
    repositories: Arc<PostgresRepositories>,
    _entity: PhantomData<fn() -> E>,
}

pub type HotelServiceImpl = CatalogServiceImpl<HotelModel>;
pub type RestaurantServiceImpl = CatalogServiceImpl<RestaurantModel>;

impl<E: CatalogEntity> CatalogServiceImpl<E> {
    pub fn new(repositories: Arc<PostgresRepositories>) -> Self {
        Self {
            repositories,
            _entity: PhantomData,
        }
    }

    async fn load_one(repo: &CatalogRepositoryImpl<E>, id: i64) -> ApiResult<E> {
        repo.load_batch(&[id])
            .await
            .map_err(database_error)?
            .pop()
            .flatten()
            .ok_or_else(|| ApiError::NotFound(format!("No {} with id {}.", E::LABEL, id)))
    }
}

fn duplicate_name(label: &str, name: &str) -> String {
    format!("A {label} named '{name}' already exists.")
}

#[async_trait]
impl<E: CatalogEntity> CatalogService<E::Item> for CatalogServiceImpl<E> {
    async fn save(&self, draft: CatalogDraft) -> ApiResult<E::Item> {
        draft.validate()?;
        let model = E::from_parts(0, &draft.name, draft.detail.as_deref()).map_err(ApiError::ValidationError)?;

        let executor = self.repositories.begin().await?;
        let repo = self.repositories.build_catalog_repo::<E>(&executor);

        if repo
            .find_by_name_hash(model.name_hash())
            .await
            .map_err(database_error)?
            .is_some()
        {
            return Err(ApiError::Conflict(duplicate_name(E::LABEL, &draft.name)));
        }

        let created = repo
            .create_batch(vec![model])
            .await
            .map_err(|e| conflict_or_database_error(e, || duplicate_name(E::LABEL, &draft.name)))?
            .pop()
            .ok_or_else(|| ApiError::InternalError("Insert returned no row".to_string()))?;
        self.repositories.commit(executor).await.map_err(database_error)?;

        tracing::info!(entity = E::LABEL, id = created.get_id(), name = created.name(), "created");
        Ok(created.into_item())
    }

    async fn get_all(&self) -> ApiResult<Listing<E::Item>> {
        let executor = self.repositories.begin().await?;
        let repo = self.repositories.build_catalog_repo::<E>(&executor);

        let items = repo.load_all().await.map_err(database_error)?;
        Ok(Listing::from_items(items.into_iter().map(E::into_item).collect()))
    }

    async fn update(&self, patch: CatalogPatch) -> ApiResult<E::Item> {
        patch.validate()?;

        let executor = self.repositories.begin().await?;
        let repo = self.repositories.build_catalog_repo::<E>(&executor);

        let existing = Self::load_one(&repo, patch.id).await?;
        let patched = existing
            .patched(patch.name.as_deref(), patch.detail.as_deref())
            .map_err(ApiError::ValidationError)?;

        if patched.name_hash() != existing.name_hash()
            && repo
                .find_by_name_hash(patched.name_hash())
                .await
                .map_err(database_error)?
                .is_some()
        {
            return Err(ApiError::Conflict(duplicate_name(E::LABEL, patched.name())));
        }

        repo.update_batch(vec![patched.clone()])
            .await
            .map_err(|e| conflict_or_database_error(e, || duplicate_name(E::LABEL, patched.name())))?;
        self.repositories.commit(executor).await.map_err(database_error)?;

        tracing::info!(entity = E::LABEL, id = patched.get_id(), "updated");
        Ok(patched.into_item())
    }

    async fn delete(&self, id: i64) -> ApiResult<E::Item> {
        let executor = self.repositories.begin().await?;
        let repo = self.repositories.build_catalog_repo::<E>(&executor);

        let existing = Self::load_one(&repo, id).await?;
        repo.delete_batch(&[id]).await.map_err(database_error)?;
        self.repositories.commit(executor).await.map_err(database_error)?;

        tracing::info!(entity = E::LABEL, id, "deleted");
        Ok(existing.into_item())
    }
}
