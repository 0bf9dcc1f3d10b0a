use async_trait::async_trait;

use crate::domain::{
    AttachRequest, CatalogDraft, CatalogPatch, Country, CountryFilter, CountryPage, Hotel,
    ImportSummary, Listing, PageQuery, RegisterCountry, Restaurant, UpdateCountry,
};
use crate::error::ApiResult;

/// Country queries, mutations and association editing.
///
/// Associations are only edited from the country side.
#[async_trait]
pub trait CountryService: Send + Sync {
    /// All countries with their hotels and restaurants, ordered by name.
    async fn get_all(&self) -> ApiResult<Listing<Country>>;

    /// Name-ordered page of countries plus the total count.
    async fn get_page(&self, query: PageQuery) -> ApiResult<CountryPage>;

    /// Countries matching every supplied filter term, ordered by name.
    async fn filter(&self, filter: CountryFilter) -> ApiResult<Listing<Country>>;

    /// Register a country. Names are unique regardless of case.
    async fn save(&self, request: RegisterCountry) -> ApiResult<Country>;

    /// Patch a country by id.
    async fn update(&self, request: UpdateCountry) -> ApiResult<Country>;

    /// Delete a country by (case-insensitive) name, returning the removed record.
    async fn delete(&self, name: &str) -> ApiResult<Country>;

    /// Attach hotels by id. Either every id is attached or none is.
    async fn attach_hotels(&self, request: AttachRequest) -> ApiResult<Country>;

    /// Attach restaurants by id. Either every id is attached or none is.
    async fn attach_restaurants(&self, request: AttachRequest) -> ApiResult<Country>;

    /// Import countries from the external source, inserting only unknown names.
    async fn update_list(&self) -> ApiResult<ImportSummary>;
}

/// CRUD over a uniquely named catalog entry (hotel or restaurant).
#[async_trait]
pub trait CatalogService<Item>: Send + Sync {
    async fn save(&self, draft: CatalogDraft) -> ApiResult<Item>;

    async fn get_all(&self) -> ApiResult<Listing<Item>>;

    async fn update(&self, patch: CatalogPatch) -> ApiResult<Item>;

    /// Delete by id, returning the removed record.
    async fn delete(&self, id: i64) -> ApiResult<Item>;
}

pub trait HotelService: CatalogService<Hotel> {}

impl<S: CatalogService<Hotel> + ?Sized> HotelService for S {}

pub trait RestaurantService: CatalogService<Restaurant> {}

impl<S: CatalogService<Restaurant> + ?Sized> RestaurantService for S {}

/// Provider of the external country list.
#[async_trait]
pub trait CountrySource: Send + Sync {
    async fn fetch_countries(&self) -> ApiResult<Vec<RegisterCountry>>;
}
