pub mod catalog_repository;
pub mod country_link_repository;
pub mod country_repository;
pub mod db_init;
pub mod factory;

pub use catalog_repository::CatalogRepositoryImpl;
pub use country_link_repository::CountryLinkRepositoryImpl;
pub use country_repository::CountryRepositoryImpl;
pub use factory::{CountryRepoFactory, CountryRepositories};
