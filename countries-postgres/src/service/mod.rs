mod aggregate;
mod attach;
mod import;

pub mod catalog_service;
pub mod country_service;

pub use catalog_service::{CatalogServiceImpl, HotelServiceImpl, RestaurantServiceImpl};
pub use country_service::CountryServiceImpl;
