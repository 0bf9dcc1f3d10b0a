pub mod config;
pub mod postgres_repositories;
pub mod repository;
pub mod service;
pub mod telemetry;
pub mod utils;

pub use config::AppConfig;
pub use postgres_repositories::PostgresRepositories;
pub use service::{CountryServiceImpl, HotelServiceImpl, RestaurantServiceImpl};
pub use postgres_unit_of_work::Executor;

#[cfg(test)]
pub mod test_helper;
