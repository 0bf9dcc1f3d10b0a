//! Client for the external country list (countriesnow.space)

pub mod client;
pub mod error;
pub mod record;

pub use client::{CountriesNowClient, DEFAULT_SOURCE_URL};
pub use error::SourceError;
pub use record::CountryRecord;
