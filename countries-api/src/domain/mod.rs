pub mod catalog;
pub mod country;
pub mod detail;
pub mod import;
pub mod query;

pub use catalog::*;
pub use country::*;
pub use detail::*;
pub use import::*;
pub use query::*;

use validator::ValidationError;

/// Longest name accepted for countries, hotels and restaurants.
pub const MAX_NAME_LEN: usize = 100;

/// Longest ISO code accepted for a country.
pub const MAX_ISO_CODE_LEN: usize = 10;

/// Longest free-text detail (hotel stars, restaurant type).
pub const MAX_DETAIL_LEN: usize = 50;

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
