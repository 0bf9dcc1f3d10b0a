use countries_api::domain::{Country, MAX_ISO_CODE_LEN, MAX_NAME_LEN};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::catalog::{HotelModel, RestaurantModel};
use crate::models::{Identifiable, NameKeyed, ISO_CODE_CAPACITY, NAME_CAPACITY};
use crate::utils::{name_hash, to_heapless, to_optional_heapless};

/// # Documentation
/// - Country with a case-insensitively unique name and a free-text ISO code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryModel {
    pub id: i64,

    pub name: HeaplessString<NAME_CAPACITY>,

    /// Hash of the lowercased name, unique per table
    pub name_hash: i64,

    pub iso_code: Option<HeaplessString<ISO_CODE_CAPACITY>>,
}

impl CountryModel {
    /// Build an unsaved country (id `0` until inserted)
    pub fn new(name: &str, iso_code: Option<&str>) -> Result<Self, String> {
        Ok(Self {
            id: 0,
            name: to_heapless("name", name, MAX_NAME_LEN)?,
            name_hash: name_hash(name)?,
            iso_code: to_optional_heapless("iso_code", iso_code, MAX_ISO_CODE_LEN)?,
        })
    }

    /// Apply a patch; `None` keeps the current value
    pub fn patched(&self, name: Option<&str>, iso_code: Option<&str>) -> Result<Self, String> {
        let iso_code = iso_code.or(self.iso_code.as_ref().map(|s| s.as_str()));
        let mut patched = Self::new(name.unwrap_or(self.name.as_str()), iso_code)?;
        patched.id = self.id;
        Ok(patched)
    }
}

impl Identifiable for CountryModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl NameKeyed for CountryModel {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn name_hash(&self) -> i64 {
        self.name_hash
    }
}

/// A country with its eagerly loaded associations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryAggregate {
    pub country: CountryModel,
    pub hotels: Vec<HotelModel>,
    pub restaurants: Vec<RestaurantModel>,
}

impl From<CountryAggregate> for Country {
    fn from(value: CountryAggregate) -> Self {
        Country {
            id: value.country.id,
            name: value.country.name.to_string(),
            iso_code: value.country.iso_code.map(|s| s.to_string()),
            hotels: value.hotels.into_iter().map(Into::into).collect(),
            restaurants: value.restaurants.into_iter().map(Into::into).collect(),
        }
    }
}
