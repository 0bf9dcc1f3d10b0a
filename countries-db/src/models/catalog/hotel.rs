use countries_api::domain::{Hotel, MAX_DETAIL_LEN, MAX_NAME_LEN};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use super::CatalogEntity;
use crate::models::{Identifiable, NameKeyed, DETAIL_CAPACITY, NAME_CAPACITY};
use crate::utils::{name_hash, to_heapless, to_optional_heapless};

/// # Documentation
/// - Hotel; `stars` is free text and not checked as a number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelModel {
    pub id: i64,

    pub name: HeaplessString<NAME_CAPACITY>,

    pub name_hash: i64,

    pub stars: Option<HeaplessString<DETAIL_CAPACITY>>,
}

impl Identifiable for HotelModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl NameKeyed for HotelModel {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn name_hash(&self) -> i64 {
        self.name_hash
    }
}

impl CatalogEntity for HotelModel {
    type Item = Hotel;

    const TABLE: &'static str = "hotel";
    const DETAIL_COLUMN: &'static str = "stars";
    const LINK_TABLE: &'static str = "country_hotel";
    const LINK_COLUMN: &'static str = "hotel_id";
    const LABEL: &'static str = "hotel";

    fn from_parts(id: i64, name: &str, detail: Option<&str>) -> Result<Self, String> {
        Ok(Self {
            id,
            name: to_heapless("name", name, MAX_NAME_LEN)?,
            name_hash: name_hash(name)?,
            stars: to_optional_heapless("stars", detail, MAX_DETAIL_LEN)?,
        })
    }

    fn detail(&self) -> Option<&str> {
        self.stars.as_ref().map(|s| s.as_str())
    }

    fn into_item(self) -> Hotel {
        self.into()
    }
}

impl From<HotelModel> for Hotel {
    fn from(value: HotelModel) -> Self {
        Hotel {
            id: value.id,
            name: value.name.to_string(),
            stars: value.stars.map(|s| s.to_string()),
        }
    }
}
