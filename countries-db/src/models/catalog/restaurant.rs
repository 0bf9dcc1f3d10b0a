use countries_api::domain::{Restaurant, MAX_DETAIL_LEN, MAX_NAME_LEN};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use super::CatalogEntity;
use crate::models::{Identifiable, NameKeyed, DETAIL_CAPACITY, NAME_CAPACITY};
use crate::utils::{name_hash, to_heapless, to_optional_heapless};

/// # Documentation
/// - Restaurant with a free-text cuisine type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantModel {
    pub id: i64,

    pub name: HeaplessString<NAME_CAPACITY>,

    pub name_hash: i64,

    pub restaurant_type: Option<HeaplessString<DETAIL_CAPACITY>>,
}

impl Identifiable for RestaurantModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl NameKeyed for RestaurantModel {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn name_hash(&self) -> i64 {
        self.name_hash
    }
}

impl CatalogEntity for RestaurantModel {
    type Item = Restaurant;

    const TABLE: &'static str = "restaurant";
    const DETAIL_COLUMN: &'static str = "restaurant_type";
    const LINK_TABLE: &'static str = "country_restaurant";
    const LINK_COLUMN: &'static str = "restaurant_id";
    const LABEL: &'static str = "restaurant";

    fn from_parts(id: i64, name: &str, detail: Option<&str>) -> Result<Self, String> {
        Ok(Self {
            id,
            name: to_heapless("name", name, MAX_NAME_LEN)?,
            name_hash: name_hash(name)?,
            restaurant_type: to_optional_heapless("restaurant_type", detail, MAX_DETAIL_LEN)?,
        })
    }

    fn detail(&self) -> Option<&str> {
        self.restaurant_type.as_ref().map(|s| s.as_str())
    }

    fn into_item(self) -> Restaurant {
        self.into()
    }
}

impl From<RestaurantModel> for Restaurant {
    fn from(value: RestaurantModel) -> Self {
        Restaurant {
            id: value.id,
            name: value.name.to_string(),
            restaurant_type: value.restaurant_type.map(|s| s.to_string()),
        }
    }
}
