use serde::{Deserialize, Serialize};

/// # Documentation
/// - Association row between a country and a hotel or restaurant
/// - The pair is the whole key; rows carry no payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryLinkModel {
    pub country_id: i64,
    pub item_id: i64,
}

impl CountryLinkModel {
    pub fn new(country_id: i64, item_id: i64) -> Self {
        Self { country_id, item_id }
    }
}
