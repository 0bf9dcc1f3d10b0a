//! Hotels and restaurants.
//!
//! Both are "catalog" entries: a unique name plus one free-text detail
//! (stars for hotels, cuisine type for restaurants). The entity-specific
//! request types convert into [`CatalogDraft`] / [`CatalogPatch`] so one
//! service implementation serves both.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::not_blank;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub stars: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub restaurant_type: Option<String>,
}

/// New catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CatalogDraft {
    #[validate(length(min = 1, max = 100), custom(function = "not_blank"))]
    pub name: String,

    #[validate(length(max = 50))]
    pub detail: Option<String>,
}

/// Patch for an existing catalog entry. `None` fields keep their stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CatalogPatch {
    pub id: i64,

    #[validate(length(min = 1, max = 100), custom(function = "not_blank"))]
    pub name: Option<String>,

    #[validate(length(max = 50))]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterHotel {
    pub name: String,
    #[serde(alias = "starts")]
    pub stars: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateHotel {
    pub id: i64,
    pub name: Option<String>,
    #[serde(alias = "starts")]
    pub stars: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRestaurant {
    pub name: String,
    #[serde(rename = "type")]
    pub restaurant_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRestaurant {
    pub id: i64,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub restaurant_type: Option<String>,
}

impl From<RegisterHotel> for CatalogDraft {
    fn from(value: RegisterHotel) -> Self {
        Self {
            name: value.name,
            detail: value.stars,
        }
    }
}

impl From<UpdateHotel> for CatalogPatch {
    fn from(value: UpdateHotel) -> Self {
        Self {
            id: value.id,
            name: value.name,
            detail: value.stars,
        }
    }
}

impl From<RegisterRestaurant> for CatalogDraft {
    fn from(value: RegisterRestaurant) -> Self {
        Self {
            name: value.name,
            detail: value.restaurant_type,
        }
    }
}

impl From<UpdateRestaurant> for CatalogPatch {
    fn from(value: UpdateRestaurant) -> Self {
        Self {
            id: value.id,
            name: value.name,
            detail: value.restaurant_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_hotel_accepts_legacy_starts_key() {
        let hotel: RegisterHotel =
            serde_json::from_str(r#"{"name":"Hotel Plaza","starts":"4"}"#).unwrap();
        let draft = CatalogDraft::from(hotel);
        assert_eq!(draft.name, "Hotel Plaza");
        assert_eq!(draft.detail.as_deref(), Some("4"));
    }

    #[test]
    fn test_restaurant_type_round_trips_under_type_key() {
        let restaurant = Restaurant {
            id: 2,
            name: "La Picada".into(),
            restaurant_type: Some("Chilean".into()),
        };
        let json = serde_json::to_value(&restaurant).unwrap();
        assert_eq!(json["type"], "Chilean");
    }

    #[test]
    fn test_catalog_patch_validation() {
        let patch = CatalogPatch::from(UpdateRestaurant {
            id: 1,
            name: None,
            restaurant_type: Some("x".repeat(51)),
        });
        assert!(patch.validate().is_err());

        let patch = CatalogPatch::from(UpdateHotel {
            id: 1,
            name: Some("Ritz".into()),
            stars: None,
        });
        assert!(patch.validate().is_ok());
    }
}
