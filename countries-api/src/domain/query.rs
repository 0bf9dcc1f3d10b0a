use serde::{Deserialize, Serialize};
use validator::Validate;

use super::country::Country;
use super::detail::ResponseStatus;

/// 1-based page selection. Both values must be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[validate(range(min = 1))]
    pub page: i64,

    #[validate(range(min = 1))]
    pub page_size: i64,
}

impl PageQuery {
    pub fn new(page: i64, page_size: i64) -> Self {
        Self { page, page_size }
    }
}

/// One page of countries plus the total number of stored countries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryPage {
    pub total: usize,
    pub page: i64,
    pub page_size: i64,
    pub countries: Vec<Country>,
}

/// Conjunctive country filter. Every supplied term is a case-insensitive
/// substring match; unset (or blank) terms impose no constraint.
///
/// The restaurant and hotel terms match when at least one attached
/// restaurant/hotel satisfies them. Each term is evaluated on its own, so
/// `restaurant` and `restaurant_type` may be satisfied by different
/// restaurants of the same country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryFilter {
    pub country: Option<String>,
    pub iso: Option<String>,
    pub restaurant: Option<String>,
    #[serde(rename = "type")]
    pub restaurant_type: Option<String>,
    pub hotel: Option<String>,
    #[serde(rename = "starts", alias = "stars")]
    pub stars: Option<String>,
}

impl CountryFilter {
    /// Drops blank terms so they behave like absent ones.
    pub fn normalized(self) -> Self {
        fn keep(term: Option<String>) -> Option<String> {
            term.filter(|t| !t.trim().is_empty())
        }

        Self {
            country: keep(self.country),
            iso: keep(self.iso),
            restaurant: keep(self.restaurant),
            restaurant_type: keep(self.restaurant_type),
            hotel: keep(self.hotel),
            stars: keep(self.stars),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.country.is_none()
            && self.iso.is_none()
            && self.restaurant.is_none()
            && self.restaurant_type.is_none()
            && self.hotel.is_none()
            && self.stars.is_none()
    }
}

/// Result of a listing query: either some items, or an explicit empty
/// outcome that is still a success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<T> {
    Found(Vec<T>),
    NoContent,
}

impl<T> Listing<T> {
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            Listing::NoContent
        } else {
            Listing::Found(items)
        }
    }

    pub fn status(&self) -> ResponseStatus {
        match self {
            Listing::Found(_) => ResponseStatus::Success,
            Listing::NoContent => ResponseStatus::NoContent,
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Listing::Found(items) => items,
            Listing::NoContent => &[],
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            Listing::Found(items) => items,
            Listing::NoContent => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::NoContent)
    }
}
