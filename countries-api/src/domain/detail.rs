use serde::{Deserialize, Serialize};

use super::catalog::{Hotel, Restaurant};
use super::country::Country;
use super::query::Listing;
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseStatus {
    Success,
    NoContent,
    BadRequest,
    NotFound,
    InternalServerError,
    BadGateway,
}

impl ResponseStatus {
    pub fn code(self) -> u16 {
        match self {
            ResponseStatus::Success => 200,
            ResponseStatus::NoContent => 204,
            ResponseStatus::BadRequest => 400,
            ResponseStatus::NotFound => 404,
            ResponseStatus::InternalServerError => 500,
            ResponseStatus::BadGateway => 502,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, ResponseStatus::Success | ResponseStatus::NoContent)
    }
}

/// Response envelope handed to the presentation layer.
///
/// `status` selects the transport status and is not part of the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Detail {
    #[serde(skip)]
    pub status: ResponseStatus,

    pub is_successful: bool,

    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<Country>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotels: Option<Vec<Hotel>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurants: Option<Vec<Restaurant>>,
}

impl Detail {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            is_successful: true,
            message: message.into(),
            countries: None,
            hotels: None,
            restaurants: None,
        }
    }

    pub fn no_content(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::NoContent,
            is_successful: false,
            ..Self::success(message)
        }
    }

    pub fn failure(error: &ApiError) -> Self {
        Self {
            status: error.status(),
            is_successful: false,
            ..Self::success(error.message())
        }
    }

    pub fn with_countries(mut self, countries: Vec<Country>) -> Self {
        self.countries = Some(countries);
        self
    }

    pub fn with_hotels(mut self, hotels: Vec<Hotel>) -> Self {
        self.hotels = Some(hotels);
        self
    }

    pub fn with_restaurants(mut self, restaurants: Vec<Restaurant>) -> Self {
        self.restaurants = Some(restaurants);
        self
    }

    pub fn countries(listing: Listing<Country>) -> Self {
        match listing {
            Listing::Found(countries) => Self::success("Country list.").with_countries(countries),
            Listing::NoContent => Self::no_content("No data to show."),
        }
    }

    pub fn hotels(listing: Listing<Hotel>) -> Self {
        match listing {
            Listing::Found(hotels) => Self::success("Hotel list.").with_hotels(hotels),
            Listing::NoContent => Self::no_content("No data to show."),
        }
    }

    pub fn restaurants(listing: Listing<Restaurant>) -> Self {
        match listing {
            Listing::Found(restaurants) => {
                Self::success("Restaurant list.").with_restaurants(restaurants)
            }
            Listing::NoContent => Self::no_content("No data to show."),
        }
    }
}

impl From<ApiError> for Detail {
    fn from(error: ApiError) -> Self {
        Self::failure(&error)
    }
}
