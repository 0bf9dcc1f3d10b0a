use serde::{Deserialize, Serialize};
use validator::Validate;

use super::catalog::{Hotel, Restaurant};
use super::not_blank;

/// A country together with the hotels and restaurants attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: i64,
    pub name: String,
    pub iso_code: Option<String>,
    pub hotels: Vec<Hotel>,
    pub restaurants: Vec<Restaurant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCountry {
    #[validate(length(min = 1, max = 100), custom(function = "not_blank"))]
    pub name: String,

    #[validate(length(max = 10))]
    pub iso_code: Option<String>,
}

impl RegisterCountry {
    pub fn new(name: impl Into<String>, iso_code: Option<&str>) -> Self {
        Self {
            name: name.into(),
            iso_code: iso_code.map(str::to_string),
        }
    }
}

/// Patch for an existing country. `None` fields keep their stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCountry {
    pub id: i64,

    #[validate(length(min = 1, max = 100), custom(function = "not_blank"))]
    pub name: Option<String>,

    #[validate(length(max = 10))]
    pub iso_code: Option<String>,
}

/// Attach existing hotels or restaurants (by id) to a country (by name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AttachRequest {
    #[validate(length(min = 1, max = 100), custom(function = "not_blank"))]
    pub country_name: String,

    pub ids: Vec<i64>,
}

impl AttachRequest {
    pub fn new(country_name: impl Into<String>, ids: Vec<i64>) -> Self {
        Self {
            country_name: country_name.into(),
            ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_country_requires_name() {
        assert!(RegisterCountry::new("Chile", Some("CL")).validate().is_ok());
        assert!(RegisterCountry::new("", Some("CL")).validate().is_err());
        assert!(RegisterCountry::new("   ", None).validate().is_err());
        assert!(RegisterCountry::new("x".repeat(101), None).validate().is_err());
    }

    #[test]
    fn test_update_country_only_validates_supplied_fields() {
        let patch = UpdateCountry {
            id: 3,
            name: None,
            iso_code: Some("PE".into()),
        };
        assert!(patch.validate().is_ok());

        let patch = UpdateCountry {
            id: 3,
            name: Some(String::new()),
            iso_code: None,
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn test_country_serializes_camel_case() {
        let country = Country {
            id: 1,
            name: "Chile".into(),
            iso_code: Some("CL".into()),
            hotels: vec![],
            restaurants: vec![],
        };
        let json = serde_json::to_value(&country).unwrap();
        assert_eq!(json["isoCode"], "CL");
    }
}
