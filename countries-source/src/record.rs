use countries_api::domain::RegisterCountry;
use serde::Deserialize;

/// Response envelope: `{ "error": false, "msg": "...", "data": [...] }`
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub msg: Option<String>,
    /// Absent on some error replies; required otherwise
    pub data: Option<Vec<CountryRecord>>,
}

/// One country of the source list. Only `country` and `iso2` are kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryRecord {
    pub country: String,
    #[serde(default)]
    pub iso2: Option<String>,
    #[serde(default)]
    pub iso3: Option<String>,
    #[serde(default)]
    pub cities: Vec<String>,
}

impl From<CountryRecord> for RegisterCountry {
    fn from(record: CountryRecord) -> Self {
        RegisterCountry::new(record.country, record.iso2.as_deref())
    }
}
