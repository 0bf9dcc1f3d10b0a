use async_trait::async_trait;
use countries_api::domain::RegisterCountry;
use countries_api::{ApiResult, CountrySource};
use std::time::Duration;

use crate::error::SourceError;
use crate::record::{CountryRecord, Envelope};

pub const DEFAULT_SOURCE_URL: &str = "https://countriesnow.space/api/v0.1/countries";

/// HTTP client for the countriesnow list endpoint.
///
/// One GET per fetch, no retries. Any transport, status or payload problem
/// fails the whole fetch.
#[derive(Debug, Clone)]
pub struct CountriesNowClient {
    http: reqwest::Client,
    url: String,
}

impl CountriesNowClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch_records(&self) -> Result<Vec<CountryRecord>, SourceError> {
        tracing::debug!(url = %self.url, "fetching country list");

        let response = self.http.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let envelope: Envelope = serde_json::from_str(&body)?;
        if envelope.error {
            return Err(SourceError::Provider(
                envelope.msg.unwrap_or_else(|| "unspecified error".to_string()),
            ));
        }

        let data = envelope.data.ok_or(SourceError::MissingData)?;

        tracing::info!(count = data.len(), "country list fetched");
        Ok(data)
    }
}

#[async_trait]
impl CountrySource for CountriesNowClient {
    async fn fetch_countries(&self) -> ApiResult<Vec<RegisterCountry>> {
        let records = self.fetch_records().await.map_err(|e| {
            tracing::error!(url = %self.url, error = %e, "country list fetch failed");
            e
        })?;
        Ok(records.into_iter().map(RegisterCountry::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use countries_api::ApiError;
    use httpmock::prelude::*;

    fn client(server: &MockServer) -> CountriesNowClient {
        CountriesNowClient::new(server.url("/api/v0.1/countries"), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_maps_country_and_iso2() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v0.1/countries");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(
                        r#"{"error":false,"msg":"ok","data":[
                            {"iso2":"CL","iso3":"CHL","country":"Chile","cities":["Santiago"]},
                            {"iso2":"PE","iso3":"PER","country":"Peru","cities":[]}
                        ]}"#,
                    );
            })
            .await;

        let countries = client(&server).fetch_countries().await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            countries,
            vec![
                RegisterCountry::new("Chile", Some("CL")),
                RegisterCountry::new("Peru", Some("PE")),
            ]
        );
    }

    #[tokio::test]
    async fn test_http_failure_is_an_import_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v0.1/countries");
                then.status(503);
            })
            .await;

        let err = client(&server).fetch_countries().await.unwrap_err();
        assert!(matches!(err, ApiError::ImportError(ref m) if m.contains("503")));
    }

    #[tokio::test]
    async fn test_provider_error_flag_is_an_import_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v0.1/countries");
                then.status(200).body(r#"{"error":true,"msg":"quota exceeded","data":[]}"#);
            })
            .await;

        let err = client(&server).fetch_records().await.unwrap_err();
        assert!(matches!(err, SourceError::Provider(ref m) if m == "quota exceeded"));
    }

    #[tokio::test]
    async fn test_malformed_payload_is_an_import_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v0.1/countries");
                then.status(200).body("<html>maintenance</html>");
            })
            .await;

        let err = client(&server).fetch_countries().await.unwrap_err();
        assert!(matches!(err, ApiError::ImportError(_)));
    }

    #[tokio::test]
    async fn test_reply_without_country_list_is_an_import_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v0.1/countries");
                then.status(200).body(r#"{"error":false,"msg":"countries retrieved"}"#);
            })
            .await;

        let err = client(&server).fetch_records().await.unwrap_err();
        assert!(matches!(err, SourceError::MissingData));

        let err = client(&server).fetch_countries().await.unwrap_err();
        assert!(matches!(err, ApiError::ImportError(_)));
    }
}
