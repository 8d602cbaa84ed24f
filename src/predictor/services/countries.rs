//! # Reference Data Service
//!
//! Fetches the list of valid country names from `GET /countries`.

use crate::predictor::error::ReferenceDataError;
use crate::predictor::services::http::ApiClient;
use serde::Deserialize;

pub const COUNTRIES_PATH: &str = "countries";

#[derive(Debug, Deserialize)]
struct CountriesResponse {
    countries: Vec<String>,
}

/// Read-only loader for the country reference list
#[derive(Debug, Clone)]
pub struct ReferenceDataLoader {
    api: ApiClient,
}

impl ReferenceDataLoader {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch the ordered country list. One request, no retry.
    pub async fn load(&self) -> Result<Vec<String>, ReferenceDataError> {
        let url = self
            .api
            .endpoint(COUNTRIES_PATH)
            .map_err(|e| ReferenceDataError::InvalidEndpoint(e.to_string()))?;
        tracing::debug!("Loading countries from {}", url);

        let response = self
            .api
            .http()
            .get(url)
            .send()
            .await
            .map_err(|e| ReferenceDataError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReferenceDataError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ReferenceDataError::Network(e.to_string()))?;
        let parsed: CountriesResponse = serde_json::from_str(&body)
            .map_err(|e| ReferenceDataError::MalformedResponse(e.to_string()))?;

        tracing::debug!("Loaded {} countries", parsed.countries.len());
        Ok(parsed.countries)
    }
}
