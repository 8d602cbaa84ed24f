//! # Prediction Service
//!
//! Sends the whole feature form to `POST /predict` and reads back the single
//! numeric `prediction` field. Exactly one request per call; no retry and
//! no caching.

use crate::predictor::error::PredictionError;
use crate::predictor::models::{FeatureField, FeatureForm};
use crate::predictor::services::http::ApiClient;
use serde::Deserialize;

pub const PREDICT_PATH: &str = "predict";

#[derive(Debug, Deserialize)]
struct PredictionResponse {
    prediction: f64,
}

/// Error body. `detail` is a string for application errors but a list of
/// objects for request validation failures, so it is kept untyped here.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    detail: Option<serde_json::Value>,
}

/// Client for the prediction endpoint
#[derive(Debug, Clone)]
pub struct PredictionClient {
    api: ApiClient,
}

impl PredictionClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Submit the form as given and return the predicted value.
    ///
    /// The caller is responsible for passing a fully populated form.
    pub async fn predict(&self, form: &FeatureForm) -> Result<f64, PredictionError> {
        let url = self
            .api
            .endpoint(PREDICT_PATH)
            .map_err(|e| PredictionError::InvalidEndpoint(e.to_string()))?;
        tracing::debug!("POST {} with model '{}'", url, form.get(FeatureField::Model));

        let response = self
            .api
            .http()
            .post(url)
            .json(form)
            .send()
            .await
            .map_err(|e| PredictionError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PredictionError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(Self::error_from_body(status.as_u16(), &body));
        }

        let parsed: PredictionResponse = serde_json::from_str(&body)
            .map_err(|e| PredictionError::MalformedResponse(e.to_string()))?;
        Ok(parsed.prediction)
    }

    fn error_from_body(status: u16, body: &str) -> PredictionError {
        let detail = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|error| error.detail)
            .and_then(|detail| detail.as_str().map(str::to_string))
            .filter(|detail| !detail.trim().is_empty());

        match detail {
            Some(detail) => PredictionError::Service { status, detail },
            None => PredictionError::Status { status },
        }
    }
}
