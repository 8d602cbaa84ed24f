//! # Error Taxonomy
//!
//! Typed failures for the two network collaborators and for submission
//! rejection. None of these escape the lifecycle controller: prediction
//! failures become a `Failed` outcome, reference-data failures are logged
//! and recorded, and rejections are returned before any state changes.

use crate::predictor::models::FeatureField;
use thiserror::Error;

/// Message shown when the service gave no usable `detail`.
pub const GENERIC_PREDICTION_ERROR: &str = "An error occurred while making the prediction.";

/// Failure to fetch the country list from the reference-data endpoint
#[derive(Debug, Error)]
pub enum ReferenceDataError {
    #[error("invalid country list endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("country list request failed: {0}")]
    Network(String),

    #[error("country list request returned status {status}")]
    Status { status: u16 },

    #[error("country list response was malformed: {0}")]
    MalformedResponse(String),
}

/// Failure of a single prediction round-trip
#[derive(Debug, Error)]
pub enum PredictionError {
    /// The endpoint URL could not be built from the configured server
    #[error("invalid prediction endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("prediction request failed: {0}")]
    Network(String),

    /// Non-2xx status with a string `detail` in the body
    #[error("prediction service returned status {status}: {detail}")]
    Service { status: u16, detail: String },

    /// Non-2xx status without a usable `detail`
    #[error("prediction service returned status {status}")]
    Status { status: u16 },

    #[error("prediction response was malformed: {0}")]
    MalformedResponse(String),
}

impl PredictionError {
    /// Service-provided error detail, if the service sent one
    pub fn detail(&self) -> Option<&str> {
        match self {
            PredictionError::Service { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// Message suitable for the `Failed` outcome
    pub fn user_message(&self) -> String {
        self.detail()
            .map(str::to_string)
            .unwrap_or_else(|| GENERIC_PREDICTION_ERROR.to_string())
    }
}

/// Form values that cannot be submitted or addressed
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required field '{0}' is empty")]
    MissingField(FeatureField),

    #[error("unknown form field '{0}'")]
    UnknownField(String),
}

/// Reasons `submit` refuses to start a request. The outcome is untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitRejection {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("a prediction request is already in flight")]
    AlreadyPending,
}
