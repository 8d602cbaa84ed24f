//! # HTTP Service
//!
//! Shared HTTP plumbing for the reference-data and prediction endpoints.
//! Holds one `reqwest::Client` and the service base URL taken from the
//! connection profile.

use anyhow::{Context, Result};
use reqwest::Url;
use std::time::Duration;

/// Connection settings for the prediction service
pub trait ConnectionProfile {
    /// Base URL of the service, e.g. `http://localhost:8000`
    fn server(&self) -> &str;

    /// Per-request timeout
    fn timeout(&self) -> Duration;
}

/// Cheaply cloneable handle to the remote service
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client from a profile
    pub fn new(profile: &impl ConnectionProfile) -> Result<Self> {
        tracing::debug!("Creating ApiClient for server '{}'", profile.server());

        let base_url = Self::parse_base_url(profile.server())?;
        let http = reqwest::Client::builder()
            .timeout(profile.timeout())
            .build()
            .context("Failed to build HTTP client")?;

        tracing::info!("ApiClient created for {}", base_url);
        Ok(Self { http, base_url })
    }

    /// Parse the server string, making sure endpoint paths are joined under it
    fn parse_base_url(server: &str) -> Result<Url> {
        let trimmed = server.trim();
        if trimmed.is_empty() {
            return Err(anyhow::anyhow!("Server URL is empty"));
        }

        let mut base_url =
            Url::parse(trimmed).with_context(|| format!("Invalid server URL: {trimmed}"))?;
        if base_url.cannot_be_a_base() {
            return Err(anyhow::anyhow!("Server URL cannot hold endpoint paths: {trimmed}"));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as `predict`
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .with_context(|| format!("Invalid endpoint '{path}'"))
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }
}
