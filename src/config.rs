//! Configuration constants and utilities for lifeline
//!
//! Service connection settings live in an INI profile file. Each section is
//! a named profile with a `server` URL and an optional `timeout` in seconds.
//!
//! ```ini
//! [default]
//! server = http://localhost:8000
//! timeout = 30
//! ```

use crate::predictor::services::ConnectionProfile;
use anyhow::{Context, Result};
use ini::Ini;
use std::path::Path;
use std::time::Duration;

/// Default profile file path for lifeline
pub const DEFAULT_PROFILE_PATH: &str = "~/.lifeline/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "LIFELINE_PROFILE_PATH";

/// Environment variable name for overriding the profile's server
pub const SERVER_ENV_VAR: &str = "LIFELINE_SERVER";

/// Server used when no profile is configured
pub const DEFAULT_SERVER: &str = "http://localhost:8000";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Server override from the environment, if set and non-empty
pub fn get_server_override() -> Option<String> {
    std::env::var(SERVER_ENV_VAR)
        .ok()
        .filter(|server| !server.trim().is_empty())
}

/// Connection settings for one profile
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceProfile {
    server: String,
    timeout: Duration,
}

impl ServiceProfile {
    pub fn new(server: &str, timeout: Duration) -> Self {
        Self {
            server: server.to_string(),
            timeout,
        }
    }

    /// Profile used when nothing is configured
    pub fn blank() -> Self {
        Self::new(DEFAULT_SERVER, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_server(mut self, server: &str) -> Self {
        self.server = server.to_string();
        self
    }
}

impl ConnectionProfile for ServiceProfile {
    fn server(&self) -> &str {
        &self.server
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Reads profiles from an INI file
pub struct IniProfileStore {
    path: String,
}

impl IniProfileStore {
    /// `~` in the path is expanded to the home directory
    pub fn new(path: &str) -> Self {
        Self {
            path: shellexpand::tilde(path).into_owned(),
        }
    }

    /// Look up a profile by section name. A missing file is not an error.
    pub fn get_profile(&self, name: &str) -> Result<Option<ServiceProfile>> {
        if !Path::new(&self.path).exists() {
            tracing::debug!("Profile file '{}' does not exist", self.path);
            return Ok(None);
        }

        let ini = Ini::load_from_file(&self.path)
            .with_context(|| format!("Failed to read profile file '{}'", self.path))?;

        let Some(section) = ini.section(Some(name)) else {
            return Ok(None);
        };

        let server = section.get("server").unwrap_or(DEFAULT_SERVER);
        let timeout = match section.get("timeout") {
            Some(raw) => raw.trim().parse::<u64>().with_context(|| {
                format!("Invalid timeout '{raw}' in profile '{name}'")
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Some(ServiceProfile::new(
            server,
            Duration::from_secs(timeout),
        )))
    }
}

/// Load profile from INI file or return blank profile if not found,
/// then apply the server override if one is given
pub fn load_profile(
    profile_name: &str,
    profile_path: &str,
    server_override: Option<&str>,
) -> Result<ServiceProfile> {
    tracing::debug!("Loading profile '{}' from '{}'", profile_name, profile_path);

    let store = IniProfileStore::new(profile_path);
    let profile = match store.get_profile(profile_name)? {
        Some(p) => {
            tracing::debug!("Profile loaded successfully, server: {}", p.server());
            p
        }
        None => {
            tracing::debug!("Profile '{}' not found, using blank profile", profile_name);
            ServiceProfile::blank()
        }
    };

    Ok(match server_override {
        Some(server) => {
            tracing::debug!("Server overridden from environment: {}", server);
            profile.with_server(server)
        }
        None => profile,
    })
}
