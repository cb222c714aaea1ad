//! Environment-sourced configuration for the SmartHR API client.
//!
//! Two values are read once at startup:
//!
//! - `SMARTHR_API_BASE_URL` - API root, defaults to [`DEFAULT_BASE_URL`]
//! - `SMARTHR_API_KEY` - bearer credential, required
//!
//! A missing credential is a startup failure, never deferred to the first call.

use crate::error::{SmartHrError, SmartHrResult};
use std::fmt;
use url::Url;

/// Default API root used when `SMARTHR_API_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://app.smarthr.jp/api";

/// Environment variable holding the API root.
pub const BASE_URL_ENV: &str = "SMARTHR_API_BASE_URL";

/// Environment variable holding the bearer credential.
pub const API_KEY_ENV: &str = "SMARTHR_API_KEY";

/// Immutable connection settings for [`SmartHrClient`](crate::client::SmartHrClient).
#[derive(Clone)]
pub struct SmartHrConfig {
    base_url: Url,
    api_key: String,
}

impl SmartHrConfig {
    /// Build a configuration from explicit values.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the key is empty or the URL is not absolute.
    pub fn new(base_url: &str, api_key: impl Into<String>) -> SmartHrResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(SmartHrError::configuration(format!(
                "{API_KEY_ENV} environment variable is not set"
            )));
        }

        let base_url = Url::parse(base_url).map_err(|e| {
            SmartHrError::configuration(format!("invalid {BASE_URL_ENV} '{base_url}': {e}"))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(SmartHrError::configuration(format!(
                "{BASE_URL_ENV} '{base_url}' cannot be used as a base URL"
            )));
        }

        Ok(Self { base_url, api_key })
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> SmartHrResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> SmartHrResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV).unwrap_or_default();
        let base_url = lookup(BASE_URL_ENV)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self::new(&base_url, api_key)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for SmartHrConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmartHrConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}
