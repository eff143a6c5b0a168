//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear
//! error messages.

use std::fmt;

use crate::error::ConfigError;

/// A validated Orb API key.
///
/// This newtype ensures the key is non-empty and masks its value in debug
/// output, since Orb API keys are bearer credentials.
///
/// # Security
///
/// The `Debug` implementation displays `ApiKey(*****)` instead of the
/// actual key.
///
/// # Example
///
/// ```rust
/// use orb_api::ApiKey;
///
/// let key = ApiKey::new("sk_live_abc123").unwrap();
/// assert_eq!(key.as_ref(), "sk_live_abc123");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated API base URL.
///
/// The SDK defaults to the production Orb endpoint; overriding the base URL
/// supports sandboxes, proxies, and test servers.
///
/// # Accepted Formats
///
/// Absolute `http://` or `https://` URLs. A trailing slash is stripped so
/// path concatenation stays predictable.
///
/// # Example
///
/// ```rust
/// use orb_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.withorb.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.withorb.com");
///
/// assert!(BaseUrl::new("not-a-url").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// The production Orb API endpoint.
    pub const PRODUCTION: &'static str = "https://api.withorb.com";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the value is not an
    /// absolute http(s) URL.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }
        // Reject scheme-only values like "https://".
        let rest = url.splitn(2, "://").nth(1).unwrap_or("");
        if rest.is_empty() || rest.starts_with('/') {
            return Err(ConfigError::InvalidBaseUrl { url });
        }
        Ok(Self(url.trim_end_matches('/').to_string()))
    }

    /// Returns the production endpoint.
    #[must_use]
    pub fn production() -> Self {
        Self(Self::PRODUCTION.to_string())
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self::production()
    }
}
