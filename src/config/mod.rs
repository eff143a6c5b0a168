//! Configuration types for the Orb API SDK.
//!
//! This module provides the core configuration types used to initialize the
//! SDK for API communication with Orb.
//!
//! # Overview
//!
//! - [`OrbConfig`]: The main configuration struct holding all SDK settings
//! - [`OrbConfigBuilder`]: A builder for constructing [`OrbConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use orb_api::{OrbConfig, ApiKey};
//!
//! let config = OrbConfig::builder()
//!     .api_key(ApiKey::new("sk_test_123").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.withorb.com");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl};

use crate::error::ConfigError;

/// Configuration for the Orb API SDK.
///
/// Holds the bearer credential and endpoint settings every client needs.
/// There is no global state: configuration is instance-based and passed
/// explicitly to client constructors.
///
/// # Thread Safety
///
/// `OrbConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use orb_api::{OrbConfig, ApiKey, BaseUrl};
///
/// let config = OrbConfig::builder()
///     .api_key(ApiKey::new("sk_test_123").unwrap())
///     .base_url(BaseUrl::new("https://sandbox.withorb.com").unwrap())
///     .user_agent_prefix("acme-billing/2.1")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.user_agent_prefix(), Some("acme-billing/2.1"));
/// ```
#[derive(Clone, Debug)]
pub struct OrbConfig {
    api_key: ApiKey,
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
    max_tries: u32,
}

// Verify OrbConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OrbConfig>();
};

impl OrbConfig {
    /// Creates a new builder for constructing an `OrbConfig`.
    #[must_use]
    pub fn builder() -> OrbConfigBuilder {
        OrbConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the User-Agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the number of attempts made for retryable responses.
    ///
    /// Defaults to 1 (no retries).
    #[must_use]
    pub const fn max_tries(&self) -> u32 {
        self.max_tries
    }
}

/// Builder for constructing [`OrbConfig`] instances.
///
/// Only `api_key` is required; everything else has a sensible default.
#[derive(Debug, Default)]
pub struct OrbConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    max_tries: Option<u32>,
}

impl OrbConfigBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Sets the API base URL. Defaults to the production Orb endpoint.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets a prefix for the User-Agent header, identifying the calling
    /// application.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the number of attempts for requests that hit a retryable
    /// response (429 or 500). Defaults to 1 (no retries).
    #[must_use]
    pub const fn max_tries(mut self, tries: u32) -> Self {
        self.max_tries = Some(tries);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` was not
    /// set.
    pub fn build(self) -> Result<OrbConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(OrbConfig {
            api_key,
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            max_tries: self.max_tries.unwrap_or(1).max(1),
        })
    }
}
