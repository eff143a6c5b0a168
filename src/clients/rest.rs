//! REST client for the Orb API.
//!
//! This module provides the [`RestClient`] type for making REST requests
//! against the versioned Orb API with automatic path normalization and
//! retry handling.

use thiserror::Error;

use crate::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::OrbConfig;

/// The versioned base path for the Orb API.
pub const API_BASE_PATH: &str = "/v1";

/// Errors that can occur during REST client operations.
#[derive(Debug, Error)]
pub enum RestError {
    /// The request path is invalid.
    #[error("Invalid request path: '{path}'. Path cannot be empty.")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

/// REST API client for the Orb API.
///
/// Provides convenient methods (`get`, `post`, `put`, `delete`) for making
/// requests under the `/v1` base path, with automatic path normalization
/// and retry handling.
///
/// Query parameters are ordered `(key, value)` pairs so that repeated keys
/// (`status[]`) and bracketed range keys (`due_date[gt]`) survive encoding.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use orb_api::{OrbConfig, ApiKey, RestClient};
///
/// let config = OrbConfig::builder()
///     .api_key(ApiKey::new("sk_test_123").unwrap())
///     .build()
///     .unwrap();
///
/// let client = RestClient::new(&config);
///
/// // GET request
/// let response = client.get("invoices/inv_123", None).await?;
///
/// // POST request with body
/// let body = serde_json::json!({"currency": "USD"});
/// let response = client.post("invoices", body, None).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// Default number of attempts for retryable responses.
    default_tries: u32,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client for the given configuration.
    #[must_use]
    pub fn new(config: &OrbConfig) -> Self {
        Self {
            http_client: HttpClient::new(API_BASE_PATH, config),
            default_tries: config.max_tries(),
        }
    }

    /// Returns a reference to the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The REST API path (e.g., "invoices", "invoices/inv_123")
    /// * `query` - Optional ordered query parameters
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid (e.g., empty).
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn get(
        &self,
        path: &str,
        query: Option<Vec<(String, String)>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The REST API path (e.g., "invoices", "invoices/inv_123/issue")
    /// * `body` - The JSON body to send
    /// * `query` - Optional ordered query parameters
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<Vec<(String, String)>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), query)
            .await
    }

    /// Sends a PUT request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The REST API path (e.g., "invoices/inv_123")
    /// * `body` - The JSON body to send
    /// * `query` - Optional ordered query parameters
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<Vec<(String, String)>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Put, path, Some(body), query)
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The REST API path (e.g., "invoices/inv_123/line_items/li_1")
    /// * `query` - Optional ordered query parameters
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(
        &self,
        path: &str,
        query: Option<Vec<(String, String)>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, query)
            .await
    }

    /// Internal helper to build and send requests.
    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<Vec<(String, String)>>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder =
            HttpRequest::builder(method, &normalized_path).tries(self.default_tries);

        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::Json);
        }

        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Normalizes a REST API path.
///
/// Strips leading `/` characters and rejects empty paths.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        return Err(RestError::InvalidPath {
            path: String::new(),
        });
    }

    Ok(path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;

    fn create_test_config() -> OrbConfig {
        OrbConfig::builder()
            .api_key(ApiKey::new("sk_test_123").unwrap())
            .build()
            .unwrap()
    }

    // === Path Normalization Tests ===

    #[test]
    fn test_normalize_path_strips_leading_slash() {
        let result = normalize_path("/invoices").unwrap();
        assert_eq!(result, "invoices");
    }

    #[test]
    fn test_normalize_path_handles_nested_paths() {
        let result = normalize_path("invoices/inv_123/line_items/li_1").unwrap();
        assert_eq!(result, "invoices/inv_123/line_items/li_1");
    }

    #[test]
    fn test_normalize_path_handles_double_slashes() {
        let result = normalize_path("//invoices").unwrap();
        assert_eq!(result, "invoices");
    }

    #[test]
    fn test_normalize_path_empty_path_returns_error() {
        let result = normalize_path("");
        assert!(matches!(result, Err(RestError::InvalidPath { path }) if path.is_empty()));
    }

    #[test]
    fn test_normalize_path_only_slash_returns_error() {
        let result = normalize_path("/");
        assert!(matches!(result, Err(RestError::InvalidPath { path }) if path.is_empty()));
    }

    // === RestClient Construction Tests ===

    #[test]
    fn test_rest_client_uses_versioned_base_path() {
        let client = RestClient::new(&create_test_config());
        assert_eq!(client.http_client().base_path(), "/v1");
    }

    #[test]
    fn test_rest_client_inherits_config_tries() {
        let config = OrbConfig::builder()
            .api_key(ApiKey::new("sk_test_123").unwrap())
            .max_tries(3)
            .build()
            .unwrap();
        let client = RestClient::new(&config);

        assert_eq!(client.default_tries, 3);
    }

    #[test]
    fn test_rest_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }
}
