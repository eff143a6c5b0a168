//! HTTP client for Orb API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Orb API with automatic retry handling.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::OrbConfig;

/// Fixed retry wait time in seconds when no `Retry-After` header is present.
pub const RETRY_WAIT_TIME: u64 = 1;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Orb API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including User-Agent and the bearer credential
/// - Query string encoding, preserving repeated and bracketed keys
/// - Automatic retry logic for 429 and 500 responses
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use orb_api::{OrbConfig, ApiKey};
/// use orb_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = OrbConfig::builder()
///     .api_key(ApiKey::new("sk_test_123").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new("/v1", &config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "invoices")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.withorb.com`).
    base_uri: String,
    /// Base path (e.g., "/v1").
    base_path: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Number of attempts for retryable responses, from configuration.
    max_tries: u32,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Arguments
    ///
    /// * `base_path` - The base path for API requests (e.g., "/v1")
    /// * `config` - Configuration providing the API key, base URL, and
    ///   User-Agent prefix
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(base_path: impl Into<String>, config: &OrbConfig) -> Self {
        let base_path = base_path.into();
        let base_uri = config.base_url().as_ref().to_string();

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Orb API Library v{SDK_VERSION} | Rust {rust_version}");

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.api_key().as_ref()),
        );

        // Create reqwest client
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            base_path,
            default_headers,
            max_tries: config.max_tries(),
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the configured number of attempts for retryable responses.
    #[must_use]
    pub const fn max_tries(&self) -> u32 {
        self.max_tries
    }

    /// Encodes ordered query pairs into a query string.
    ///
    /// Keys and values are percent-encoded individually, so bracketed keys
    /// like `amount[gt]` and repeated keys like `status[]` come out as
    /// `amount%5Bgt%5D` and `status%5B%5D`, each occurrence preserved in
    /// order.
    #[must_use]
    pub fn encode_query(pairs: &[(String, String)]) -> String {
        pairs
            .iter()
            .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Sends an HTTP request to the Orb API.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL and query string construction
    /// - Header merging
    /// - Response parsing
    /// - Retry logic for 429 and 500 responses
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - Max retries exceeded (`MaxRetries`)
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let request = HttpRequest::builder(HttpMethod::Get, "invoices")
    ///     .tries(3) // Enable retries
    ///     .build()
    ///     .unwrap();
    ///
    /// let response = client.request(request).await?;
    /// if response.is_ok() {
    ///     println!("Invoices: {}", response.body);
    /// }
    /// ```
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        // Validate request first
        request.verify()?;

        // Build full URL, encoding the query ourselves to keep bracketed
        // and repeated keys intact.
        let mut url = format!("{}{}/{}", self.base_uri, self.base_path, request.path);
        if let Some(query) = &request.query {
            if !query.is_empty() {
                url.push('?');
                url.push_str(&Self::encode_query(query));
            }
        }

        // Merge headers
        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        // Retry loop
        let mut tries: u32 = 0;
        loop {
            tries += 1;

            // Build the reqwest request
            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
                HttpMethod::Put => self.client.put(&url),
                HttpMethod::Delete => self.client.delete(&url),
            };

            // Add headers
            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            // Add body
            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }

            // Send request
            let res = req_builder.send().await?;

            // Parse response
            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await.unwrap_or_default();

            // Parse body as JSON
            let body = if body_text.is_empty() {
                serde_json::json!({})
            } else {
                serde_json::from_str(&body_text).unwrap_or_else(|_| {
                    // For 5xx errors, return raw body as string value
                    if code >= 500 {
                        serde_json::json!({ "raw_body": body_text })
                    } else {
                        serde_json::json!({})
                    }
                })
            };

            let response = HttpResponse::new(code, res_headers, body);

            // Check if response is OK
            if response.is_ok() {
                return Ok(response);
            }

            // Build error message
            let error_message = Self::serialize_error(&response);

            // Check if we should retry
            let should_retry = code == 429 || code == 500;
            if !should_retry {
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    message: error_message,
                    error_reference: response.request_id().map(String::from),
                }));
            }

            // Check if we've exhausted retries
            if tries >= request.tries {
                if request.tries == 1 {
                    return Err(HttpError::Response(HttpResponseError {
                        code,
                        message: error_message,
                        error_reference: response.request_id().map(String::from),
                    }));
                }
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: request.tries,
                    message: error_message,
                    error_reference: response.request_id().map(String::from),
                }));
            }

            tracing::debug!(
                code,
                tries,
                path = %request.path,
                "Retrying request after retryable response"
            );

            // Calculate retry delay
            let delay = Self::calculate_retry_delay(&response, code);
            tokio::time::sleep(delay).await;
        }
    }

    /// Parses response headers into a `HashMap` with lowercased names.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Calculates the retry delay based on response and status code.
    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> std::time::Duration {
        // For 429: use Retry-After if present, otherwise fixed delay
        // For 500: always use fixed delay (ignore Retry-After)
        if status == 429 {
            if let Some(retry_after) = response.retry_request_after {
                return std::time::Duration::from_secs_f64(retry_after);
            }
        }
        std::time::Duration::from_secs(RETRY_WAIT_TIME)
    }

    /// Serializes the interesting parts of an error response body.
    ///
    /// Orb error bodies follow RFC 7807 problem-details shape with `title`,
    /// `detail`, `type`, `status`, and `validation_errors` fields.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for field in ["status", "type", "title", "detail", "validation_errors"] {
            if let Some(value) = response.body.get(field) {
                error_body.insert(field.to_string(), value.clone());
            }
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
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

    #[test]
    fn test_client_construction_with_config() {
        let client = HttpClient::new("/v1", &create_test_config());

        assert_eq!(client.base_uri(), "https://api.withorb.com");
        assert_eq!(client.base_path(), "/v1");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new("/v1", &create_test_config());

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Orb API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = OrbConfig::builder()
            .api_key(ApiKey::new("sk_test_123").unwrap())
            .user_agent_prefix("acme-billing/2.1")
            .build()
            .unwrap();
        let client = HttpClient::new("/v1", &config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("acme-billing/2.1 | "));
        assert!(user_agent.contains("Orb API Library"));
    }

    #[test]
    fn test_authorization_header_is_bearer() {
        let client = HttpClient::new("/v1", &create_test_config());

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer sk_test_123".to_string())
        );
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new("/v1", &create_test_config());

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_encode_query_percent_encodes_brackets() {
        let pairs = vec![
            ("status[]".to_string(), "draft".to_string()),
            ("status[]".to_string(), "issued".to_string()),
            ("amount[gt]".to_string(), "100.50".to_string()),
        ];

        assert_eq!(
            HttpClient::encode_query(&pairs),
            "status%5B%5D=draft&status%5B%5D=issued&amount%5Bgt%5D=100.50"
        );
    }

    #[test]
    fn test_encode_query_escapes_values() {
        let pairs = vec![(
            "due_date".to_string(),
            "2024-01-01T00:00:00+00:00".to_string(),
        )];

        let encoded = HttpClient::encode_query(&pairs);
        assert!(encoded.contains("%2B00%3A00"));
        assert!(!encoded.contains('+'));
    }

    #[test]
    fn test_encode_query_empty_is_empty_string() {
        assert_eq!(HttpClient::encode_query(&[]), "");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
