//! HTTP response types for the Orb API SDK.
//!
//! This module provides the [`HttpResponse`] type for parsing and accessing
//! API response data. Orb carries pagination inside the response body
//! (`pagination_metadata`), so there is no header-based pagination parsing
//! here; see [`crate::resources::Page`] for the body-level envelope.

use std::collections::HashMap;

/// An HTTP response from the Orb API.
///
/// Contains the response status code, headers, parsed JSON body, and the
/// `Retry-After` value when the API asked the client to back off.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Seconds to wait before retrying (from `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse` with automatic header parsing.
    ///
    /// Header names are expected to be lowercased by the caller; the
    /// `Retry-After` header is parsed into `retry_request_after`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(
                response.is_ok(),
                "Expected is_ok() to be true for code {code}"
            );
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        let response_400 = HttpResponse::new(400, HashMap::new(), json!({}));
        assert!(!response_400.is_ok());

        let response_404 = HttpResponse::new(404, HashMap::new(), json!({}));
        assert!(!response_404.is_ok());

        let response_429 = HttpResponse::new(429, HashMap::new(), json!({}));
        assert!(!response_429.is_ok());

        let response_500 = HttpResponse::new(500, HashMap::new(), json!({}));
        assert!(!response_500.is_ok());
    }

    #[test]
    fn test_retry_after_parsing() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["2.5".to_string()]);

        let response = HttpResponse::new(429, headers, json!({}));
        assert!((response.retry_request_after.unwrap() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_retry_after_ignores_unparseable_values() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["soon".to_string()]);

        let response = HttpResponse::new(429, headers, json!({}));
        assert!(response.retry_request_after.is_none());
    }

    #[test]
    fn test_request_id_extraction() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["abc-123-xyz".to_string()]);

        let response = HttpResponse::new(200, headers, json!({}));
        assert_eq!(response.request_id(), Some("abc-123-xyz"));
    }

    #[test]
    fn test_empty_body_returns_empty_json() {
        let response = HttpResponse::new(200, HashMap::new(), json!({}));
        assert_eq!(response.body, json!({}));
    }
}
