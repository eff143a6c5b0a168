//! HTTP-specific error types for the Orb API SDK.
//!
//! This module contains error types for HTTP operations, including response
//! errors, retry exhaustion, and request validation failures.
//!
//! # Error Handling
//!
//! The SDK uses specific error types for different failure scenarios:
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`MaxHttpRetriesExceededError`]: When retry attempts are exhausted
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The message field carries the serialized error body Orb returned, and
/// `error_reference` carries the `X-Request-Id` header for support tickets.
///
/// # Example
///
/// ```rust
/// use orb_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"title":"Not found"}"#.to_string(),
///     error_reference: Some("req-abc-123".to_string()),
/// };
///
/// println!("Status {}: {}", error.code, error.message);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from the X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when maximum retry attempts have been exhausted.
///
/// Raised when a request continues to fail with 429 or 500 responses after
/// all configured attempts.
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response.
    pub code: u16,
    /// The number of tries that were attempted.
    pub tries: u32,
    /// Serialized error message from the last response.
    pub message: String,
    /// Reference ID for error reporting (from the X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation before sending.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// The request path is empty after normalization.
    #[error("Request path cannot be empty.")]
    EmptyPath,
}

/// Unified error type for all HTTP-related errors.
///
/// # Example
///
/// ```rust,ignore
/// use orb_api::clients::HttpError;
///
/// match client.request(request).await {
///     Ok(response) => { /* handle success */ }
///     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
///     Err(HttpError::MaxRetries(e)) => println!("Retries exhausted after {} tries", e.tries),
///     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {}", e),
///     Err(HttpError::Network(e)) => println!("Network error: {}", e),
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
