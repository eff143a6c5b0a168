//! HTTP and REST clients for Orb API communication.
//!
//! This module provides the client layer of the SDK:
//!
//! - [`HttpClient`]: Low-level HTTP client with authentication, query
//!   encoding, and retry handling
//! - [`RestClient`]: REST client scoped to the versioned `/v1` base path
//! - Request/response types and client-level errors

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod rest;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, RETRY_WAIT_TIME, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use rest::{RestClient, RestError, API_BASE_PATH};
