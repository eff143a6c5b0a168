//! Error types for resource operations.
//!
//! Endpoint methods translate transport-level failures into resource-level
//! errors: a 404 becomes [`ResourceError::NotFound`] naming the resource and
//! id, and a 400 becomes [`ResourceError::RequestInvalid`] carrying Orb's
//! parsed problem-details body.

use serde::Deserialize;
use thiserror::Error;

use crate::clients::{HttpError, RestError};
use crate::model::ModelError;

/// Orb's error response body, in RFC 7807 problem-details shape.
///
/// Every field is optional so that a partially formed error body still
/// parses; unparseable bodies fall back to [`OrbProblem::default`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct OrbProblem {
    /// HTTP status code echoed in the body.
    pub status: Option<u16>,
    /// Short human-readable summary.
    pub title: Option<String>,
    /// Longer human-readable explanation.
    pub detail: Option<String>,
    /// URI identifying the problem type.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Per-field validation failures for 400 responses.
    #[serde(default)]
    pub validation_errors: Vec<serde_json::Value>,
}

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The requested resource does not exist (HTTP 404).
    #[error("{resource} '{id}' was not found")]
    NotFound {
        /// The resource kind (e.g., "invoice").
        resource: &'static str,
        /// The identifier that was requested.
        id: String,
    },

    /// The request was rejected by the API (HTTP 400).
    #[error("Request rejected: {}", problem.title.as_deref().unwrap_or("invalid request"))]
    RequestInvalid {
        /// Orb's parsed error body.
        problem: OrbProblem,
    },

    /// A transport-level error occurred.
    #[error(transparent)]
    Http(#[from] RestError),

    /// A model failed to decode or validate.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Pagination continuation was requested without a next cursor.
    #[error("No next page: the current page has no next cursor")]
    NoNextPage,
}

impl ResourceError {
    /// Maps a REST-level error into a resource-level one.
    ///
    /// 404 responses become [`NotFound`](Self::NotFound) for the given
    /// resource/id pair; 400 responses become
    /// [`RequestInvalid`](Self::RequestInvalid) with the error body parsed
    /// into an [`OrbProblem`]. Everything else passes through as
    /// [`Http`](Self::Http).
    #[must_use]
    pub fn from_rest(resource: &'static str, id: &str, error: RestError) -> Self {
        match &error {
            RestError::Http(HttpError::Response(response)) => match response.code {
                404 => Self::NotFound {
                    resource,
                    id: id.to_string(),
                },
                400 => Self::RequestInvalid {
                    problem: serde_json::from_str(&response.message).unwrap_or_default(),
                },
                _ => Self::Http(error),
            },
            _ => Self::Http(error),
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    fn rest_response_error(code: u16, message: &str) -> RestError {
        RestError::Http(HttpError::Response(HttpResponseError {
            code,
            message: message.to_string(),
            error_reference: None,
        }))
    }

    #[test]
    fn test_404_maps_to_not_found_with_resource_and_id() {
        let error = ResourceError::from_rest("invoice", "inv_123", rest_response_error(404, "{}"));

        assert!(matches!(
            error,
            ResourceError::NotFound { resource: "invoice", ref id } if id == "inv_123"
        ));
        assert!(error.to_string().contains("inv_123"));
    }

    #[test]
    fn test_400_maps_to_request_invalid_with_parsed_problem() {
        let body = r#"{
            "status": 400,
            "title": "Invalid request",
            "detail": "currency is required",
            "type": "https://docs.withorb.com/reference/error-responses",
            "validation_errors": [{"field": "currency"}]
        }"#;
        let error = ResourceError::from_rest("invoice", "inv_123", rest_response_error(400, body));

        match error {
            ResourceError::RequestInvalid { problem } => {
                assert_eq!(problem.status, Some(400));
                assert_eq!(problem.title.as_deref(), Some("Invalid request"));
                assert_eq!(problem.detail.as_deref(), Some("currency is required"));
                assert_eq!(problem.validation_errors.len(), 1);
            }
            other => panic!("expected RequestInvalid, got {other:?}"),
        }
    }

    #[test]
    fn test_400_with_unparseable_body_still_maps_to_request_invalid() {
        let error =
            ResourceError::from_rest("invoice", "inv_123", rest_response_error(400, "not json"));

        assert!(matches!(
            error,
            ResourceError::RequestInvalid { problem } if problem == OrbProblem::default()
        ));
    }

    #[test]
    fn test_other_statuses_pass_through_as_http() {
        let error = ResourceError::from_rest("invoice", "inv_123", rest_response_error(500, "{}"));
        assert!(matches!(error, ResourceError::Http(_)));
    }

    #[test]
    fn test_no_next_page_message() {
        assert!(ResourceError::NoNextPage
            .to_string()
            .contains("no next cursor"));
    }
}
