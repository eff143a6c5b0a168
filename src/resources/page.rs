//! Cursor pagination over Orb list envelopes.
//!
//! List endpoints respond with `{"data": [...], "pagination_metadata":
//! {"has_more": bool, "next_cursor": string|null}}`. [`Page`] materializes
//! one page of items and walks forward by re-issuing the listing call with
//! the cursor substituted.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::clients::{HttpResponse, RestClient};
use crate::model::ModelError;
use crate::resources::errors::ResourceError;

/// The `pagination_metadata` object of a list envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PaginationMetadata {
    /// Whether more pages exist after this one.
    pub has_more: bool,
    /// The opaque cursor for the next page; `null` on the last page.
    pub next_cursor: Option<String>,
}

/// One page of a paginated listing.
///
/// # Example
///
/// ```rust,ignore
/// let mut page = Invoice::list(&client, &InvoiceListParams::default()).await?;
/// loop {
///     for invoice in page.items() {
///         println!("{}", invoice.id()?);
///     }
///     if !page.has_next() {
///         break;
///     }
///     page = page.next(&client).await?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Page<T> {
    items: Vec<T>,
    metadata: Option<PaginationMetadata>,
    path: String,
    base_query: Vec<(String, String)>,
}

impl<T: DeserializeOwned> Page<T> {
    /// Parses a list envelope out of an HTTP response.
    ///
    /// The `data` array is required and decoded strictly. The
    /// `pagination_metadata` object is parsed leniently: when it is absent
    /// or malformed, iteration degrades to "no next page" and a warning is
    /// logged, favoring availability of the items already received.
    ///
    /// Any `cursor` entry in `base_query` is stripped so continuation
    /// requests substitute a fresh one.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Model`] if `data` is absent or does not
    /// decode into a list of `T`.
    pub fn from_http_response(
        response: &HttpResponse,
        path: impl Into<String>,
        base_query: Vec<(String, String)>,
    ) -> Result<Self, ResourceError> {
        let path = path.into();

        let data = response
            .body
            .get("data")
            .cloned()
            .ok_or_else(|| ModelError::MissingRequiredField {
                field: "data".to_string(),
            })?;
        let items: Vec<T> =
            serde_json::from_value(data).map_err(|source| ModelError::InvalidShape {
                field: "data".to_string(),
                source,
            })?;

        let metadata = match response.body.get("pagination_metadata") {
            None => {
                tracing::warn!(path = %path, "List envelope is missing pagination_metadata");
                None
            }
            Some(raw) => match serde_json::from_value::<PaginationMetadata>(raw.clone()) {
                Ok(metadata) => Some(metadata),
                Err(error) => {
                    tracing::warn!(
                        path = %path,
                        %error,
                        "Malformed pagination_metadata; treating as last page"
                    );
                    None
                }
            },
        };

        let mut base_query = base_query;
        base_query.retain(|(key, _)| key != "cursor");

        Ok(Self {
            items,
            metadata,
            path,
            base_query,
        })
    }

    /// Requests the next page.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NoNextPage`] when [`has_next`](Self::has_next)
    /// is false, and transport or decode errors from the follow-up call.
    pub async fn next(&self, client: &RestClient) -> Result<Self, ResourceError> {
        let cursor = self
            .next_cursor()
            .filter(|_| self.has_next())
            .ok_or(ResourceError::NoNextPage)?
            .to_string();

        let mut query = self.base_query.clone();
        query.push(("cursor".to_string(), cursor));

        let response = client.get(&self.path, Some(query)).await?;
        Self::from_http_response(&response, self.path.clone(), self.base_query.clone())
    }
}

impl<T> Page<T> {
    /// Returns the items on this page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page into its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Returns the parsed pagination metadata, when the server sent a
    /// well-formed one.
    #[must_use]
    pub const fn metadata(&self) -> Option<&PaginationMetadata> {
        self.metadata.as_ref()
    }

    /// Returns the next-page cursor, if any.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.next_cursor.as_deref())
    }

    /// Returns `true` iff this page is non-empty and the server issued a
    /// next cursor. Never errors; malformed metadata reads as `false`.
    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.items.is_empty() && self.next_cursor().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn response(body: serde_json::Value) -> HttpResponse {
        HttpResponse::new(200, HashMap::new(), body)
    }

    #[test]
    fn test_page_with_cursor_and_items_has_next() {
        let page: Page<serde_json::Value> = Page::from_http_response(
            &response(json!({
                "data": [{"id": "inv_1"}],
                "pagination_metadata": {"has_more": true, "next_cursor": "cur_2"}
            })),
            "invoices",
            vec![],
        )
        .unwrap();

        assert_eq!(page.items().len(), 1);
        assert_eq!(page.next_cursor(), Some("cur_2"));
        assert!(page.has_next());
    }

    #[test]
    fn test_null_cursor_means_no_next_page() {
        let page: Page<serde_json::Value> = Page::from_http_response(
            &response(json!({
                "data": [{"id": "inv_1"}],
                "pagination_metadata": {"has_more": false, "next_cursor": null}
            })),
            "invoices",
            vec![],
        )
        .unwrap();

        assert!(!page.has_next());
    }

    #[test]
    fn test_empty_page_has_no_next_even_with_cursor() {
        let page: Page<serde_json::Value> = Page::from_http_response(
            &response(json!({
                "data": [],
                "pagination_metadata": {"has_more": true, "next_cursor": "cur_2"}
            })),
            "invoices",
            vec![],
        )
        .unwrap();

        assert!(!page.has_next());
    }

    #[test]
    fn test_malformed_metadata_degrades_to_last_page() {
        let page: Page<serde_json::Value> = Page::from_http_response(
            &response(json!({
                "data": [{"id": "inv_1"}],
                "pagination_metadata": "garbage"
            })),
            "invoices",
            vec![],
        )
        .unwrap();

        assert!(page.metadata().is_none());
        assert!(!page.has_next());
    }

    #[test]
    fn test_missing_metadata_degrades_to_last_page() {
        let page: Page<serde_json::Value> =
            Page::from_http_response(&response(json!({"data": []})), "invoices", vec![]).unwrap();

        assert!(page.metadata().is_none());
        assert!(!page.has_next());
    }

    #[test]
    fn test_missing_data_is_a_model_error() {
        let result: Result<Page<serde_json::Value>, _> =
            Page::from_http_response(&response(json!({})), "invoices", vec![]);

        assert!(matches!(
            result,
            Err(ResourceError::Model(ModelError::MissingRequiredField { field })) if field == "data"
        ));
    }

    #[test]
    fn test_base_query_strips_stale_cursor() {
        let page: Page<serde_json::Value> = Page::from_http_response(
            &response(json!({"data": []})),
            "invoices",
            vec![
                ("limit".to_string(), "1".to_string()),
                ("cursor".to_string(), "cur_old".to_string()),
            ],
        )
        .unwrap();

        assert_eq!(
            page.base_query,
            vec![("limit".to_string(), "1".to_string())]
        );
    }

    #[tokio::test]
    async fn test_next_without_cursor_is_no_next_page() {
        let page: Page<serde_json::Value> =
            Page::from_http_response(&response(json!({"data": []})), "invoices", vec![]).unwrap();

        let config = crate::OrbConfig::builder()
            .api_key(crate::ApiKey::new("sk_test").unwrap())
            .build()
            .unwrap();
        let client = RestClient::new(&config);

        assert!(matches!(
            page.next(&client).await,
            Err(ResourceError::NoNextPage)
        ));
    }
}
