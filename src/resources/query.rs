//! Ordered query-pair construction for list endpoints.
//!
//! Orb list endpoints take filters in three shapes: plain `key=value`,
//! repeated array keys (`status[]=draft&status[]=issued`), and bracketed
//! range suffixes (`amount[gt]=100`). A plain map cannot represent repeated
//! keys, so filters build into an ordered `Vec<(String, String)>` consumed
//! by [`RestClient`](crate::clients::RestClient); percent-encoding happens
//! at send time in the HTTP client.

/// Accumulates query parameters as ordered `(key, value)` pairs.
///
/// # Example
///
/// ```rust
/// use orb_api::resources::QueryPairs;
///
/// let mut query = QueryPairs::new();
/// query.push("limit", "1");
/// query.push_array("status", ["draft", "issued"]);
/// query.push_range("amount", "gt", "100.00");
///
/// assert_eq!(
///     query.into_pairs(),
///     vec![
///         ("limit".to_string(), "1".to_string()),
///         ("status[]".to_string(), "draft".to_string()),
///         ("status[]".to_string(), "issued".to_string()),
///         ("amount[gt]".to_string(), "100.00".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs {
    pairs: Vec<(String, String)>,
}

impl QueryPairs {
    /// Creates an empty set of pairs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a plain `key=value` pair.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Appends one `key[]=value` pair per element.
    pub fn push_array<I, V>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        for value in values {
            self.pairs.push((format!("{key}[]"), value.into()));
        }
    }

    /// Appends a bracketed range filter, e.g. `amount[gt]=100`.
    pub fn push_range(&mut self, key: &str, op: &str, value: impl Into<String>) {
        self.pairs.push((format!("{key}[{op}]"), value.into()));
    }

    /// Returns `true` if no pairs have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Consumes the builder into its ordered pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }

    /// Consumes the builder into `Some(pairs)`, or `None` when empty.
    ///
    /// Matches the `Option<Vec<(String, String)>>` shape the client layer
    /// takes, so empty filters add no `?` to the URL.
    #[must_use]
    pub fn into_query(self) -> Option<Vec<(String, String)>> {
        if self.pairs.is_empty() {
            None
        } else {
            Some(self.pairs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_insertion_order() {
        let mut query = QueryPairs::new();
        query.push("b", "2");
        query.push("a", "1");

        assert_eq!(
            query.into_pairs(),
            vec![
                ("b".to_string(), "2".to_string()),
                ("a".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_push_array_emits_repeated_bracket_keys() {
        let mut query = QueryPairs::new();
        query.push_array("status", ["draft", "issued"]);

        assert_eq!(
            query.into_pairs(),
            vec![
                ("status[]".to_string(), "draft".to_string()),
                ("status[]".to_string(), "issued".to_string()),
            ]
        );
    }

    #[test]
    fn test_push_array_with_no_values_adds_nothing() {
        let mut query = QueryPairs::new();
        query.push_array::<_, String>("status", []);
        assert!(query.is_empty());
    }

    #[test]
    fn test_push_range_builds_bracketed_suffix() {
        let mut query = QueryPairs::new();
        query.push_range("invoice_date", "gte", "2024-01-01");

        assert_eq!(
            query.into_pairs(),
            vec![("invoice_date[gte]".to_string(), "2024-01-01".to_string())]
        );
    }

    #[test]
    fn test_into_query_returns_none_when_empty() {
        assert_eq!(QueryPairs::new().into_query(), None);

        let mut query = QueryPairs::new();
        query.push("limit", "1");
        assert!(query.into_query().is_some());
    }
}
