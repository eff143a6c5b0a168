//! Open-world enum wrapper for server-controlled string enumerations.
//!
//! Orb adds enum values server-side without a version bump. A closed Rust
//! enum would fail deserialization the first time an unrecognized value
//! appears, so every enum field in this SDK is wrapped in [`ApiEnum`]: the
//! raw string is always preserved, resolution to the closed enum is
//! best-effort, and only explicit validation rejects unknown values.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::model::ModelError;

/// A raw enum string paired with its resolution into a closed enum `E`.
///
/// Encoding always re-emits the original raw string, never the enum's own
/// serialization, so unrecognized values pass through losslessly.
///
/// # Example
///
/// ```rust
/// use orb_api::model::ApiEnum;
/// use orb_api::resources::InvoiceStatus;
///
/// let known: ApiEnum<InvoiceStatus> = ApiEnum::from_raw("draft");
/// assert_eq!(known.known(), Some(&InvoiceStatus::Draft));
/// assert!(known.validate("status").is_ok());
///
/// let unknown: ApiEnum<InvoiceStatus> = ApiEnum::from_raw("superseded");
/// assert_eq!(unknown.known(), None);
/// assert_eq!(unknown.as_str(), "superseded");
/// assert!(unknown.validate("status").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ApiEnum<E> {
    raw: String,
    known: Option<E>,
}

impl<E: DeserializeOwned> ApiEnum<E> {
    /// Wraps a raw string, attempting to resolve it into `E`.
    ///
    /// Never fails; an unmatched string simply leaves
    /// [`known`](Self::known) empty.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let known = serde_json::from_value(Value::String(raw.clone())).ok();
        Self { raw, known }
    }
}

impl<E> ApiEnum<E> {
    /// Returns the resolved member, if the raw string matched one.
    #[must_use]
    pub const fn known(&self) -> Option<&E> {
        self.known.as_ref()
    }

    /// Returns the raw string exactly as the server sent it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Checks that the raw string resolved to a known member.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidEnumValue`] carrying the raw string when
    /// no member matched.
    pub fn validate(&self, field: &str) -> Result<(), ModelError> {
        if self.known.is_some() {
            Ok(())
        } else {
            Err(ModelError::InvalidEnumValue {
                field: field.to_string(),
                value: self.raw.clone(),
            })
        }
    }
}

impl<E: Serialize + DeserializeOwned> From<E> for ApiEnum<E> {
    /// Builds the wrapper from a known member, deriving the canonical raw
    /// string from the member's own serialization.
    fn from(member: E) -> Self {
        let raw = match serde_json::to_value(&member) {
            Ok(Value::String(s)) => s,
            // Closed enums in this SDK always serialize to strings; anything
            // else is an authoring error caught by the enum's own tests.
            _ => String::new(),
        };
        Self {
            raw,
            known: Some(member),
        }
    }
}

/// Equality is over the raw string, matching the serialized form.
impl<E> PartialEq for ApiEnum<E> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<E> Eq for ApiEnum<E> {}

impl<E> fmt::Display for ApiEnum<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl<E> Serialize for ApiEnum<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de, E: DeserializeOwned> Deserialize<'de> for ApiEnum<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_raw(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
    #[serde(rename_all = "snake_case")]
    enum Color {
        Red,
        DeepBlue,
    }

    #[test]
    fn test_known_member_resolves_and_validates() {
        let color: ApiEnum<Color> = ApiEnum::from_raw("deep_blue");

        assert_eq!(color.known(), Some(&Color::DeepBlue));
        assert!(color.validate("color").is_ok());
    }

    #[test]
    fn test_known_member_round_trips() {
        let color: ApiEnum<Color> = ApiEnum::from(Color::Red);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"red\"");

        let decoded: ApiEnum<Color> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, color);
        assert_eq!(decoded.known(), Some(&Color::Red));
    }

    #[test]
    fn test_unknown_value_decodes_but_fails_validation() {
        let color: ApiEnum<Color> = serde_json::from_str("\"ultraviolet\"").unwrap();

        assert_eq!(color.known(), None);
        assert!(matches!(
            color.validate("color"),
            Err(ModelError::InvalidEnumValue { field, value })
                if field == "color" && value == "ultraviolet"
        ));
    }

    #[test]
    fn test_unknown_value_re_encodes_exactly() {
        let color: ApiEnum<Color> = ApiEnum::from_raw("ultraviolet");
        let json = serde_json::to_string(&color).unwrap();

        assert_eq!(json, "\"ultraviolet\"");
    }

    #[test]
    fn test_equality_is_over_raw_string() {
        let from_member: ApiEnum<Color> = ApiEnum::from(Color::Red);
        let from_raw: ApiEnum<Color> = ApiEnum::from_raw("red");

        assert_eq!(from_member, from_raw);
    }

    #[test]
    fn test_display_emits_raw_string() {
        let color: ApiEnum<Color> = ApiEnum::from_raw("ultraviolet");
        assert_eq!(color.to_string(), "ultraviolet");
    }
}
