//! Error types for model decoding and validation.
//!
//! Decoding in this SDK is optimistic: raw payloads are accepted as-is and
//! typed views are produced on demand. The errors here surface either at
//! access time (a required field is missing or the wrong shape) or when
//! [`validate`](crate::model::PropertyBag) is explicitly invoked (an enum or
//! union discriminator value the SDK does not recognize).

use thiserror::Error;

/// Errors produced by typed access into a model's raw field map.
///
/// # Example
///
/// ```rust
/// use orb_api::model::{ModelError, PropertyBag};
///
/// let bag = PropertyBag::new();
/// let result = bag.get_required::<String>("id");
/// assert!(matches!(
///     result,
///     Err(ModelError::MissingRequiredField { field }) if field == "id"
/// ));
/// ```
#[derive(Debug, Error)]
pub enum ModelError {
    /// A required field was absent, or present with an explicit JSON null.
    #[error("Missing required field '{field}'")]
    MissingRequiredField {
        /// The name of the missing field.
        field: String,
    },

    /// A raw value was present but could not be decoded into the
    /// requested type.
    #[error("Field '{field}' has an unexpected shape: {source}")]
    InvalidShape {
        /// The name of the field that failed to decode.
        field: String,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// An enum or union discriminator value did not match any known member.
    ///
    /// This is only surfaced by explicit validation; decoding preserves the
    /// raw value for forward compatibility.
    #[error("Value '{value}' for '{field}' is not a recognized member")]
    InvalidEnumValue {
        /// The field or discriminator name.
        field: String,
        /// The unrecognized raw value.
        value: String,
    },

    /// A mutation was attempted on a frozen model.
    ///
    /// Models deserialized from an API response are frozen so that equality
    /// and concurrent reads are stable.
    #[error("Cannot set '{field}': model is frozen after deserialization")]
    FrozenModel {
        /// The field the caller attempted to set.
        field: String,
    },
}

// Verify ModelError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ModelError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_field_message_names_the_field() {
        let error = ModelError::MissingRequiredField {
            field: "amount_due".to_string(),
        };
        assert!(error.to_string().contains("amount_due"));
    }

    #[test]
    fn test_invalid_enum_value_message_includes_value_and_field() {
        let error = ModelError::InvalidEnumValue {
            field: "status".to_string(),
            value: "hyperdrafted".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("status"));
        assert!(message.contains("hyperdrafted"));
    }

    #[test]
    fn test_invalid_shape_preserves_serde_source() {
        let source = serde_json::from_value::<u64>(serde_json::json!("nope")).unwrap_err();
        let error = ModelError::InvalidShape {
            field: "total".to_string(),
            source,
        };
        assert!(error.to_string().contains("total"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ModelError::FrozenModel {
            field: "memo".to_string(),
        };
        let _: &dyn std::error::Error = &error;
    }
}
