//! Support for discriminated-union response fields.
//!
//! Several Orb response fields are "one of N known shapes, selected by a
//! discriminator property, else raw passthrough". The union enums themselves
//! live next to their resources (see
//! [`Adjustment`](crate::resources::Adjustment) and
//! [`SubLineItem`](crate::resources::SubLineItem)); this module holds the
//! shared decode helpers.
//!
//! Decoding a union never fails: payloads whose discriminator is absent,
//! unreadable, or unrecognized are preserved verbatim in the union's
//! `Unknown` branch, which re-serializes byte-for-byte and only fails
//! explicit validation.

use serde_json::Value;

use crate::model::ModelError;

/// Reads a string discriminator property from a raw payload.
///
/// Returns `None` when the payload is not an object, the key is absent, or
/// the value is not a string — all of which the caller treats as "unknown
/// variant", never as a decode failure.
#[must_use]
pub fn discriminator<'a>(payload: &'a Value, key: &str) -> Option<&'a str> {
    payload.get(key).and_then(Value::as_str)
}

/// Builds the validation error for a union holding an unrecognized payload.
///
/// Carries the discriminator value when one was present, so the caller can
/// tell "new server-side variant" from "malformed payload".
#[must_use]
pub fn unknown_variant_error(payload: &Value, key: &str) -> ModelError {
    ModelError::InvalidEnumValue {
        field: key.to_string(),
        value: discriminator(payload, key).unwrap_or("<missing>").to_string(),
    }
}

/// Best-effort read of a string field out of a raw (unknown-variant)
/// payload.
///
/// # Errors
///
/// Returns [`ModelError::MissingRequiredField`] if the key is absent, null,
/// or not a string.
pub fn raw_str_field(payload: &Value, key: &str) -> Result<String, ModelError> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .map(ToString::to_string)
        .ok_or_else(|| ModelError::MissingRequiredField {
            field: key.to_string(),
        })
}

/// Best-effort read of an optional string field out of a raw payload.
#[must_use]
pub fn raw_opt_str_field(payload: &Value, key: &str) -> Option<String> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .map(ToString::to_string)
}
