//! Minified customer model embedded in invoice responses.

use serde::{Deserialize, Serialize};

use crate::model::{ModelError, PropertyBag};

/// The abbreviated customer record Orb embeds in invoice payloads.
///
/// Only identifiers are guaranteed; anything else the server includes
/// round-trips through the underlying bag untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerMinified {
    bag: PropertyBag,
}

impl CustomerMinified {
    /// Returns the Orb-issued customer id.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingRequiredField`] if `id` is absent or
    /// null, or [`ModelError::InvalidShape`] if it is not a string.
    pub fn id(&self) -> Result<String, ModelError> {
        self.bag.get_required("id")
    }

    /// Returns the caller-assigned external customer id, if set.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidShape`] if the field is present but not
    /// a string.
    pub fn external_customer_id(&self) -> Result<Option<String>, ModelError> {
        self.bag.get_optional("external_customer_id")
    }

    /// Returns the underlying field bag.
    #[must_use]
    pub const fn bag(&self) -> &PropertyBag {
        &self.bag
    }

    /// Forces decode of every required field.
    ///
    /// # Errors
    ///
    /// Returns the first [`ModelError`] encountered.
    pub fn validate(&self) -> Result<(), ModelError> {
        self.id()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors_decode_fields() {
        let customer: CustomerMinified = serde_json::from_value(json!({
            "id": "cus_1",
            "external_customer_id": "acme-42"
        }))
        .unwrap();

        assert_eq!(customer.id().unwrap(), "cus_1");
        assert_eq!(
            customer.external_customer_id().unwrap(),
            Some("acme-42".to_string())
        );
        assert!(customer.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_id() {
        let customer: CustomerMinified =
            serde_json::from_value(json!({"external_customer_id": "acme-42"})).unwrap();

        assert!(matches!(
            customer.validate(),
            Err(ModelError::MissingRequiredField { field }) if field == "id"
        ));
    }

    #[test]
    fn test_unknown_fields_round_trip() {
        let payload = json!({"id": "cus_1", "portal_url": "https://example.test"});
        let customer: CustomerMinified = serde_json::from_value(payload.clone()).unwrap();

        assert_eq!(serde_json::to_value(&customer).unwrap(), payload);
    }
}
