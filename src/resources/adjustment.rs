//! Invoice adjustment union.
//!
//! Orb represents discounts, minimums, and maximums applied to a line item
//! as a single polymorphic `adjustments` entry discriminated by
//! `adjustment_type`. Decoding never fails: an unrecognized or malformed
//! payload lands in [`Adjustment::Unknown`], round-trips verbatim, and only
//! fails explicit validation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::model::union;
use crate::model::{ModelError, PropertyBag};

/// The discriminator property for adjustments.
const DISCRIMINATOR: &str = "adjustment_type";

/// One adjustment applied to an invoice line item.
///
/// # Example
///
/// ```rust
/// use orb_api::resources::Adjustment;
/// use serde_json::json;
///
/// let adjustment: Adjustment = serde_json::from_value(json!({
///     "adjustment_type": "minimum",
///     "id": "adj_1",
///     "amount": "5.00",
///     "minimum_amount": "5.00",
///     "reason": null
/// }))
/// .unwrap();
///
/// assert!(matches!(adjustment, Adjustment::Minimum(_)));
/// assert_eq!(adjustment.id().unwrap(), "adj_1");
/// assert!(adjustment.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Adjustment {
    /// A usage-based discount (`adjustment_type: "usage_discount"`).
    UsageDiscount(PropertyBag),
    /// A fixed-amount discount (`adjustment_type: "amount_discount"`).
    AmountDiscount(PropertyBag),
    /// A percentage discount (`adjustment_type: "percentage_discount"`).
    PercentageDiscount(PropertyBag),
    /// A minimum spend commitment (`adjustment_type: "minimum"`).
    Minimum(PropertyBag),
    /// A maximum spend cap (`adjustment_type: "maximum"`).
    Maximum(PropertyBag),
    /// Any payload whose discriminator is absent, unreadable, or
    /// unrecognized, preserved verbatim.
    Unknown(Value),
}

impl Adjustment {
    /// Decodes a raw payload, dispatching on `adjustment_type`.
    ///
    /// Never fails; anything that does not match a known variant becomes
    /// [`Unknown`](Self::Unknown).
    #[must_use]
    pub fn from_value(payload: Value) -> Self {
        let constructor: Option<fn(PropertyBag) -> Self> =
            match union::discriminator(&payload, DISCRIMINATOR) {
                Some("usage_discount") => Some(Self::UsageDiscount),
                Some("amount_discount") => Some(Self::AmountDiscount),
                Some("percentage_discount") => Some(Self::PercentageDiscount),
                Some("minimum") => Some(Self::Minimum),
                Some("maximum") => Some(Self::Maximum),
                _ => None,
            };
        let Some(constructor) = constructor else {
            return Self::Unknown(payload);
        };
        match PropertyBag::from_value(payload.clone()) {
            Ok(bag) => constructor(bag),
            Err(_) => Self::Unknown(payload),
        }
    }

    /// Returns the discriminator value: static for known variants,
    /// best-effort from the raw payload for unknown ones.
    #[must_use]
    pub fn adjustment_type(&self) -> Option<&str> {
        match self {
            Self::UsageDiscount(_) => Some("usage_discount"),
            Self::AmountDiscount(_) => Some("amount_discount"),
            Self::PercentageDiscount(_) => Some("percentage_discount"),
            Self::Minimum(_) => Some("minimum"),
            Self::Maximum(_) => Some("maximum"),
            Self::Unknown(payload) => union::discriminator(payload, DISCRIMINATOR),
        }
    }

    /// Returns the adjustment id, whichever variant is held.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingRequiredField`] if `id` is absent, and
    /// [`ModelError::InvalidShape`] if it is present but not a string.
    pub fn id(&self) -> Result<String, ModelError> {
        match self {
            Self::Unknown(payload) => union::raw_str_field(payload, "id"),
            other => other.bag_unchecked().get_required("id"),
        }
    }

    /// Returns the applied amount, if the server included one.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidShape`] if a known variant carries a
    /// non-string `amount`.
    pub fn amount(&self) -> Result<Option<String>, ModelError> {
        match self {
            Self::Unknown(payload) => Ok(union::raw_opt_str_field(payload, "amount")),
            other => other.bag_unchecked().get_optional("amount"),
        }
    }

    /// Returns the adjustment reason, if the server included one.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidShape`] if a known variant carries a
    /// non-string `reason`.
    pub fn reason(&self) -> Result<Option<String>, ModelError> {
        match self {
            Self::Unknown(payload) => Ok(union::raw_opt_str_field(payload, "reason")),
            other => other.bag_unchecked().get_optional("reason"),
        }
    }

    /// Forces decode of the held variant's required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidEnumValue`] for [`Unknown`](Self::Unknown)
    /// payloads, or the first field error from a known variant.
    pub fn validate(&self) -> Result<(), ModelError> {
        let (bag, required_field) = match self {
            Self::UsageDiscount(bag) => (bag, "usage_discount"),
            Self::AmountDiscount(bag) => (bag, "amount_discount"),
            Self::PercentageDiscount(bag) => (bag, "percentage_discount"),
            Self::Minimum(bag) => (bag, "minimum_amount"),
            Self::Maximum(bag) => (bag, "maximum_amount"),
            Self::Unknown(payload) => {
                return Err(union::unknown_variant_error(payload, DISCRIMINATOR))
            }
        };
        bag.get_required::<String>("id")?;
        bag.get_required::<Value>(required_field)?;
        Ok(())
    }

    /// The bag of a known variant. Callers must not pass `Unknown`.
    fn bag_unchecked(&self) -> &PropertyBag {
        match self {
            Self::UsageDiscount(bag)
            | Self::AmountDiscount(bag)
            | Self::PercentageDiscount(bag)
            | Self::Minimum(bag)
            | Self::Maximum(bag) => bag,
            Self::Unknown(_) => unreachable!("bag_unchecked called on Unknown"),
        }
    }
}

impl Serialize for Adjustment {
    /// Re-emits whichever branch is held; the discriminator is part of the
    /// stored data and is never re-derived.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unknown(payload) => payload.serialize(serializer),
            other => other.bag_unchecked().serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Adjustment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let payload = Value::deserialize(deserializer)?;
        Ok(Self::from_value(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimum_payload() -> Value {
        json!({
            "adjustment_type": "minimum",
            "id": "adj_min",
            "amount": "10.00",
            "minimum_amount": "10.00",
            "item_id": "item_1",
            "reason": "contract floor"
        })
    }

    #[test]
    fn test_known_discriminators_dispatch_to_variants() {
        let cases = [
            ("usage_discount", "usage_discount"),
            ("amount_discount", "amount_discount"),
            ("percentage_discount", "percentage_discount"),
            ("minimum", "minimum"),
            ("maximum", "maximum"),
        ];
        for (raw, expected) in cases {
            let adjustment = Adjustment::from_value(json!({"adjustment_type": raw}));
            assert_eq!(adjustment.adjustment_type(), Some(expected));
            assert!(!matches!(adjustment, Adjustment::Unknown(_)));
        }
    }

    #[test]
    fn test_accessors_read_through_known_variant() {
        let adjustment = Adjustment::from_value(minimum_payload());

        assert_eq!(adjustment.id().unwrap(), "adj_min");
        assert_eq!(adjustment.amount().unwrap(), Some("10.00".to_string()));
        assert_eq!(
            adjustment.reason().unwrap(),
            Some("contract floor".to_string())
        );
        assert!(adjustment.validate().is_ok());
    }

    #[test]
    fn test_unrecognized_discriminator_becomes_unknown() {
        let payload = json!({
            "adjustment_type": "loyalty_credit",
            "id": "adj_new",
            "amount": "1.00"
        });
        let adjustment = Adjustment::from_value(payload.clone());

        assert!(matches!(adjustment, Adjustment::Unknown(_)));
        // Accessors still read best-effort.
        assert_eq!(adjustment.id().unwrap(), "adj_new");
        assert_eq!(adjustment.amount().unwrap(), Some("1.00".to_string()));
        // Validation names the discriminator value.
        assert!(matches!(
            adjustment.validate(),
            Err(ModelError::InvalidEnumValue { value, .. }) if value == "loyalty_credit"
        ));
        // Re-encoding is byte-for-byte.
        assert_eq!(serde_json::to_value(&adjustment).unwrap(), payload);
    }

    #[test]
    fn test_missing_discriminator_becomes_unknown() {
        let adjustment = Adjustment::from_value(json!({"id": "adj_x"}));
        assert!(matches!(adjustment, Adjustment::Unknown(_)));
        assert!(matches!(
            adjustment.validate(),
            Err(ModelError::InvalidEnumValue { value, .. }) if value == "<missing>"
        ));
    }

    #[test]
    fn test_non_object_payload_becomes_unknown() {
        let adjustment = Adjustment::from_value(json!("bare string"));
        assert!(matches!(adjustment, Adjustment::Unknown(_)));
        assert_eq!(
            serde_json::to_value(&adjustment).unwrap(),
            json!("bare string")
        );
    }

    #[test]
    fn test_known_variant_round_trips_with_extra_fields() {
        let payload = json!({
            "adjustment_type": "percentage_discount",
            "id": "adj_pct",
            "percentage_discount": 0.15,
            "some_future_field": [1, 2]
        });
        let adjustment: Adjustment = serde_json::from_value(payload.clone()).unwrap();

        assert!(matches!(adjustment, Adjustment::PercentageDiscount(_)));
        assert_eq!(serde_json::to_value(&adjustment).unwrap(), payload);
    }

    #[test]
    fn test_validate_requires_variant_specific_field() {
        let adjustment = Adjustment::from_value(json!({
            "adjustment_type": "maximum",
            "id": "adj_max"
        }));

        assert!(matches!(
            adjustment.validate(),
            Err(ModelError::MissingRequiredField { field }) if field == "maximum_amount"
        ));
    }
}
