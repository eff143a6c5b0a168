//! Sub-line-item union.
//!
//! Line items break down into sub-line items discriminated by `type`:
//! `matrix`, `tier`, or the literal string `"null"` Orb uses for untyped
//! entries. As with [`Adjustment`](crate::resources::Adjustment), decoding
//! is lossless and unrecognized payloads land in
//! [`SubLineItem::Unknown`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::model::union;
use crate::model::{ModelError, PropertyBag};

/// The discriminator property for sub-line items.
const DISCRIMINATOR: &str = "type";

/// One sub-line item within an invoice line item.
#[derive(Debug, Clone, PartialEq)]
pub enum SubLineItem {
    /// A matrix-priced sub-line item (`type: "matrix"`).
    Matrix(PropertyBag),
    /// A tier-priced sub-line item (`type: "tier"`).
    Tier(PropertyBag),
    /// An untyped sub-line item (`type: "null"`, the literal string).
    Null(PropertyBag),
    /// Any payload whose discriminator is absent, unreadable, or
    /// unrecognized, preserved verbatim.
    Unknown(Value),
}

impl SubLineItem {
    /// Decodes a raw payload, dispatching on `type`.
    ///
    /// Never fails; anything that does not match a known variant becomes
    /// [`Unknown`](Self::Unknown).
    #[must_use]
    pub fn from_value(payload: Value) -> Self {
        let constructor: Option<fn(PropertyBag) -> Self> =
            match union::discriminator(&payload, DISCRIMINATOR) {
                Some("matrix") => Some(Self::Matrix),
                Some("tier") => Some(Self::Tier),
                Some("null") => Some(Self::Null),
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
    pub fn sub_line_item_type(&self) -> Option<&str> {
        match self {
            Self::Matrix(_) => Some("matrix"),
            Self::Tier(_) => Some("tier"),
            Self::Null(_) => Some("null"),
            Self::Unknown(payload) => union::discriminator(payload, DISCRIMINATOR),
        }
    }

    /// Returns the sub-line item name, whichever variant is held.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingRequiredField`] if `name` is absent, and
    /// [`ModelError::InvalidShape`] if it is present but not a string.
    pub fn name(&self) -> Result<String, ModelError> {
        match self {
            Self::Unknown(payload) => union::raw_str_field(payload, "name"),
            other => other.bag_unchecked().get_required("name"),
        }
    }

    /// Returns the amount attributed to this sub-line item.
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

    /// Returns the billed quantity, if the server included one.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidShape`] if a known variant carries a
    /// non-numeric `quantity`.
    pub fn quantity(&self) -> Result<Option<f64>, ModelError> {
        match self {
            Self::Unknown(payload) => Ok(payload.get("quantity").and_then(Value::as_f64)),
            other => other.bag_unchecked().get_optional("quantity"),
        }
    }

    /// Forces decode of the held variant's required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidEnumValue`] for [`Unknown`](Self::Unknown)
    /// payloads, or the first field error from a known variant.
    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            Self::Unknown(payload) => Err(union::unknown_variant_error(payload, DISCRIMINATOR)),
            other => {
                let bag = other.bag_unchecked();
                bag.get_required::<String>("name")?;
                bag.get_required::<String>("amount")?;
                Ok(())
            }
        }
    }

    /// The bag of a known variant. Callers must not pass `Unknown`.
    fn bag_unchecked(&self) -> &PropertyBag {
        match self {
            Self::Matrix(bag) | Self::Tier(bag) | Self::Null(bag) => bag,
            Self::Unknown(_) => unreachable!("bag_unchecked called on Unknown"),
        }
    }
}

impl Serialize for SubLineItem {
    /// Re-emits whichever branch is held; the discriminator is part of the
    /// stored data and is never re-derived.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unknown(payload) => payload.serialize(serializer),
            other => other.bag_unchecked().serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for SubLineItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let payload = Value::deserialize(deserializer)?;
        Ok(Self::from_value(payload))
    }
}
