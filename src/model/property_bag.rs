//! Lazy JSON-backed field storage for API models.
//!
//! Every model in this SDK stores its state as a raw mapping from field name
//! to undecoded JSON value. Typed accessors decode lazily on read and encode
//! on write, so fields the server sends that this SDK does not know about
//! round-trip untouched.
//!
//! # Omitted vs. explicitly null
//!
//! The Orb API distinguishes a field that is absent from a request body
//! (left untouched server-side) from a field that is explicitly `null`
//! (cleared server-side). [`PropertyBag::set_nullable`] writes an explicit
//! null entry for `None`, while [`PropertyBag::unset`] removes the key
//! entirely. Both states are observable afterwards via
//! [`PropertyBag::contains_key`].
//!
//! # Freezing
//!
//! A bag deserialized from an API response is frozen: further mutation fails
//! with [`ModelError::FrozenModel`]. A frozen bag is an immutable snapshot,
//! safe to read from multiple tasks without locks, and its equality is
//! stable. Locally built bags stay mutable until sent.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::model::ModelError;

/// An ordered-irrelevant mapping from field name to raw JSON value.
///
/// # Example
///
/// ```rust
/// use orb_api::model::PropertyBag;
///
/// let mut bag = PropertyBag::new();
/// bag.set("memo", &"net 30").unwrap();
/// bag.set_nullable::<String>("due_date", None).unwrap();
///
/// assert_eq!(bag.get_required::<String>("memo").unwrap(), "net 30");
/// // Explicitly nulled, so the key is present...
/// assert!(bag.contains_key("due_date"));
/// // ...but reads back as None.
/// assert_eq!(bag.get_optional::<String>("due_date").unwrap(), None);
/// // Never set at all: key absent.
/// assert!(!bag.contains_key("currency"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertyBag {
    fields: Map<String, Value>,
    frozen: bool,
}

impl PropertyBag {
    /// Creates an empty, mutable bag for building a request body locally.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: Map::new(),
            frozen: false,
        }
    }

    /// Creates a frozen bag from an already decoded JSON object.
    ///
    /// This is the deserialization entry point: responses received from the
    /// network become frozen snapshots.
    #[must_use]
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self {
            fields,
            frozen: true,
        }
    }

    /// Returns `true` once the bag has been frozen.
    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Makes the bag immutable. One-way; there is no thaw.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Returns `true` if the key has an entry, including an explicit null.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Returns the raw, undecoded value for a key.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no entries are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Decodes the value under `key` into `T`, requiring it to be present
    /// and non-null.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingRequiredField`] if the key is absent or
    /// its entry is JSON null (required implies non-null), and
    /// [`ModelError::InvalidShape`] if the raw value does not decode into
    /// `T`.
    pub fn get_required<T: DeserializeOwned>(&self, key: &str) -> Result<T, ModelError> {
        match self.fields.get(key) {
            None | Some(Value::Null) => Err(ModelError::MissingRequiredField {
                field: key.to_string(),
            }),
            Some(value) => {
                serde_json::from_value(value.clone()).map_err(|source| ModelError::InvalidShape {
                    field: key.to_string(),
                    source,
                })
            }
        }
    }

    /// Decodes the value under `key` into `T` if it is present and non-null.
    ///
    /// Absent keys and explicit nulls both read back as `Ok(None)`; use
    /// [`contains_key`](Self::contains_key) to tell the two apart.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidShape`] if a non-null raw value does not
    /// decode into `T`.
    pub fn get_optional<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ModelError> {
        match self.fields.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone()).map(Some).map_err(
                |source| ModelError::InvalidShape {
                    field: key.to_string(),
                    source,
                },
            ),
        }
    }

    /// Encodes `value` and stores it under `key`, overwriting any previous
    /// entry.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::FrozenModel`] on a frozen bag, and
    /// [`ModelError::InvalidShape`] if the value fails to serialize.
    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), ModelError> {
        if self.frozen {
            return Err(ModelError::FrozenModel {
                field: key.to_string(),
            });
        }
        let encoded = serde_json::to_value(value).map_err(|source| ModelError::InvalidShape {
            field: key.to_string(),
            source,
        })?;
        self.fields.insert(key.to_string(), encoded);
        Ok(())
    }

    /// Stores `value` under `key`, writing an **explicit JSON null** for
    /// `None`.
    ///
    /// An explicit null tells the server to clear the field; to leave the
    /// field untouched, do not set it at all (or call
    /// [`unset`](Self::unset)).
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::FrozenModel`] on a frozen bag, and
    /// [`ModelError::InvalidShape`] if the value fails to serialize.
    pub fn set_nullable<T: Serialize>(
        &mut self,
        key: &str,
        value: Option<&T>,
    ) -> Result<(), ModelError> {
        match value {
            Some(inner) => self.set(key, inner),
            None => {
                if self.frozen {
                    return Err(ModelError::FrozenModel {
                        field: key.to_string(),
                    });
                }
                self.fields.insert(key.to_string(), Value::Null);
                Ok(())
            }
        }
    }

    /// Removes the entry for `key`, returning the field to the "omitted"
    /// state.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::FrozenModel`] on a frozen bag.
    pub fn unset(&mut self, key: &str) -> Result<(), ModelError> {
        if self.frozen {
            return Err(ModelError::FrozenModel {
                field: key.to_string(),
            });
        }
        self.fields.remove(key);
        Ok(())
    }

    /// Returns the raw field map.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consumes the bag into a JSON object value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    /// Builds a frozen bag from any JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidShape`] if the value is not an object.
    pub fn from_value(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::Object(fields) => Ok(Self::from_map(fields)),
            other => {
                let source = serde_json::from_value::<Map<String, Value>>(other).unwrap_err();
                Err(ModelError::InvalidShape {
                    field: "<root>".to_string(),
                    source,
                })
            }
        }
    }
}

/// Equality compares the raw field maps only; two bags built differently but
/// holding equivalent raw data compare equal regardless of frozen state.
impl PartialEq for PropertyBag {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl Eq for PropertyBag {}

impl Serialize for PropertyBag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PropertyBag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Map::deserialize(deserializer)?;
        Ok(Self::from_map(fields))
    }
}

// Verify PropertyBag is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PropertyBag>();
};
