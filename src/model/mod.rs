//! Core model mechanisms shared by every API resource.
//!
//! Two generic mechanisms recur throughout the SDK:
//!
//! - **[`PropertyBag`]**: a lazy JSON-backed field map. Models keep their
//!   state raw and decode typed views on demand, so unknown server fields
//!   round-trip untouched and building a request body never loses the
//!   omitted-vs-explicit-null distinction.
//! - **[`ApiEnum`]**: an open-world enum pairing the raw server string with
//!   a best-effort resolution into a closed Rust enum.
//!
//! Both follow the same propagation policy: decoding is optimistic (it only
//! fails for required/shape errors), validation is pessimistic and opt-in.
//! The [`union`] helpers extend the same policy to discriminated-union
//! fields.

mod api_enum;
mod errors;
mod property_bag;
pub mod union;

pub use api_enum::ApiEnum;
pub use errors::ModelError;
pub use property_bag::PropertyBag;
