//! # Orb API Rust SDK
//!
//! A Rust SDK core for the Orb billing API, providing type-safe
//! configuration, an authenticated HTTP client, and lazy JSON-backed
//! resource models that never lose data the server sends.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`OrbConfig`] and [`OrbConfigBuilder`]
//! - Validated newtypes for the API key and base URL
//! - Lazy property-bag models ([`model::PropertyBag`]) that preserve
//!   unknown fields and distinguish omitted from explicitly-null values
//! - Open-world enums ([`model::ApiEnum`]) that keep unrecognized raw
//!   values representable
//! - Discriminated-union response fields ([`resources::Adjustment`],
//!   [`resources::SubLineItem`]) with lossless unknown-variant fallback
//! - Invoice resource operations (create, fetch, list, update, issue,
//!   mark paid, pay, void, delete line item)
//! - Cursor pagination via [`resources::Page`]
//! - Async HTTP client with bearer authentication and retry logic
//!
//! ## Quick Start
//!
//! ```rust
//! use orb_api::{OrbConfig, ApiKey, RestClient};
//!
//! // Create configuration using the builder pattern
//! let config = OrbConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = RestClient::new(&config);
//! ```
//!
//! ## Fetching and Listing Invoices
//!
//! ```rust,ignore
//! use orb_api::resources::{Invoice, InvoiceListParams, InvoiceStatus};
//!
//! // Fetch one invoice
//! let invoice = Invoice::fetch(&client, "inv_123").await?;
//! println!("{} is {}", invoice.id()?, invoice.status()?);
//!
//! // Walk a filtered listing page by page
//! let params = InvoiceListParams {
//!     status: vec![InvoiceStatus::Draft],
//!     limit: Some(20),
//!     ..InvoiceListParams::default()
//! };
//! let mut page = Invoice::list(&client, &params).await?;
//! loop {
//!     for invoice in page.items() {
//!         println!("{}", invoice.id()?);
//!     }
//!     if !page.has_next() {
//!         break;
//!     }
//!     page = page.next(&client).await?;
//! }
//! ```
//!
//! ## Building Request Bodies
//!
//! Request bodies are mutable property bags. A field never set stays off
//! the wire (server leaves it untouched); a nullable setter called with
//! `None` writes an explicit JSON null (server clears it):
//!
//! ```rust
//! use orb_api::resources::InvoiceUpdate;
//!
//! let mut update = InvoiceUpdate::new();
//! update.memo(None).unwrap();      // clears the memo server-side
//! // due_date never touched: left as-is server-side
//! ```
//!
//! ## Forward Compatibility
//!
//! Decoding is optimistic: unknown fields, unrecognized enum values, and
//! unrecognized union variants all decode losslessly and re-serialize
//! byte-for-byte. Validation is pessimistic and opt-in — call
//! `validate()` on a model to force-decode every required field and
//! reject anything the SDK does not recognize.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Frozen responses**: Models deserialized from the network are
//!   immutable snapshots, safe to read concurrently

pub mod clients;
pub mod config;
pub mod error;
pub mod model;
pub mod resources;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, BaseUrl, OrbConfig, OrbConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError, RestClient, RestError,
};

// Re-export model and resource types for convenience
pub use model::{ApiEnum, ModelError, PropertyBag};
pub use resources::{
    Adjustment, Invoice, InvoiceLineItem, InvoiceListParams, InvoiceStatus, InvoiceUpdate,
    NewInvoice, Page, PaginationMetadata, ResourceError, SubLineItem,
};
