//! API resource models and endpoint operations.
//!
//! Each resource pairs property-bag-backed models with the endpoint
//! operations that produce and consume them. Only the invoice family is
//! instantiated; further resources would repeat the same patterns.

mod adjustment;
mod customer;
mod errors;
mod invoice;
mod page;
mod query;
mod sub_line_item;

pub use adjustment::Adjustment;
pub use customer::CustomerMinified;
pub use errors::{OrbProblem, ResourceError};
pub use invoice::{
    Invoice, InvoiceLineItem, InvoiceListParams, InvoiceStatus, InvoiceUpdate, NewInvoice,
    RangeFilter,
};
pub use page::{Page, PaginationMetadata};
pub use query::QueryPairs;
pub use sub_line_item::SubLineItem;
