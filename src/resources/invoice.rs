//! Invoice resource: models, request params, and endpoint operations.
//!
//! Response models (`Invoice`, `InvoiceLineItem`) are frozen property bags
//! with lazy typed accessors; request bodies (`NewInvoice`,
//! `InvoiceUpdate`) are mutable bags built through typed setters that keep
//! the omitted-vs-explicitly-null distinction intact all the way to the
//! wire.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::RestClient;
use crate::model::{ApiEnum, ModelError, PropertyBag};
use crate::resources::adjustment::Adjustment;
use crate::resources::customer::CustomerMinified;
use crate::resources::errors::ResourceError;
use crate::resources::page::Page;
use crate::resources::query::QueryPairs;
use crate::resources::sub_line_item::SubLineItem;

/// The resource name used in error messages.
const RESOURCE: &str = "invoice";

/// The lifecycle states of an invoice.
///
/// Always consumed through [`ApiEnum`], so a state added server-side
/// decodes losslessly and only fails explicit validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    /// Created but not yet issued to the customer.
    Draft,
    /// Issued and awaiting payment.
    Issued,
    /// Fully paid.
    Paid,
    /// Synced to an external accounting system.
    Synced,
    /// Voided; no longer collectible.
    Void,
}

impl InvoiceStatus {
    /// Returns the wire representation of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Issued => "issued",
            Self::Paid => "paid",
            Self::Synced => "synced",
            Self::Void => "void",
        }
    }
}

/// An invoice received from the API.
///
/// Deserialization freezes the underlying bag; fields the SDK does not
/// model round-trip untouched.
///
/// # Example
///
/// ```rust
/// use orb_api::resources::{Invoice, InvoiceStatus};
/// use serde_json::json;
///
/// let invoice: Invoice = serde_json::from_value(json!({
///     "id": "inv_1",
///     "status": "draft",
///     "currency": "USD",
///     "amount_due": "10.00",
///     "total": "10.00",
///     "subtotal": "10.00",
///     "created_at": "2024-01-01T00:00:00Z",
///     "line_items": []
/// }))
/// .unwrap();
///
/// assert_eq!(invoice.status().unwrap().known(), Some(&InvoiceStatus::Draft));
/// assert!(invoice.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Invoice {
    bag: PropertyBag,
}

impl Invoice {
    /// Returns the Orb-issued invoice id.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if the field is absent, null, or not a string.
    pub fn id(&self) -> Result<String, ModelError> {
        self.bag.get_required("id")
    }

    /// Returns the invoice status with its raw string preserved.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if the field is absent, null, or not a string.
    pub fn status(&self) -> Result<ApiEnum<InvoiceStatus>, ModelError> {
        self.bag.get_required("status")
    }

    /// Returns the ISO 4217 currency code.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if the field is absent, null, or not a string.
    pub fn currency(&self) -> Result<String, ModelError> {
        self.bag.get_required("currency")
    }

    /// Returns the outstanding amount as a decimal string.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if the field is absent, null, or not a string.
    pub fn amount_due(&self) -> Result<String, ModelError> {
        self.bag.get_required("amount_due")
    }

    /// Returns the invoice total as a decimal string.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if the field is absent, null, or not a string.
    pub fn total(&self) -> Result<String, ModelError> {
        self.bag.get_required("total")
    }

    /// Returns the pre-adjustment subtotal as a decimal string.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if the field is absent, null, or not a string.
    pub fn subtotal(&self) -> Result<String, ModelError> {
        self.bag.get_required("subtotal")
    }

    /// Returns the creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if the field is absent, null, or not an
    /// RFC 3339 timestamp.
    pub fn created_at(&self) -> Result<DateTime<Utc>, ModelError> {
        self.bag.get_required("created_at")
    }

    /// Returns the line items on this invoice.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if the field is absent, null, or not a list.
    pub fn line_items(&self) -> Result<Vec<InvoiceLineItem>, ModelError> {
        self.bag.get_required("line_items")
    }

    /// Returns the free-text memo, if set.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidShape`] on a non-string value.
    pub fn memo(&self) -> Result<Option<String>, ModelError> {
        self.bag.get_optional("memo")
    }

    /// Returns the payment due date, if set.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidShape`] on a malformed timestamp.
    pub fn due_date(&self) -> Result<Option<DateTime<Utc>>, ModelError> {
        self.bag.get_optional("due_date")
    }

    /// Returns the invoice date, if set.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidShape`] on a malformed timestamp.
    pub fn invoice_date(&self) -> Result<Option<DateTime<Utc>>, ModelError> {
        self.bag.get_optional("invoice_date")
    }

    /// Returns the hosted payment page URL, if the invoice has one.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidShape`] on a non-string value.
    pub fn hosted_invoice_url(&self) -> Result<Option<String>, ModelError> {
        self.bag.get_optional("hosted_invoice_url")
    }

    /// Returns when the invoice was paid, if it has been.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidShape`] on a malformed timestamp.
    pub fn paid_at(&self) -> Result<Option<DateTime<Utc>>, ModelError> {
        self.bag.get_optional("paid_at")
    }

    /// Returns when the invoice was issued, if it has been.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidShape`] on a malformed timestamp.
    pub fn issued_at(&self) -> Result<Option<DateTime<Utc>>, ModelError> {
        self.bag.get_optional("issued_at")
    }

    /// Returns when the invoice was voided, if it has been.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidShape`] on a malformed timestamp.
    pub fn voided_at(&self) -> Result<Option<DateTime<Utc>>, ModelError> {
        self.bag.get_optional("voided_at")
    }

    /// Returns the human-readable invoice number, if assigned.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidShape`] on a non-string value.
    pub fn invoice_number(&self) -> Result<Option<String>, ModelError> {
        self.bag.get_optional("invoice_number")
    }

    /// Returns the caller-assigned metadata map, if set.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidShape`] on a non-object value.
    pub fn metadata(&self) -> Result<Option<HashMap<String, Option<String>>>, ModelError> {
        self.bag.get_optional("metadata")
    }

    /// Returns the embedded customer record, if included.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidShape`] on a non-object value.
    pub fn customer(&self) -> Result<Option<CustomerMinified>, ModelError> {
        self.bag.get_optional("customer")
    }

    /// Returns the underlying field bag.
    #[must_use]
    pub const fn bag(&self) -> &PropertyBag {
        &self.bag
    }

    /// Forces decode of every required field, the status enum, and every
    /// line item (including each line item's adjustments and sub-line
    /// items). Short-circuits on the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first [`ModelError`] encountered.
    pub fn validate(&self) -> Result<(), ModelError> {
        self.id()?;
        self.status()?.validate("status")?;
        self.currency()?;
        self.amount_due()?;
        self.total()?;
        self.subtotal()?;
        self.created_at()?;
        for line_item in self.line_items()? {
            line_item.validate()?;
        }
        if let Some(customer) = self.customer()? {
            customer.validate()?;
        }
        Ok(())
    }
}

/// One line item on an invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceLineItem {
    bag: PropertyBag,
}

impl InvoiceLineItem {
    /// Returns the line item id.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if the field is absent, null, or not a string.
    pub fn id(&self) -> Result<String, ModelError> {
        self.bag.get_required("id")
    }

    /// Returns the line item name.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if the field is absent, null, or not a string.
    pub fn name(&self) -> Result<String, ModelError> {
        self.bag.get_required("name")
    }

    /// Returns the line item amount as a decimal string.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if the field is absent, null, or not a string.
    pub fn amount(&self) -> Result<String, ModelError> {
        self.bag.get_required("amount")
    }

    /// Returns the billed quantity, if present.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidShape`] on a non-numeric value.
    pub fn quantity(&self) -> Result<Option<f64>, ModelError> {
        self.bag.get_optional("quantity")
    }

    /// Returns the adjustments applied to this line item.
    ///
    /// Absent reads as an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidShape`] on a non-list value.
    pub fn adjustments(&self) -> Result<Vec<Adjustment>, ModelError> {
        Ok(self.bag.get_optional("adjustments")?.unwrap_or_default())
    }

    /// Returns the sub-line items under this line item.
    ///
    /// Absent reads as an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidShape`] on a non-list value.
    pub fn sub_line_items(&self) -> Result<Vec<SubLineItem>, ModelError> {
        Ok(self.bag.get_optional("sub_line_items")?.unwrap_or_default())
    }

    /// Returns the underlying field bag.
    #[must_use]
    pub const fn bag(&self) -> &PropertyBag {
        &self.bag
    }

    /// Forces decode of required fields and validates every embedded
    /// adjustment and sub-line item.
    ///
    /// # Errors
    ///
    /// Returns the first [`ModelError`] encountered.
    pub fn validate(&self) -> Result<(), ModelError> {
        self.id()?;
        self.name()?;
        self.amount()?;
        for adjustment in self.adjustments()? {
            adjustment.validate()?;
        }
        for sub_line_item in self.sub_line_items()? {
            sub_line_item.validate()?;
        }
        Ok(())
    }
}

/// Request body for creating an invoice.
///
/// Built locally as a mutable bag; fields never set stay off the wire,
/// while nullable setters can write an explicit null.
///
/// # Example
///
/// ```rust
/// use orb_api::resources::NewInvoice;
///
/// let mut body = NewInvoice::new("USD");
/// body.external_customer_id("acme-42").unwrap();
/// body.net_terms(30).unwrap();
/// body.memo(Some("Q1 true-up")).unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NewInvoice {
    bag: PropertyBag,
}

impl NewInvoice {
    /// Starts a new invoice body in the given currency.
    #[must_use]
    pub fn new(currency: &str) -> Self {
        let mut bag = PropertyBag::new();
        // A fresh bag is never frozen, so this cannot fail.
        let _ = bag.set("currency", currency);
        Self { bag }
    }

    /// Targets the invoice at an Orb customer id.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::FrozenModel`] if the body has been frozen.
    pub fn customer_id(&mut self, id: &str) -> Result<(), ModelError> {
        self.bag.set("customer_id", id)
    }

    /// Targets the invoice at a caller-assigned external customer id.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::FrozenModel`] if the body has been frozen.
    pub fn external_customer_id(&mut self, id: &str) -> Result<(), ModelError> {
        self.bag.set("external_customer_id", id)
    }

    /// Sets the invoice date.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::FrozenModel`] if the body has been frozen.
    pub fn invoice_date(&mut self, date: DateTime<Utc>) -> Result<(), ModelError> {
        self.bag.set("invoice_date", &date)
    }

    /// Sets the payment terms in days.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::FrozenModel`] if the body has been frozen.
    pub fn net_terms(&mut self, days: i64) -> Result<(), ModelError> {
        self.bag.set("net_terms", &days)
    }

    /// Sets the line items to bill.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::FrozenModel`] if the body has been frozen.
    pub fn line_items(&mut self, items: &[Value]) -> Result<(), ModelError> {
        self.bag.set("line_items", items)
    }

    /// Sets or explicitly clears the memo.
    ///
    /// `None` writes an explicit null; to leave the field off the wire, do
    /// not call this at all.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::FrozenModel`] if the body has been frozen.
    pub fn memo(&mut self, memo: Option<&str>) -> Result<(), ModelError> {
        self.bag.set_nullable("memo", memo.map(ToString::to_string).as_ref())
    }

    /// Sets or explicitly clears the metadata map.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::FrozenModel`] if the body has been frozen.
    pub fn metadata(
        &mut self,
        metadata: Option<&HashMap<String, Option<String>>>,
    ) -> Result<(), ModelError> {
        self.bag.set_nullable("metadata", metadata)
    }

    /// Returns the underlying field bag.
    #[must_use]
    pub const fn bag(&self) -> &PropertyBag {
        &self.bag
    }

    /// Consumes the body into its wire representation.
    #[must_use]
    pub fn into_body(self) -> Value {
        self.bag.into_value()
    }
}

/// Request body for updating an invoice.
///
/// Every field is optional-nullable: setters take `Option<T>` and `None`
/// writes an explicit null telling the server to clear the field, while a
/// field never set stays untouched server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InvoiceUpdate {
    bag: PropertyBag,
}

impl InvoiceUpdate {
    /// Starts an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or explicitly clears the memo.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::FrozenModel`] if the body has been frozen.
    pub fn memo(&mut self, memo: Option<&str>) -> Result<(), ModelError> {
        self.bag.set_nullable("memo", memo.map(ToString::to_string).as_ref())
    }

    /// Sets or explicitly clears the payment due date.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::FrozenModel`] if the body has been frozen.
    pub fn due_date(&mut self, date: Option<DateTime<Utc>>) -> Result<(), ModelError> {
        self.bag.set_nullable("due_date", date.as_ref())
    }

    /// Sets or explicitly clears the invoice date.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::FrozenModel`] if the body has been frozen.
    pub fn invoice_date(&mut self, date: Option<DateTime<Utc>>) -> Result<(), ModelError> {
        self.bag.set_nullable("invoice_date", date.as_ref())
    }

    /// Sets or explicitly clears the metadata map.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::FrozenModel`] if the body has been frozen.
    pub fn metadata(
        &mut self,
        metadata: Option<&HashMap<String, Option<String>>>,
    ) -> Result<(), ModelError> {
        self.bag.set_nullable("metadata", metadata)
    }

    /// Returns `true` if no fields have been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bag.is_empty()
    }

    /// Returns the underlying field bag.
    #[must_use]
    pub const fn bag(&self) -> &PropertyBag {
        &self.bag
    }

    /// Consumes the body into its wire representation.
    #[must_use]
    pub fn into_body(self) -> Value {
        self.bag.into_value()
    }
}

/// A bracketed range filter over a single query key.
///
/// Each bound set emits one `key[op]=value` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeFilter {
    /// Exact match (`key=value`).
    pub eq: Option<String>,
    /// Strictly greater than (`key[gt]`).
    pub gt: Option<String>,
    /// Greater than or equal (`key[gte]`).
    pub gte: Option<String>,
    /// Strictly less than (`key[lt]`).
    pub lt: Option<String>,
    /// Less than or equal (`key[lte]`).
    pub lte: Option<String>,
}

impl RangeFilter {
    fn append_to(&self, key: &str, query: &mut QueryPairs) {
        if let Some(value) = &self.eq {
            query.push(key, value.clone());
        }
        for (op, bound) in [
            ("gt", &self.gt),
            ("gte", &self.gte),
            ("lt", &self.lt),
            ("lte", &self.lte),
        ] {
            if let Some(value) = bound {
                query.push_range(key, op, value.clone());
            }
        }
    }
}

/// Filters for the list-invoices endpoint.
///
/// Serializes to an ordered list of query pairs so that repeated
/// `status[]` keys and bracketed range keys are representable.
///
/// # Example
///
/// ```rust
/// use orb_api::resources::{InvoiceListParams, InvoiceStatus, RangeFilter};
///
/// let params = InvoiceListParams {
///     limit: Some(1),
///     status: vec![InvoiceStatus::Draft],
///     amount: RangeFilter {
///         gt: Some("100.00".to_string()),
///         ..RangeFilter::default()
///     },
///     ..InvoiceListParams::default()
/// };
///
/// assert_eq!(
///     params.to_query_pairs(),
///     vec![
///         ("limit".to_string(), "1".to_string()),
///         ("status[]".to_string(), "draft".to_string()),
///         ("amount[gt]".to_string(), "100.00".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceListParams {
    /// Maximum number of items per page.
    pub limit: Option<u32>,
    /// Cursor to resume from; normally managed by [`Page`].
    pub cursor: Option<String>,
    /// Statuses to include; each emits one `status[]` pair.
    pub status: Vec<InvoiceStatus>,
    /// Filter on the invoice amount.
    pub amount: RangeFilter,
    /// Filter on the invoice date.
    pub invoice_date: RangeFilter,
    /// Filter on the due date.
    pub due_date: RangeFilter,
    /// Restrict to one Orb customer id.
    pub customer_id: Option<String>,
    /// Restrict to one external customer id.
    pub external_customer_id: Option<String>,
    /// Restrict to one subscription id.
    pub subscription_id: Option<String>,
    /// Restrict to recurring (or one-off) invoices.
    pub is_recurring: Option<bool>,
}

impl InvoiceListParams {
    /// Serializes the filters into ordered query pairs.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut query = QueryPairs::new();
        if let Some(limit) = self.limit {
            query.push("limit", limit.to_string());
        }
        if let Some(cursor) = &self.cursor {
            query.push("cursor", cursor.clone());
        }
        query.push_array("status", self.status.iter().map(|s| s.as_str()));
        self.amount.append_to("amount", &mut query);
        self.invoice_date.append_to("invoice_date", &mut query);
        self.due_date.append_to("due_date", &mut query);
        if let Some(id) = &self.customer_id {
            query.push("customer_id", id.clone());
        }
        if let Some(id) = &self.external_customer_id {
            query.push("external_customer_id", id.clone());
        }
        if let Some(id) = &self.subscription_id {
            query.push("subscription_id", id.clone());
        }
        if let Some(is_recurring) = self.is_recurring {
            query.push("is_recurring", is_recurring.to_string());
        }
        query.into_pairs()
    }
}

impl Invoice {
    /// Creates a one-off invoice.
    ///
    /// `POST /invoices`
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::RequestInvalid`] on a 400 response, and
    /// transport or decode errors otherwise.
    pub async fn create(client: &RestClient, body: NewInvoice) -> Result<Self, ResourceError> {
        let response = client
            .post("invoices", body.into_body(), None)
            .await
            .map_err(|e| ResourceError::from_rest(RESOURCE, "<new>", e))?;
        decode_invoice(response.body)
    }

    /// Fetches one invoice by id.
    ///
    /// `GET /invoices/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] on a 404 response, and transport
    /// or decode errors otherwise.
    pub async fn fetch(client: &RestClient, id: &str) -> Result<Self, ResourceError> {
        let response = client
            .get(&format!("invoices/{id}"), None)
            .await
            .map_err(|e| ResourceError::from_rest(RESOURCE, id, e))?;
        decode_invoice(response.body)
    }

    /// Lists invoices matching the given filters.
    ///
    /// `GET /invoices`
    ///
    /// # Errors
    ///
    /// Returns transport errors, or [`ResourceError::Model`] if the list
    /// envelope is malformed.
    pub async fn list(
        client: &RestClient,
        params: &InvoiceListParams,
    ) -> Result<Page<Self>, ResourceError> {
        list_path(client, "invoices", params.to_query_pairs()).await
    }

    /// Lists invoices with reduced per-item payloads.
    ///
    /// `GET /invoices` with `include[]=summary`; same envelope as
    /// [`list`](Self::list), smaller items.
    ///
    /// # Errors
    ///
    /// Returns transport errors, or [`ResourceError::Model`] if the list
    /// envelope is malformed.
    pub async fn list_summary(
        client: &RestClient,
        params: &InvoiceListParams,
    ) -> Result<Page<Self>, ResourceError> {
        let mut pairs = params.to_query_pairs();
        pairs.push(("include[]".to_string(), "summary".to_string()));
        list_path(client, "invoices", pairs).await
    }

    /// Updates a draft invoice.
    ///
    /// `PUT /invoices/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] on a 404 response,
    /// [`ResourceError::RequestInvalid`] on a 400, and transport or decode
    /// errors otherwise.
    pub async fn update(
        client: &RestClient,
        id: &str,
        body: InvoiceUpdate,
    ) -> Result<Self, ResourceError> {
        let response = client
            .put(&format!("invoices/{id}"), body.into_body(), None)
            .await
            .map_err(|e| ResourceError::from_rest(RESOURCE, id, e))?;
        decode_invoice(response.body)
    }

    /// Removes one line item from a draft invoice, returning the updated
    /// invoice.
    ///
    /// `DELETE /invoices/{id}/line_items/{line_item_id}`
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] on a 404 response, and transport
    /// or decode errors otherwise.
    pub async fn delete_line_item(
        client: &RestClient,
        id: &str,
        line_item_id: &str,
    ) -> Result<Self, ResourceError> {
        let response = client
            .delete(&format!("invoices/{id}/line_items/{line_item_id}"), None)
            .await
            .map_err(|e| ResourceError::from_rest(RESOURCE, id, e))?;
        decode_invoice(response.body)
    }

    /// Issues a draft invoice to the customer.
    ///
    /// `POST /invoices/{id}/issue`
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] on a 404 response, and transport
    /// or decode errors otherwise.
    pub async fn issue(client: &RestClient, id: &str) -> Result<Self, ResourceError> {
        Self::action(client, id, "issue", serde_json::json!({})).await
    }

    /// Marks an invoice as paid outside of Orb.
    ///
    /// `POST /invoices/{id}/mark_paid`
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] on a 404 response, and transport
    /// or decode errors otherwise.
    pub async fn mark_paid(
        client: &RestClient,
        id: &str,
        payment_received_date: NaiveDate,
    ) -> Result<Self, ResourceError> {
        let body = serde_json::json!({
            "payment_received_date": payment_received_date.format("%Y-%m-%d").to_string()
        });
        Self::action(client, id, "mark_paid", body).await
    }

    /// Collects payment for an issued invoice.
    ///
    /// `POST /invoices/{id}/pay`
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] on a 404 response, and transport
    /// or decode errors otherwise.
    pub async fn pay(client: &RestClient, id: &str) -> Result<Self, ResourceError> {
        Self::action(client, id, "pay", serde_json::json!({})).await
    }

    /// Voids an invoice.
    ///
    /// `POST /invoices/{id}/void`
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] on a 404 response, and transport
    /// or decode errors otherwise.
    pub async fn void(client: &RestClient, id: &str) -> Result<Self, ResourceError> {
        Self::action(client, id, "void", serde_json::json!({})).await
    }

    /// Shared POST-action helper for issue/mark_paid/pay/void.
    async fn action(
        client: &RestClient,
        id: &str,
        action: &str,
        body: Value,
    ) -> Result<Self, ResourceError> {
        let response = client
            .post(&format!("invoices/{id}/{action}"), body, None)
            .await
            .map_err(|e| ResourceError::from_rest(RESOURCE, id, e))?;
        decode_invoice(response.body)
    }
}

/// Issues a listing request and parses the page envelope.
async fn list_path(
    client: &RestClient,
    path: &str,
    pairs: Vec<(String, String)>,
) -> Result<Page<Invoice>, ResourceError> {
    let query = if pairs.is_empty() {
        None
    } else {
        Some(pairs.clone())
    };
    let response = client.get(path, query).await?;
    Page::from_http_response(&response, path, pairs)
}

/// Decodes a single-invoice response body.
fn decode_invoice(body: Value) -> Result<Invoice, ResourceError> {
    let invoice =
        serde_json::from_value(body).map_err(|source| ModelError::InvalidShape {
            field: "<root>".to_string(),
            source,
        })?;
    Ok(invoice)
}
