#![allow(dead_code)]

use serde::Deserialize;

/// https://docs.stripe.com/api/invoices/object
#[derive(Debug, Deserialize)]
pub(crate) struct InvoiceModel {
    pub(crate) id: String,
    /// The amount, in cents, that was paid.
    pub(crate) amount_paid: i64,
    /// Final amount due at this time for this invoice.
    pub(crate) amount_due: i64,
    /// Three-letter ISO currency code, in lowercase.
    pub(crate) currency: String,
    /// One of `draft`, `open`, `paid`, `uncollectible`, or `void`.
    pub(crate) status: Option<String>,
}
