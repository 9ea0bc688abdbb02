#![allow(dead_code)]

use indexmap::IndexMap;
use serde::Deserialize;

use super::{common::Expandable, customer_model::CustomerModel, invoice_model::InvoiceModel};

/// https://docs.stripe.com/api/subscriptions/object
///
/// The customer has to be expanded by whoever delivers the webhook for the
/// notification to include customer details.
#[derive(Debug, Deserialize)]
pub(crate) struct SubscriptionModel {
    pub(crate) id: String,
    /// ID of the customer who owns the subscription.
    pub(crate) customer: Expandable<CustomerModel>,
    /// The most recent invoice this subscription has generated.
    pub(crate) latest_invoice: Option<Expandable<InvoiceModel>>,
    /// Set of key-value pairs attached to the object, in the order Stripe
    /// sent them.
    #[serde(default)]
    pub(crate) metadata: IndexMap<String, String>,
    /// The plan the customer is subscribed to. Only set if the subscription
    /// contains a single plan.
    pub(crate) plan: Option<PlanModel>,
    /// Possible values are `incomplete`, `incomplete_expired`, `trialing`,
    /// `active`, `past_due`, `canceled`, `unpaid`, or `paused`.
    pub(crate) status: String,
}

/// https://docs.stripe.com/api/plans/object
#[derive(Debug, Deserialize)]
pub(crate) struct PlanModel {
    pub(crate) id: String,
    /// A brief description of the plan, hidden from customers.
    pub(crate) nickname: Option<String>,
    /// The unit amount in cents to be charged. Null for tiered plans.
    pub(crate) amount: Option<i64>,
    pub(crate) currency: String,
}
