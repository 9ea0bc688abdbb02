#![allow(dead_code)]

use indexmap::IndexMap;
use serde::Deserialize;

use super::{common::Expandable, customer_model::CustomerModel};

/// https://docs.stripe.com/api/payment_intents/object
#[derive(Debug, Deserialize)]
pub(crate) struct PaymentIntentModel {
    pub(crate) id: String,
    /// Amount intended to be collected by this PaymentIntent, in the smallest
    /// currency unit.
    pub(crate) amount: i64,
    pub(crate) currency: String,
    /// An arbitrary string attached to the object.
    pub(crate) description: Option<String>,
    /// ID of the Customer this PaymentIntent belongs to, if one exists.
    pub(crate) customer: Option<Expandable<CustomerModel>>,
    /// Charges created by this PaymentIntent, most recent first. Only
    /// included by API versions up to 2022-08-01.
    pub(crate) charges: Option<ChargeListModel>,
    #[serde(default)]
    pub(crate) metadata: IndexMap<String, String>,
    pub(crate) status: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChargeListModel {
    pub(crate) data: Vec<ChargeModel>,
}

/// https://docs.stripe.com/api/charges/object
#[derive(Debug, Deserialize)]
pub(crate) struct ChargeModel {
    pub(crate) id: String,
    /// Amount intended to be collected by this payment, in the smallest
    /// currency unit.
    pub(crate) amount: i64,
    pub(crate) paid: bool,
}
