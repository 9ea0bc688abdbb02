#![allow(dead_code)]

use serde::Deserialize;
use serde_with::{serde_as, DefaultOnNull};

/// Stripe Customer object. Only the fields relevant to notifications are
/// modelled.
///
/// https://docs.stripe.com/api/customers/object
#[serde_as]
#[derive(Debug, Deserialize)]
pub(crate) struct CustomerModel {
    /// Unique identifier for the object.
    pub(crate) id: String,
    /// The customer's full name or business name.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub(crate) name: String,
    /// The customer's email address.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub(crate) email: String,
    /// The customer's phone number.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub(crate) phone: String,
    /// The customer's address.
    #[serde(default)]
    pub(crate) address: Option<AddressModel>,
}

/// https://docs.stripe.com/api/customers/object#customer_object-address
#[derive(Debug, Deserialize)]
pub(crate) struct AddressModel {
    /// City, district, suburb, town, or village.
    pub(crate) city: Option<String>,
    /// Two-letter country code (ISO 3166-1 alpha-2).
    pub(crate) country: Option<String>,
    /// Address line 1 (e.g., street, PO Box, or company name).
    pub(crate) line1: Option<String>,
    /// Address line 2 (e.g., apartment, suite, unit, or building).
    pub(crate) line2: Option<String>,
    /// ZIP or postal code.
    pub(crate) postal_code: Option<String>,
    /// State, county, province, or region.
    pub(crate) state: Option<String>,
}
