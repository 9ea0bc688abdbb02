#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_with::{serde_as, TimestampSeconds};

use crate::data::models::stripe_api::{
    payment_intent_model::PaymentIntentModel, subscription_model::SubscriptionModel,
};

/// Envelope of every Stripe webhook delivery.
///
/// https://docs.stripe.com/api/events/object
#[serde_as]
#[derive(Debug, Deserialize)]
pub(crate) struct EventModel {
    pub(crate) id: String,
    /// Description of the event (e.g., `invoice.created` or `charge.refunded`).
    #[serde(rename = "type")]
    pub(crate) event_type: String,
    /// Time at which the object was created.
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub(crate) created: DateTime<Utc>,
    /// Whether the event happened in live mode or test mode.
    pub(crate) livemode: bool,
    pub(crate) data: EventDataModel,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EventDataModel {
    /// Object containing the API resource relevant to the event. Its shape
    /// depends on the `object` field.
    pub(crate) object: serde_json::Value,
}

/// The event objects a notification can be built from, discriminated by the
/// `object` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "object", rename_all = "snake_case")]
pub(crate) enum EventObjectModel {
    Subscription(SubscriptionModel),
    PaymentIntent(PaymentIntentModel),
}

impl EventObjectModel {
    pub(crate) const OBJECT_TYPES: [&'static str; 2] = ["subscription", "payment_intent"];
}
