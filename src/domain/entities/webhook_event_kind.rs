use crate::constants::{PAYMENT_INTENT_SUCCEEDED_EVENT_TYPE, SUBSCRIPTION_CREATED_EVENT_TYPE};

/// Stripe webhook events that result in an admin notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WebhookEventKind {
    /// `customer.subscription.created`
    SubscriptionCreated,
    /// `payment_intent.succeeded`
    PaymentIntentSucceeded,
}

impl WebhookEventKind {
    /// Maps a Stripe event type to a kind. Returns `None` for event types that
    /// are not handled.
    pub fn from_event_type(event_type: &str) -> Option<Self> {
        match event_type {
            SUBSCRIPTION_CREATED_EVENT_TYPE => Some(Self::SubscriptionCreated),
            PAYMENT_INTENT_SUCCEEDED_EVENT_TYPE => Some(Self::PaymentIntentSucceeded),
            _ => None,
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            Self::SubscriptionCreated => SUBSCRIPTION_CREATED_EVENT_TYPE,
            Self::PaymentIntentSucceeded => PAYMENT_INTENT_SUCCEEDED_EVENT_TYPE,
        }
    }
}
