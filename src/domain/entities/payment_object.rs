use indexmap::IndexMap;

use super::webhook_event_kind::WebhookEventKind;

/// Payment platform object attached to a webhook event. The variant is decided
/// once, when the webhook payload is parsed.
#[derive(Debug, Clone)]
pub enum PaymentObject {
    Subscription(SubscriptionDetails),
    PaymentIntent(PaymentIntentDetails),
}

#[derive(Debug, Clone)]
pub struct SubscriptionDetails {
    pub plan: Plan,
    pub latest_invoice: Option<LatestInvoice>,
    pub customer: Customer,
    pub metadata: IndexMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct Plan {
    /// Display name of the plan. Empty if the plan has no nickname.
    pub name: String,
    /// Nominal amount per period, in minor units. `None` for plans without a
    /// flat price (for example tiered pricing).
    pub amount: Option<i64>,
}

#[derive(Debug, Clone)]
pub enum LatestInvoice {
    /// Invoice ID, the invoice has to be retrieved.
    Reference(String),
    /// Invoice was expanded in the payload; holds its paid amount in minor
    /// units.
    AmountPaid(i64),
}

#[derive(Debug, Clone)]
pub struct PaymentIntentDetails {
    pub description: String,
    /// Charge amounts in minor units, in the order Stripe lists them.
    pub charges: Vec<i64>,
    pub customer: Customer,
    pub metadata: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<Address>,
}

#[derive(Debug, Clone, Default)]
pub struct Address {
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl PaymentObject {
    pub fn customer(&self) -> &Customer {
        match self {
            Self::Subscription(s) => &s.customer,
            Self::PaymentIntent(p) => &p.customer,
        }
    }

    pub fn metadata(&self) -> &IndexMap<String, String> {
        match self {
            Self::Subscription(s) => &s.metadata,
            Self::PaymentIntent(p) => &p.metadata,
        }
    }

    /// Whether this object is the one Stripe attaches to events of the given
    /// kind.
    pub fn matches(&self, kind: WebhookEventKind) -> bool {
        matches!(
            (self, kind),
            (Self::Subscription(_), WebhookEventKind::SubscriptionCreated)
                | (Self::PaymentIntent(_), WebhookEventKind::PaymentIntentSucceeded)
        )
    }
}
