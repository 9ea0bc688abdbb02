pub(crate) const STRIPE_API_BASE_URL: &str = "https://api.stripe.com";

pub(crate) const SUBSCRIPTION_CREATED_EVENT_TYPE: &str = "customer.subscription.created";
pub(crate) const PAYMENT_INTENT_SUCCEEDED_EVENT_TYPE: &str = "payment_intent.succeeded";

pub(crate) const NEW_SUBSCRIPTION_SUBJECT: &str = "New Subscription";
pub(crate) const NEW_PAYMENT_SUBJECT: &str = "New Payment";

/// Metadata keys written by the payment form itself. They carry no meaning
/// for the site admin and are left out of the notification.
pub(crate) const INTERNAL_METADATA_KEYS: [&str; 4] = [
    "simpay_form_id",
    "simpay_subscription_key",
    "simpay_charge_max",
    "simpay_charge_count",
];

/// Currencies Stripe expresses without a fractional minor unit:
/// https://docs.stripe.com/currencies#zero-decimal
pub(crate) const ZERO_DECIMAL_CURRENCIES: [&str; 16] = [
    "bif", "clp", "djf", "gnf", "jpy", "kmf", "krw", "mga", "pyg", "rwf", "ugx", "vnd", "vuv",
    "xaf", "xof", "xpf",
];
