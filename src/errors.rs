use thiserror::Error;

use crate::domain::entities::webhook_event_kind::WebhookEventKind;

#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Error calling out to Stripe API: {message} ({debug})")]
    StripeApi { message: String, debug: String },

    #[error("Failed to parse Stripe webhook event: {message} ({debug})")]
    WebhookParse { message: String, debug: String },

    #[error("Webhook payload cannot be used for a notification: {0}")]
    InvalidPayload(String),

    #[error("Failed to send notification email: {0}")]
    Mail(String),

    #[error("A handler is already registered for {0:?}.")]
    DuplicateHandler(WebhookEventKind),
}

impl NotifierError {
    pub(crate) fn stripe_api(message: &str, debug: impl std::fmt::Display) -> Self {
        Self::StripeApi {
            message: message.to_owned(),
            debug: debug.to_string(),
        }
    }

    pub(crate) fn webhook_parse(message: &str, debug: impl std::fmt::Display) -> Self {
        Self::WebhookParse {
            message: message.to_owned(),
            debug: debug.to_string(),
        }
    }

    pub(crate) fn invalid_payload(message: impl Into<String>) -> Self {
        Self::InvalidPayload(message.into())
    }
}
