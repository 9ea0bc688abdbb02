use async_trait::async_trait;

use crate::{
    domain::entities::{
        admin_notification::AdminNotification, payment_object::PaymentObject,
        webhook_event_kind::WebhookEventKind,
    },
    errors::NotifierError,
};

#[async_trait]
pub trait PaymentNotificationRepository: Send + Sync {
    /// Parses a verified Stripe webhook body.
    ///
    /// Returns `None` if the event type is not one that triggers a
    /// notification.
    async fn parse_webhook_event(
        &self,
        body: &str,
    ) -> Result<Option<(WebhookEventKind, PaymentObject)>, NotifierError>;

    /// Amount paid on the given invoice, in minor units.
    async fn get_invoice_amount_paid(&self, invoice_id: &str) -> Result<i64, NotifierError>;

    async fn send_notification(&self, notification: &AdminNotification)
        -> Result<(), NotifierError>;
}
