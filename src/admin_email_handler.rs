use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    dispatch::WebhookHandler,
    domain::{
        entities::{
            admin_notification::AdminNotification,
            currency::CurrencyFormatter,
            payment_object::{LatestInvoice, PaymentObject, SubscriptionDetails},
            webhook_event_kind::WebhookEventKind,
        },
        repositories::payment_notification_repository::PaymentNotificationRepository,
    },
    errors::NotifierError,
};

/// Emails the site admin a summary of each new subscription or payment.
pub struct AdminEmailHandler<R: PaymentNotificationRepository> {
    repository: Arc<R>,
    admin_email: String,
    currency: CurrencyFormatter,
}

#[async_trait]
impl<R: PaymentNotificationRepository> WebhookHandler for AdminEmailHandler<R> {
    async fn handle(
        &self,
        kind: WebhookEventKind,
        object: &PaymentObject,
    ) -> Result<(), NotifierError> {
        if !object.matches(kind) {
            return Err(NotifierError::invalid_payload(format!(
                "{} event does not carry a matching object.",
                kind.event_type()
            )));
        }
        AdminNotification::check_customer_email(object)?;
        let amount = self.resolve_amount(object).await?;
        let notification =
            AdminNotification::compose(&self.admin_email, object, amount, &self.currency)?;

        match self.repository.send_notification(&notification).await {
            Ok(()) => tracing::info!(
                event_type = kind.event_type(),
                subject = %notification.subject,
                "Admin notification sent"
            ),
            Err(e) => tracing::error!(
                event_type = kind.event_type(),
                subject = %notification.subject,
                error = %e,
                "Failed to send admin notification"
            ),
        }
        Ok(())
    }
}

impl<R: PaymentNotificationRepository> AdminEmailHandler<R> {
    pub fn new(repository: Arc<R>, admin_email: &str, currency: CurrencyFormatter) -> Self {
        Self {
            repository,
            admin_email: admin_email.to_owned(),
            currency,
        }
    }

    /// Amount to report, in minor units.
    async fn resolve_amount(&self, object: &PaymentObject) -> Result<i64, NotifierError> {
        match object {
            PaymentObject::Subscription(s) => self.resolve_subscription_amount(s).await,
            PaymentObject::PaymentIntent(p) => p.charges.first().copied().ok_or_else(|| {
                NotifierError::invalid_payload("Payment intent does not have any charges.")
            }),
        }
    }

    /// Prefers the amount actually paid on the latest invoice. Any failure to
    /// look it up falls back to the plan's nominal amount.
    async fn resolve_subscription_amount(
        &self,
        s: &SubscriptionDetails,
    ) -> Result<i64, NotifierError> {
        let lookup = match &s.latest_invoice {
            Some(LatestInvoice::AmountPaid(amount)) => return Ok(*amount),
            Some(LatestInvoice::Reference(invoice_id)) => {
                self.repository.get_invoice_amount_paid(invoice_id).await
            }
            None => Err(NotifierError::invalid_payload(
                "Subscription does not have a latest invoice.",
            )),
        };
        match lookup {
            Ok(amount) => Ok(amount),
            Err(e) => {
                tracing::warn!(error = %e, "Falling back to plan amount");
                s.plan.amount.ok_or_else(|| {
                    NotifierError::invalid_payload(
                        "Latest invoice unavailable and plan has no fixed amount.",
                    )
                })
            }
        }
    }
}
