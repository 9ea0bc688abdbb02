use std::sync::Arc;

use crate::{
    admin_email_handler::AdminEmailHandler,
    config::NotifierConfig,
    data::{
        datasources::{
            mail_datasource::SmtpMailDatasourceImpl, stripe_api_datasource::StripeApiDatasourceImpl,
            stripe_webhook_datasource::StripeWebhookDatasourceImpl,
        },
        repositories::payment_notification_repository_impl::PaymentNotificationRepositoryImpl,
    },
    dispatch::WebhookDispatcher,
    domain::{
        entities::{payment_object::PaymentObject, webhook_event_kind::WebhookEventKind},
        repositories::payment_notification_repository::PaymentNotificationRepository,
    },
    errors::NotifierError,
    secrets::NotifierSecrets,
};

pub struct PaymentNotificationUtil<R: PaymentNotificationRepository> {
    repository: Arc<R>,
    dispatcher: WebhookDispatcher,
}

impl<R: PaymentNotificationRepository + 'static> PaymentNotificationUtil<R> {
    /// Binds the admin email handler to every event kind.
    pub fn with_repository(repository: R, config: &NotifierConfig) -> Result<Self, NotifierError> {
        let repository = Arc::new(repository);
        let handler = Arc::new(AdminEmailHandler::new(
            repository.clone(),
            &config.admin_email,
            config.currency.clone(),
        ));
        let mut dispatcher = WebhookDispatcher::new();
        dispatcher.register(WebhookEventKind::SubscriptionCreated, handler.clone())?;
        dispatcher.register(WebhookEventKind::PaymentIntentSucceeded, handler)?;
        Ok(Self {
            repository,
            dispatcher,
        })
    }

    /// Handles a Stripe webhook body whose signature has already been
    /// verified. Returns `false` if the event does not trigger a notification.
    pub async fn handle_webhook(&self, body: &str) -> Result<bool, NotifierError> {
        match self.repository.parse_webhook_event(body).await? {
            Some((kind, object)) => self.notify(kind, &object).await,
            None => {
                tracing::debug!("Ignoring webhook event without notification");
                Ok(false)
            }
        }
    }

    /// Handles an already parsed event.
    pub async fn notify(
        &self,
        kind: WebhookEventKind,
        object: &PaymentObject,
    ) -> Result<bool, NotifierError> {
        self.dispatcher.dispatch(kind, object).await
    }
}

impl
    PaymentNotificationUtil<
        PaymentNotificationRepositoryImpl<
            StripeApiDatasourceImpl,
            StripeWebhookDatasourceImpl,
            SmtpMailDatasourceImpl,
        >,
    >
{
    pub fn new(config: NotifierConfig, secrets: NotifierSecrets) -> Result<Self, NotifierError> {
        let repository = PaymentNotificationRepositoryImpl::new(
            &config.stripe_api_base_url,
            &secrets.stripe_secret_key,
            config.http_timeout,
            &config.smtp_host,
            config.smtp_port,
            config.smtp_tls,
            secrets.smtp_credentials(),
            &config.mail_from,
        )?;
        Self::with_repository(repository, &config)
    }

    /// Loads configuration and secrets from the environment (and a `.env`
    /// file, if present).
    pub fn from_env() -> Result<Self, NotifierError> {
        Self::new(NotifierConfig::from_env()?, NotifierSecrets::from_env()?)
    }
}
