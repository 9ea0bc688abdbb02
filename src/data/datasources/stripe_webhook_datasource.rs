use crate::{
    data::models::stripe_webhooks::event_model::{EventModel, EventObjectModel},
    errors::NotifierError,
};

pub(crate) trait StripeWebhookDatasource: Send + Sync {
    /// Parse Stripe webhook event:
    /// https://docs.stripe.com/webhooks
    ///
    /// body:
    ///   The raw POST body of the event. Its signature must already have been
    ///   verified.
    ///
    /// The event object is only decoded if it is a subscription or payment
    /// intent; for any other object type `None` is returned alongside the
    /// event.
    fn parse_event(
        &self,
        body: &str,
    ) -> Result<(EventModel, Option<EventObjectModel>), NotifierError>;
}

pub(crate) struct StripeWebhookDatasourceImpl;

impl StripeWebhookDatasource for StripeWebhookDatasourceImpl {
    fn parse_event(
        &self,
        body: &str,
    ) -> Result<(EventModel, Option<EventObjectModel>), NotifierError> {
        let event: EventModel = serde_json::from_str(body)
            .map_err(|e| NotifierError::webhook_parse("Failed to parse event envelope.", e))?;
        let object_type = event
            .data
            .object
            .get("object")
            .and_then(serde_json::Value::as_str);
        let object = match object_type {
            Some(t) if EventObjectModel::OBJECT_TYPES.contains(&t) => Some(
                serde_json::from_value(event.data.object.clone()).map_err(|e| {
                    NotifierError::webhook_parse(
                        "Failed to parse event object.",
                        format!("{}; {}; {:?}", event.id, t, e),
                    )
                })?,
            ),
            _ => None,
        };
        Ok((event, object))
    }
}

impl StripeWebhookDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}
