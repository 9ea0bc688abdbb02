use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;

use crate::{
    domain::entities::{payment_object::PaymentObject, webhook_event_kind::WebhookEventKind},
    errors::NotifierError,
};

#[async_trait]
pub trait WebhookHandler: Send + Sync {
    async fn handle(
        &self,
        kind: WebhookEventKind,
        object: &PaymentObject,
    ) -> Result<(), NotifierError>;
}

/// Table of webhook event kinds and the single handler bound to each.
#[derive(Default)]
pub struct WebhookDispatcher {
    handlers: HashMap<WebhookEventKind, Arc<dyn WebhookHandler>>,
}

impl WebhookDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        kind: WebhookEventKind,
        handler: Arc<dyn WebhookHandler>,
    ) -> Result<(), NotifierError> {
        if self.handlers.contains_key(&kind) {
            return Err(NotifierError::DuplicateHandler(kind));
        }
        self.handlers.insert(kind, handler);
        Ok(())
    }

    pub fn is_registered(&self, kind: WebhookEventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Runs the handler bound to `kind`. Returns `false` if there is none.
    pub async fn dispatch(
        &self,
        kind: WebhookEventKind,
        object: &PaymentObject,
    ) -> Result<bool, NotifierError> {
        match self.handlers.get(&kind) {
            Some(handler) => {
                handler.handle(kind, object).await?;
                Ok(true)
            }
            None => {
                tracing::debug!(event_type = kind.event_type(), "No handler registered");
                Ok(false)
            }
        }
    }
}
