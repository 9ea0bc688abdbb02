use std::time::Duration;

use async_trait::async_trait;

use crate::{
    data::{
        datasources::{
            mail_datasource::{MailDatasource, SmtpMailDatasourceImpl},
            stripe_api_datasource::{StripeApiDatasource, StripeApiDatasourceImpl},
            stripe_webhook_datasource::{StripeWebhookDatasource, StripeWebhookDatasourceImpl},
        },
        models::{
            stripe_api::{
                common::Expandable,
                customer_model::{AddressModel, CustomerModel},
                payment_intent_model::PaymentIntentModel,
                subscription_model::SubscriptionModel,
            },
            stripe_webhooks::event_model::EventObjectModel,
        },
    },
    domain::{
        entities::{
            admin_notification::AdminNotification,
            payment_object::{
                Address, Customer, LatestInvoice, PaymentIntentDetails, PaymentObject, Plan,
                SubscriptionDetails,
            },
            webhook_event_kind::WebhookEventKind,
        },
        repositories::payment_notification_repository::PaymentNotificationRepository,
    },
    errors::NotifierError,
};

pub(crate) struct PaymentNotificationRepositoryImpl<
    A: StripeApiDatasource,
    B: StripeWebhookDatasource,
    C: MailDatasource,
> {
    stripe_api_datasource: A,
    stripe_webhook_datasource: B,
    mail_datasource: C,
}

#[async_trait]
impl<A: StripeApiDatasource, B: StripeWebhookDatasource, C: MailDatasource>
    PaymentNotificationRepository for PaymentNotificationRepositoryImpl<A, B, C>
{
    async fn parse_webhook_event(
        &self,
        body: &str,
    ) -> Result<Option<(WebhookEventKind, PaymentObject)>, NotifierError> {
        let (event, object) = self.stripe_webhook_datasource.parse_event(body)?;
        tracing::debug!(
            event_id = %event.id,
            event_type = %event.event_type,
            created = %event.created,
            livemode = event.livemode,
            "Parsed webhook event"
        );
        let Some(kind) = WebhookEventKind::from_event_type(&event.event_type) else {
            return Ok(None);
        };
        let object = match object {
            Some(EventObjectModel::Subscription(m)) => {
                let customer = self.resolve_customer(&m.customer).await?;
                subscription_object(m, customer)?
            }
            Some(EventObjectModel::PaymentIntent(m)) => {
                let customer = match &m.customer {
                    Some(customer) => self.resolve_customer(customer).await?,
                    None => {
                        return Err(NotifierError::invalid_payload(format!(
                            "Payment intent {} has no customer.",
                            m.id
                        )))
                    }
                };
                payment_intent_object(m, customer)
            }
            None => {
                return Err(NotifierError::invalid_payload(format!(
                    "Event {} ({}) does not carry a subscription or payment intent.",
                    event.id, event.event_type
                )))
            }
        };
        if !object.matches(kind) {
            return Err(NotifierError::invalid_payload(format!(
                "Event {} ({}) carries the wrong kind of object.",
                event.id, event.event_type
            )));
        }
        Ok(Some((kind, object)))
    }

    async fn get_invoice_amount_paid(&self, invoice_id: &str) -> Result<i64, NotifierError> {
        Ok(self
            .stripe_api_datasource
            .retrieve_invoice(invoice_id)
            .await?
            .amount_paid)
    }

    async fn send_notification(
        &self,
        notification: &AdminNotification,
    ) -> Result<(), NotifierError> {
        self.mail_datasource
            .send_mail(&notification.to, &notification.subject, &notification.body)
            .await
    }
}

impl<A: StripeApiDatasource, B: StripeWebhookDatasource, C: MailDatasource>
    PaymentNotificationRepositoryImpl<A, B, C>
{
    pub(crate) fn from_datasources(
        stripe_api_datasource: A,
        stripe_webhook_datasource: B,
        mail_datasource: C,
    ) -> Self {
        Self {
            stripe_api_datasource,
            stripe_webhook_datasource,
            mail_datasource,
        }
    }

    /// Event payloads only carry the customer ID, so in that case the
    /// customer is retrieved from the API.
    async fn resolve_customer(
        &self,
        customer: &Expandable<CustomerModel>,
    ) -> Result<Customer, NotifierError> {
        match customer {
            Expandable::Id(id) => Ok(Customer::from(
                &self.stripe_api_datasource.retrieve_customer(id).await?,
            )),
            Expandable::Object(m) => Ok(Customer::from(m.as_ref())),
        }
    }
}

impl
    PaymentNotificationRepositoryImpl<
        StripeApiDatasourceImpl,
        StripeWebhookDatasourceImpl,
        SmtpMailDatasourceImpl,
    >
{
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        stripe_api_base_url: &str,
        stripe_secret_key: &str,
        http_timeout: Duration,
        smtp_host: &str,
        smtp_port: u16,
        smtp_tls: bool,
        smtp_credentials: Option<(String, String)>,
        mail_from: &str,
    ) -> Result<Self, NotifierError> {
        Ok(Self::from_datasources(
            StripeApiDatasourceImpl::new(stripe_api_base_url, stripe_secret_key, http_timeout)?,
            StripeWebhookDatasourceImpl::new(),
            SmtpMailDatasourceImpl::new(
                smtp_host,
                smtp_port,
                smtp_tls,
                smtp_credentials,
                mail_from,
            )?,
        ))
    }
}

fn subscription_object(
    m: SubscriptionModel,
    customer: Customer,
) -> Result<PaymentObject, NotifierError> {
    let plan = m.plan.ok_or_else(|| {
        NotifierError::invalid_payload(format!(
            "Subscription {} does not have a single plan.",
            m.id
        ))
    })?;
    Ok(PaymentObject::Subscription(SubscriptionDetails {
        plan: Plan {
            name: plan.nickname.unwrap_or_default(),
            amount: plan.amount,
        },
        latest_invoice: m.latest_invoice.map(|invoice| match invoice {
            Expandable::Id(id) => LatestInvoice::Reference(id),
            Expandable::Object(invoice) => LatestInvoice::AmountPaid(invoice.amount_paid),
        }),
        customer,
        metadata: m.metadata,
    }))
}

fn payment_intent_object(m: PaymentIntentModel, customer: Customer) -> PaymentObject {
    PaymentObject::PaymentIntent(PaymentIntentDetails {
        description: m.description.unwrap_or_default(),
        charges: m
            .charges
            .map(|list| list.data.iter().map(|charge| charge.amount).collect())
            .unwrap_or_default(),
        customer,
        metadata: m.metadata,
    })
}

impl From<&CustomerModel> for Customer {
    fn from(m: &CustomerModel) -> Self {
        Customer {
            name: m.name.clone(),
            email: m.email.clone(),
            phone: m.phone.clone(),
            address: m.address.as_ref().map(Address::from),
        }
    }
}

impl From<&AddressModel> for Address {
    fn from(m: &AddressModel) -> Self {
        Address {
            line1: m.line1.clone().unwrap_or_default(),
            line2: m.line2.clone().unwrap_or_default(),
            city: m.city.clone().unwrap_or_default(),
            state: m.state.clone().unwrap_or_default(),
            postal_code: m.postal_code.clone().unwrap_or_default(),
            country: m.country.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::data::models::stripe_api::invoice_model::InvoiceModel;

    /// Knows invoice `in_paid` and customer `cus_2`. Records customer
    /// lookups.
    #[derive(Default)]
    struct FakeStripeApi {
        customer_lookups: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl StripeApiDatasource for FakeStripeApi {
        async fn retrieve_invoice(&self, invoice_id: &str) -> Result<InvoiceModel, NotifierError> {
            match invoice_id {
                "in_paid" => Ok(InvoiceModel {
                    id: invoice_id.to_owned(),
                    amount_paid: 1200,
                    amount_due: 1200,
                    currency: "usd".to_owned(),
                    status: Some("paid".to_owned()),
                }),
                _ => Err(NotifierError::stripe_api(
                    "Callout returned with non-200 status code.",
                    "404",
                )),
            }
        }

        async fn retrieve_customer(
            &self,
            customer_id: &str,
        ) -> Result<CustomerModel, NotifierError> {
            self.customer_lookups
                .lock()
                .unwrap()
                .push(customer_id.to_owned());
            match customer_id {
                "cus_2" => Ok(CustomerModel {
                    id: customer_id.to_owned(),
                    name: "John Roe".to_owned(),
                    email: "john@y.com".to_owned(),
                    phone: "555-0199".to_owned(),
                    address: None,
                }),
                _ => Err(NotifierError::stripe_api(
                    "Callout returned with non-200 status code.",
                    "404",
                )),
            }
        }
    }

    #[derive(Default)]
    struct FakeMail {
        sent: Mutex<Vec<(String, String, String)>>,
    }

    #[async_trait]
    impl MailDatasource for FakeMail {
        async fn send_mail(
            &self,
            to: &str,
            subject: &str,
            body: &str,
        ) -> Result<(), NotifierError> {
            self.sent
                .lock()
                .unwrap()
                .push((to.to_owned(), subject.to_owned(), body.to_owned()));
            Ok(())
        }
    }

    type TestRepository =
        PaymentNotificationRepositoryImpl<FakeStripeApi, StripeWebhookDatasourceImpl, FakeMail>;

    fn repository() -> TestRepository {
        PaymentNotificationRepositoryImpl::from_datasources(
            FakeStripeApi::default(),
            StripeWebhookDatasourceImpl::new(),
            FakeMail::default(),
        )
    }

    fn event(event_type: &str, object: serde_json::Value) -> String {
        serde_json::json!({
            "id": "evt_1",
            "object": "event",
            "type": event_type,
            "created": 1700000000,
            "livemode": false,
            "data": { "object": object }
        })
        .to_string()
    }

    fn customer() -> serde_json::Value {
        serde_json::json!({
            "id": "cus_1",
            "object": "customer",
            "name": "Jane Doe",
            "email": "jane@x.com",
            "phone": null,
            "address": {
                "line1": "1 Main St",
                "line2": null,
                "city": "Springfield",
                "state": "IL",
                "postal_code": "62701",
                "country": "US"
            }
        })
    }

    fn subscription(latest_invoice: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "id": "sub_1",
            "object": "subscription",
            "customer": customer(),
            "latest_invoice": latest_invoice,
            "metadata": { "simpay_form_id": "12" },
            "plan": {
                "id": "plan_1",
                "object": "plan",
                "nickname": "Gold",
                "amount": 1000,
                "currency": "usd"
            },
            "status": "active"
        })
    }

    fn payment_intent(customer: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "id": "pi_1",
            "object": "payment_intent",
            "amount": 2500,
            "currency": "usd",
            "description": "Widget",
            "customer": customer,
            "charges": { "data": [ { "id": "ch_1", "amount": 2500, "paid": true } ] },
            "metadata": {},
            "status": "succeeded"
        })
    }

    #[tokio::test]
    async fn test_parse_subscription_event() {
        let body = event(
            "customer.subscription.created",
            subscription(serde_json::json!("in_paid")),
        );
        let repository = repository();
        let (kind, object) = repository.parse_webhook_event(&body).await.unwrap().unwrap();
        assert_eq!(kind, WebhookEventKind::SubscriptionCreated);
        let PaymentObject::Subscription(s) = object else {
            panic!("expected subscription");
        };
        assert_eq!(s.plan.name, "Gold");
        assert_eq!(s.plan.amount, Some(1000));
        assert!(matches!(
            s.latest_invoice,
            Some(LatestInvoice::Reference(ref id)) if id == "in_paid"
        ));
        let address = s.customer.address.unwrap();
        assert_eq!(address.line1, "1 Main St");
        assert_eq!(address.line2, "");
        assert!(repository
            .stripe_api_datasource
            .customer_lookups
            .lock()
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_parse_subscription_with_expanded_invoice() {
        let invoice = serde_json::json!({
            "id": "in_1",
            "object": "invoice",
            "amount_paid": 900,
            "amount_due": 900,
            "currency": "usd",
            "status": "paid"
        });
        let body = event("customer.subscription.created", subscription(invoice));
        let (_, object) = repository().parse_webhook_event(&body).await.unwrap().unwrap();
        let PaymentObject::Subscription(s) = object else {
            panic!("expected subscription");
        };
        assert!(matches!(s.latest_invoice, Some(LatestInvoice::AmountPaid(900))));
    }

    #[tokio::test]
    async fn test_unhandled_event_type() {
        let body = event(
            "customer.subscription.updated",
            subscription(serde_json::Value::Null),
        );
        assert!(repository().parse_webhook_event(&body).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_kind_and_object_mismatch() {
        let body = event("payment_intent.succeeded", subscription(serde_json::Value::Null));
        let result = repository().parse_webhook_event(&body).await;
        assert!(matches!(result, Err(NotifierError::InvalidPayload(_))));
    }

    #[tokio::test]
    async fn test_customer_id_is_retrieved() {
        let body = event("payment_intent.succeeded", payment_intent(serde_json::json!("cus_2")));
        let repository = repository();
        let (kind, object) = repository.parse_webhook_event(&body).await.unwrap().unwrap();
        assert_eq!(kind, WebhookEventKind::PaymentIntentSucceeded);
        let customer = object.customer();
        assert_eq!(customer.name, "John Roe");
        assert_eq!(customer.email, "john@y.com");
        assert_eq!(customer.phone, "555-0199");
        assert!(customer.address.is_none());
        assert_eq!(
            *repository.stripe_api_datasource.customer_lookups.lock().unwrap(),
            vec!["cus_2".to_owned()]
        );
    }

    #[tokio::test]
    async fn test_customer_retrieval_failure_is_reported() {
        let body = event("payment_intent.succeeded", payment_intent(serde_json::json!("cus_9")));
        let result = repository().parse_webhook_event(&body).await;
        assert!(matches!(result, Err(NotifierError::StripeApi { .. })));
    }

    #[tokio::test]
    async fn test_payment_intent_without_customer() {
        let body = event("payment_intent.succeeded", payment_intent(serde_json::Value::Null));
        let result = repository().parse_webhook_event(&body).await;
        assert!(matches!(result, Err(NotifierError::InvalidPayload(_))));
    }

    #[tokio::test]
    async fn test_get_invoice_amount_paid() {
        let repository = repository();
        assert_eq!(repository.get_invoice_amount_paid("in_paid").await.unwrap(), 1200);
        assert!(repository.get_invoice_amount_paid("in_missing").await.is_err());
    }

    #[tokio::test]
    async fn test_send_notification() {
        let repository = repository();
        repository
            .send_notification(&AdminNotification {
                to: "admin@site.com".to_owned(),
                subject: "New Payment".to_owned(),
                body: "body".to_owned(),
            })
            .await
            .unwrap();
        let sent = repository.mail_datasource.sent.lock().unwrap();
        assert_eq!(
            *sent,
            vec![("admin@site.com".to_owned(), "New Payment".to_owned(), "body".to_owned())]
        );
    }
}
