use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;

use crate::{
    data::models::stripe_api::{customer_model::CustomerModel, invoice_model::InvoiceModel},
    errors::NotifierError,
};

#[async_trait]
pub(crate) trait StripeApiDatasource: Send + Sync {
    /// Retrieve an invoice:
    /// https://docs.stripe.com/api/invoices/retrieve
    ///
    /// invoice_id:
    ///   The identifier of the invoice to be retrieved.
    async fn retrieve_invoice(&self, invoice_id: &str) -> Result<InvoiceModel, NotifierError>;

    /// Retrieve a customer:
    /// https://docs.stripe.com/api/customers/retrieve
    ///
    /// customer_id:
    ///   The identifier of the customer to be retrieved.
    async fn retrieve_customer(&self, customer_id: &str) -> Result<CustomerModel, NotifierError>;
}

pub(crate) struct StripeApiDatasourceImpl {
    client: reqwest::Client,
    base_url: String,
    secret_key: String,
}

#[async_trait]
impl StripeApiDatasource for StripeApiDatasourceImpl {
    async fn retrieve_invoice(&self, invoice_id: &str) -> Result<InvoiceModel, NotifierError> {
        let url = format!("{}/v1/invoices/{invoice_id}", self.base_url);
        self.callout(&url, "RetrieveInvoice").await
    }

    async fn retrieve_customer(&self, customer_id: &str) -> Result<CustomerModel, NotifierError> {
        let url = format!("{}/v1/customers/{customer_id}", self.base_url);
        self.callout(&url, "RetrieveCustomer").await
    }
}

impl StripeApiDatasourceImpl {
    pub(crate) fn new(
        base_url: &str,
        secret_key: &str,
        timeout: Duration,
    ) -> Result<Self, NotifierError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotifierError::stripe_api("Failed to build HTTP client.", e))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            secret_key: secret_key.to_owned(),
        })
    }

    async fn callout<T: DeserializeOwned>(
        &self,
        url: &str,
        function_name: &str,
    ) -> Result<T, NotifierError> {
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.secret_key))
            .send()
            .await
            .map_err(|e| {
                NotifierError::stripe_api(
                    "Callout failed to send.",
                    format!("{}; {:?}", function_name, e),
                )
            })?;

        if !response.status().is_success() {
            return Err(NotifierError::stripe_api(
                "Callout returned with non-200 status code.",
                format!(
                    "{}; {}; {}",
                    function_name,
                    response.status(),
                    response.text().await.unwrap_or_default()
                ),
            ));
        }

        response.json().await.map_err(|e| {
            NotifierError::stripe_api(
                "Failed to parse callout response.",
                format!("{}; {:?}", function_name, e),
            )
        })
    }
}
