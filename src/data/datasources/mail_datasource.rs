use async_trait::async_trait;
use lettre::{
    message::header::ContentType, transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::errors::NotifierError;

#[async_trait]
pub(crate) trait MailDatasource: Send + Sync {
    /// Sends a plain-text email.
    async fn send_mail(&self, to: &str, subject: &str, body: &str) -> Result<(), NotifierError>;
}

pub(crate) struct SmtpMailDatasourceImpl {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

#[async_trait]
impl MailDatasource for SmtpMailDatasourceImpl {
    async fn send_mail(&self, to: &str, subject: &str, body: &str) -> Result<(), NotifierError> {
        let message = Message::builder()
            .from(self.from_address.parse().map_err(|e| {
                NotifierError::Mail(format!("Invalid sender address: {e}"))
            })?)
            .to(to
                .parse()
                .map_err(|e| NotifierError::Mail(format!("Invalid recipient address: {e}")))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_owned())
            .map_err(|e| NotifierError::Mail(format!("Failed to build message: {e}")))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| NotifierError::Mail(format!("SMTP delivery failed: {e}")))?;
        Ok(())
    }
}

impl SmtpMailDatasourceImpl {
    /// With `tls` set, connects to the relay using STARTTLS. Otherwise
    /// connects without encryption, which is only suitable for local relays
    /// such as Mailpit.
    pub(crate) fn new(
        host: &str,
        port: u16,
        tls: bool,
        credentials: Option<(String, String)>,
        from_address: &str,
    ) -> Result<Self, NotifierError> {
        let mut builder = if tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
                .map_err(|e| NotifierError::Mail(format!("Invalid SMTP relay: {e}")))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
        };
        builder = builder.port(port);
        if let Some((username, password)) = credentials {
            builder = builder.credentials(Credentials::new(username, password));
        }
        Ok(Self {
            transport: builder.build(),
            from_address: from_address.to_owned(),
        })
    }
}
