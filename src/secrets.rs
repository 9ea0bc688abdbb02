use crate::errors::NotifierError;

pub(crate) const STRIPE_SECRET_KEY: &str = "STRIPE_SECRET_KEY";
pub(crate) const SMTP_USERNAME: &str = "SMTP_USERNAME";
pub(crate) const SMTP_PASSWORD: &str = "SMTP_PASSWORD";

/// Credentials needed to talk to Stripe and the SMTP relay.
#[derive(Clone)]
pub struct NotifierSecrets {
    pub stripe_secret_key: String,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
}

impl std::fmt::Debug for NotifierSecrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotifierSecrets")
            .field("stripe_secret_key", &"<redacted>")
            .field("smtp_username", &self.smtp_username)
            .field("smtp_password", &self.smtp_password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl NotifierSecrets {
    pub fn from_env() -> Result<Self, NotifierError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, NotifierError> {
        Ok(Self {
            stripe_secret_key: lookup(STRIPE_SECRET_KEY)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| NotifierError::Config(format!("{STRIPE_SECRET_KEY} is not set.")))?,
            smtp_username: lookup(SMTP_USERNAME).filter(|v| !v.is_empty()),
            smtp_password: lookup(SMTP_PASSWORD).filter(|v| !v.is_empty()),
        })
    }

    /// SMTP credentials, if both username and password are set.
    pub(crate) fn smtp_credentials(&self) -> Option<(String, String)> {
        match (&self.smtp_username, &self.smtp_password) {
            (Some(username), Some(password)) => Some((username.clone(), password.clone())),
            _ => None,
        }
    }
}
