use std::{str::FromStr, time::Duration};

use crate::{
    constants::STRIPE_API_BASE_URL, domain::entities::currency::CurrencyFormatter,
    errors::NotifierError,
};

/// Non-secret settings. Loaded from `NOTIFIER_*` environment variables.
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Recipient of every notification.
    pub admin_email: String,
    pub mail_from: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_tls: bool,
    pub currency: CurrencyFormatter,
    pub stripe_api_base_url: String,
    pub http_timeout: Duration,
}

impl NotifierConfig {
    pub fn from_env() -> Result<Self, NotifierError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, NotifierError> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| NotifierError::Config(format!("{key} is not set.")))
        };
        let optional = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };

        let defaults = CurrencyFormatter::default();
        Ok(Self {
            admin_email: required("NOTIFIER_ADMIN_EMAIL")?,
            mail_from: required("NOTIFIER_MAIL_FROM")?,
            smtp_host: required("NOTIFIER_SMTP_HOST")?,
            smtp_port: parse("NOTIFIER_SMTP_PORT", &optional("NOTIFIER_SMTP_PORT", "587"))?,
            smtp_tls: parse("NOTIFIER_SMTP_TLS", &optional("NOTIFIER_SMTP_TLS", "true"))?,
            currency: CurrencyFormatter {
                currency: optional("NOTIFIER_CURRENCY", &defaults.currency).to_lowercase(),
                symbol: optional("NOTIFIER_CURRENCY_SYMBOL", &defaults.symbol),
                position: optional("NOTIFIER_CURRENCY_POSITION", "left").parse()?,
                // Set but empty disables grouping.
                thousands_separator: lookup("NOTIFIER_THOUSANDS_SEPARATOR")
                    .unwrap_or(defaults.thousands_separator),
                decimal_separator: optional(
                    "NOTIFIER_DECIMAL_SEPARATOR",
                    &defaults.decimal_separator,
                ),
            },
            stripe_api_base_url: optional("NOTIFIER_STRIPE_API_BASE_URL", STRIPE_API_BASE_URL),
            http_timeout: Duration::from_secs(parse(
                "NOTIFIER_HTTP_TIMEOUT_SECS",
                &optional("NOTIFIER_HTTP_TIMEOUT_SECS", "10"),
            )?),
        })
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, NotifierError>
where
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| NotifierError::Config(format!("{key} has invalid value '{value}': {e}")))
}
