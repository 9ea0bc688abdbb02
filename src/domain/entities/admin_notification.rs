use crate::{
    constants::{INTERNAL_METADATA_KEYS, NEW_PAYMENT_SUBJECT, NEW_SUBSCRIPTION_SUBJECT},
    errors::NotifierError,
};

use super::{currency::CurrencyFormatter, payment_object::PaymentObject};

/// Plain-text email informing the site admin of a new payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminNotification {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl AdminNotification {
    /// The customer's email is the one line every body must carry.
    pub(crate) fn check_customer_email(object: &PaymentObject) -> Result<(), NotifierError> {
        if object.customer().email.is_empty() {
            return Err(NotifierError::invalid_payload("Customer has no email address."));
        }
        Ok(())
    }

    /// Builds the notification for a payment object whose amount (in minor
    /// units) has already been resolved.
    pub fn compose(
        to: &str,
        object: &PaymentObject,
        amount: i64,
        currency: &CurrencyFormatter,
    ) -> Result<Self, NotifierError> {
        Self::check_customer_email(object)?;
        let customer = object.customer();

        let formatted_amount = currency.format_minor(amount);
        let (subject, mut body) = match object {
            PaymentObject::Subscription(s) => (
                NEW_SUBSCRIPTION_SUBJECT,
                format!(
                    "A new {} payment to start a subscription of {} was just received.\n\n",
                    formatted_amount, s.plan.name
                ),
            ),
            PaymentObject::PaymentIntent(p) => (
                NEW_PAYMENT_SUBJECT,
                format!(
                    "A new {} payment for {} was just received.\n\n",
                    formatted_amount, p.description
                ),
            ),
        };

        if !customer.name.is_empty() {
            body.push_str(&format!("{}\n", customer.name));
        }
        body.push_str(&format!("{}\n", customer.email));
        if !customer.phone.is_empty() {
            body.push_str(&format!("{}\n", customer.phone));
        }

        // Rendered whenever the address exists, even if some of its fields are
        // empty.
        if let Some(address) = &customer.address {
            body.push('\n');
            body.push_str(&format!("{} {}\n", address.line1, address.line2));
            body.push_str(&format!(
                "{}, {} {} {}",
                address.city, address.state, address.postal_code, address.country
            ));
            body.push('\n');
        }

        body.push_str("\nAdditional:\n");
        for (key, value) in object
            .metadata()
            .iter()
            .filter(|(key, _)| !INTERNAL_METADATA_KEYS.contains(&key.as_str()))
        {
            body.push_str(&format!("{}: {}\n", key, value));
        }

        Ok(Self {
            to: to.to_owned(),
            subject: subject.to_owned(),
            body,
        })
    }
}
