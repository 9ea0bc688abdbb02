pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod mail_datasource;
        pub(crate) mod stripe_api_datasource;
        pub(crate) mod stripe_webhook_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod stripe_api {
            pub(crate) mod common;
            pub(crate) mod customer_model;
            pub(crate) mod invoice_model;
            pub(crate) mod payment_intent_model;
            pub(crate) mod subscription_model;
        }
        pub(crate) mod stripe_webhooks {
            pub(crate) mod event_model;
        }
    }
    pub(crate) mod repositories {
        pub(crate) mod payment_notification_repository_impl;
    }
}

pub mod domain {
    pub mod entities {
        pub mod admin_notification;
        pub mod currency;
        pub mod payment_object;
        pub mod webhook_event_kind;
    }
    pub mod repositories {
        pub mod payment_notification_repository;
    }
}

pub mod admin_email_handler;
pub mod config;
pub(crate) mod constants;
pub mod dispatch;
pub mod errors;
pub mod secrets;
pub mod util;
