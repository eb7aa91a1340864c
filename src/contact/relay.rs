use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config;
use super::form::ContactForm;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
}

impl RelayConfig {
    pub const fn from_build_env() -> Self {
        Self {
            service_id: config::EMAILJS_SERVICE_ID,
            template_id: config::EMAILJS_TEMPLATE_ID,
            public_key: config::EMAILJS_PUBLIC_KEY,
        }
    }

    /// True when any identifier was left at its documented placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.service_id == config::SERVICE_ID_PLACEHOLDER
            || self.template_id == config::TEMPLATE_ID_PLACEHOLDER
            || self.public_key == config::PUBLIC_KEY_PLACEHOLDER
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    /// Relay not configured; nothing left the browser.
    Demo,
}

impl Delivery {
    pub fn toast_message(self) -> &'static str {
        match self {
            Delivery::Sent => "Message sent successfully!",
            Delivery::Demo => "Message sent successfully! (Demo mode - configure EmailJS for production)",
        }
    }
}

pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("email relay unreachable: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("email relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Serialize, Debug, PartialEq)]
pub struct TemplateParams<'a> {
    pub from_name: &'a str,
    pub from_email: &'a str,
    pub message: &'a str,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: TemplateParams<'a>,
}

impl<'a> SendRequest<'a> {
    pub fn new(relay: &'a RelayConfig, form: &'a ContactForm) -> Self {
        Self {
            service_id: relay.service_id,
            template_id: relay.template_id,
            user_id: relay.public_key,
            template_params: TemplateParams {
                from_name: &form.name,
                from_email: &form.email,
                message: &form.message,
            },
        }
    }
}

/// Sends the message through EmailJS, or short-circuits to `Delivery::Demo`
/// when the relay is not configured.
pub async fn deliver(relay: &RelayConfig, form: &ContactForm) -> Result<Delivery, RelayError> {
    if relay.is_placeholder() {
        log::warn!("EmailJS identifiers are placeholders, contact form is in demo mode");
        return Ok(Delivery::Demo);
    }

    let response = Request::post(config::EMAILJS_ENDPOINT)
        .json(&SendRequest::new(relay, form))?
        .send()
        .await?;

    if response.ok() {
        Ok(Delivery::Sent)
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(RelayError::Rejected { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const CONFIGURED: RelayConfig = RelayConfig {
        service_id: "service_abc",
        template_id: "template_def",
        public_key: "pk_123",
    };

    #[test]
    fn any_placeholder_selects_demo_mode() {
        assert!(!CONFIGURED.is_placeholder());
        let partial = [
            RelayConfig { service_id: config::SERVICE_ID_PLACEHOLDER, ..CONFIGURED },
            RelayConfig { template_id: config::TEMPLATE_ID_PLACEHOLDER, ..CONFIGURED },
            RelayConfig { public_key: config::PUBLIC_KEY_PLACEHOLDER, ..CONFIGURED },
        ];
        for relay in partial {
            assert!(relay.is_placeholder(), "{:?}", relay);
        }
    }

    #[test]
    fn unset_build_env_falls_back_to_placeholders() {
        let relay = RelayConfig::from_build_env();
        if option_env!("EMAILJS_SERVICE_ID").is_none() {
            assert_eq!(relay.service_id, config::SERVICE_ID_PLACEHOLDER);
            assert!(relay.is_placeholder());
        }
    }

    #[test]
    fn payload_matches_emailjs_send_api() {
        let form = ContactForm {
            name: "Ada".into(),
            email: "ada@lovelace.dev".into(),
            message: "Let's build an engine".into(),
        };
        let body = serde_json::to_value(SendRequest::new(&CONFIGURED, &form)).unwrap();
        assert_eq!(
            body,
            json!({
                "service_id": "service_abc",
                "template_id": "template_def",
                "user_id": "pk_123",
                "template_params": {
                    "from_name": "Ada",
                    "from_email": "ada@lovelace.dev",
                    "message": "Let's build an engine"
                }
            })
        );
    }

    #[test]
    fn placeholder_relay_resolves_without_network() {
        let relay = RelayConfig { public_key: config::PUBLIC_KEY_PLACEHOLDER, ..CONFIGURED };
        let form = ContactForm {
            name: "Ada".into(),
            email: "ada@lovelace.dev".into(),
            message: "Let's build an engine".into(),
        };
        let outcome = futures::executor::block_on(deliver(&relay, &form));
        assert!(matches!(outcome, Ok(Delivery::Demo)));
    }

    #[test]
    fn demo_toast_mentions_demo_mode() {
        assert!(Delivery::Demo.toast_message().contains("Demo mode"));
        assert!(!Delivery::Sent.toast_message().contains("Demo"));
    }
}
