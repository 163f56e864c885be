use gloo_net::http::Request;
use log::{debug, info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::config::EmailConfig;
use crate::email::templates::{contact_params, quote_params, TemplateParams};
use crate::forms::contact::ContactRequest;
use crate::forms::quote::QuoteRequest;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("failed to encode email request: {0}")]
    Encode(String),
    #[error("network error while sending email: {0}")]
    Network(String),
    #[error("email provider rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Body of the EmailJS `email/send` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendRequest {
    pub service_id: String,
    pub template_id: String,
    /// EmailJS calls the public key `user_id`.
    pub user_id: String,
    pub template_params: TemplateParams,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Sent,
    /// No credentials configured; nothing left the browser.
    Demo,
}

#[allow(async_fn_in_trait)]
pub trait EmailTransport {
    async fn send(&self, request: &SendRequest) -> Result<(), DispatchError>;
}

/// Posts to the EmailJS REST endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTransport {
    url: String,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl EmailTransport for HttpTransport {
    async fn send(&self, request: &SendRequest) -> Result<(), DispatchError> {
        let response = Request::post(&self.url)
            .json(request)
            .map_err(|e| DispatchError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| DispatchError::Network(e.to_string()))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(DispatchError::Rejected {
                status: response.status(),
                body,
            });
        }
        Ok(())
    }
}

pub struct EmailClient<T> {
    config: EmailConfig,
    transport: T,
}

impl EmailClient<HttpTransport> {
    pub fn http(config: EmailConfig) -> Self {
        let transport = HttpTransport::new(config.send_url.clone());
        Self::new(config, transport)
    }
}

impl<T: EmailTransport> EmailClient<T> {
    pub fn new(config: EmailConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub async fn send_contact(&self, request: &ContactRequest) -> Result<DispatchOutcome, DispatchError> {
        let params = contact_params(request, &self.config.recipient);
        self.dispatch("contact", &self.config.contact_template_id, params).await
    }

    pub async fn send_quote(&self, request: &QuoteRequest) -> Result<DispatchOutcome, DispatchError> {
        let params = quote_params(request, &self.config.recipient);
        self.dispatch("quote", &self.config.quote_template_id, params).await
    }

    async fn dispatch(
        &self,
        form: &str,
        template_id: &str,
        template_params: TemplateParams,
    ) -> Result<DispatchOutcome, DispatchError> {
        let Some(public_key) = self.config.usable_public_key() else {
            warn!(
                "EmailJS not configured, {} form would be sent to {}",
                form, self.config.recipient
            );
            match serde_json::to_string_pretty(&template_params) {
                Ok(payload) => warn!("Data: {}", payload),
                Err(e) => warn!("Data could not be serialized: {}", e),
            }
            return Ok(DispatchOutcome::Demo);
        };

        let request = SendRequest {
            service_id: self.config.service_id.clone(),
            template_id: template_id.to_string(),
            user_id: public_key.to_string(),
            template_params,
        };
        debug!("Sending {} form with template {}", form, template_id);
        self.transport.send(&request).await?;
        info!("{} form sent", form);
        Ok(DispatchOutcome::Sent)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;
    use crate::config::{DEFAULT_CONTACT_EMAIL, EMAILJS_SEND_URL, PLACEHOLDER_PUBLIC_KEY};
    use crate::email::templates::NOT_SPECIFIED;
    use crate::forms::quote::QuoteDraft;

    #[derive(Default)]
    struct RecordingTransport {
        sent: RefCell<Vec<SendRequest>>,
        fail_with: Option<DispatchError>,
    }

    impl EmailTransport for RecordingTransport {
        async fn send(&self, request: &SendRequest) -> Result<(), DispatchError> {
            self.sent.borrow_mut().push(request.clone());
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    fn config(public_key: Option<&str>) -> EmailConfig {
        EmailConfig {
            service_id: "service_pampa".to_string(),
            contact_template_id: "template_contact".to_string(),
            quote_template_id: "template_quote".to_string(),
            public_key: public_key.map(str::to_string),
            recipient: DEFAULT_CONTACT_EMAIL.to_string(),
            send_url: EMAILJS_SEND_URL.to_string(),
        }
    }

    fn quote_request() -> QuoteRequest {
        QuoteDraft {
            first_name: "Ana".to_string(),
            last_name: "Gómez".to_string(),
            email: "a@b.com".to_string(),
            phone: "555".to_string(),
            accepts_terms: true,
            ..QuoteDraft::with_project_type("Desarrollo a medida")
        }
        .validate()
        .unwrap()
    }

    fn contact_request() -> ContactRequest {
        ContactRequest {
            first_name: "Ana".to_string(),
            last_name: "Gómez".to_string(),
            email: "a@b.com".to_string(),
            phone: "555".to_string(),
            address: None,
            postal_code: None,
            industry: None,
            city: None,
            state_province: None,
            country: None,
        }
    }

    #[test]
    fn demo_mode_never_touches_transport() {
        for key in [None, Some(PLACEHOLDER_PUBLIC_KEY)] {
            let client = EmailClient::new(config(key), RecordingTransport::default());
            let request = quote_request();

            assert_eq!(block_on(client.send_quote(&request)), Ok(DispatchOutcome::Demo));
            assert_eq!(block_on(client.send_quote(&request)), Ok(DispatchOutcome::Demo));
            assert_eq!(block_on(client.send_contact(&contact_request())), Ok(DispatchOutcome::Demo));
            assert!(client.transport.sent.borrow().is_empty());
        }
    }

    #[test]
    fn configured_quote_is_sent_once_with_sentinels() {
        let client = EmailClient::new(config(Some("pk_123")), RecordingTransport::default());

        let outcome = block_on(client.send_quote(&quote_request()));
        assert_eq!(outcome, Ok(DispatchOutcome::Sent));

        let sent = client.transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        let request = &sent[0];
        assert_eq!(request.service_id, "service_pampa");
        assert_eq!(request.template_id, "template_quote");
        assert_eq!(request.user_id, "pk_123");
        assert_eq!(request.template_params["company"], NOT_SPECIFIED);
        assert_eq!(request.template_params["project_type"], "Desarrollo a medida");
    }

    #[test]
    fn contact_uses_contact_template() {
        let client = EmailClient::new(config(Some("pk_123")), RecordingTransport::default());
        block_on(client.send_contact(&contact_request())).unwrap();

        let sent = client.transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].template_id, "template_contact");
        assert_eq!(sent[0].template_params["city"], NOT_SPECIFIED);
    }

    #[test]
    fn transport_errors_propagate_unchanged() {
        let failure = DispatchError::Rejected {
            status: 400,
            body: "The public key is invalid".to_string(),
        };
        let transport = RecordingTransport {
            fail_with: Some(failure.clone()),
            ..Default::default()
        };
        let client = EmailClient::new(config(Some("pk_bad")), transport);

        assert_eq!(block_on(client.send_contact(&contact_request())), Err(failure));
        // No retry
        assert_eq!(client.transport.sent.borrow().len(), 1);
    }

    #[test]
    fn send_request_serializes_emailjs_shape() {
        let mut template_params = TemplateParams::new();
        template_params.insert("subject", "hola".to_string());
        let request = SendRequest {
            service_id: "s".to_string(),
            template_id: "t".to_string(),
            user_id: "u".to_string(),
            template_params,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "service_id": "s",
                "template_id": "t",
                "user_id": "u",
                "template_params": { "subject": "hola" }
            })
        );
    }
}
