//! HTTP mail API provider.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use userhub_core::config::mailer::MailerConfig;
use userhub_core::error::{AppError, ErrorKind};
use userhub_core::result::AppResult;
use userhub_core::traits::Mailer;

use crate::template;

/// Sends mail through a JSON-over-HTTP delivery API.
///
/// The API contract is a single POST of `{from, to, subject, text}` with a
/// bearer token; any non-success status is an [`ErrorKind::EmailSending`]
/// failure.
#[derive(Debug, Clone)]
pub struct HttpApiMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    from: String,
    confirmation_url_base: String,
}

#[derive(Debug, Serialize)]
struct OutboundMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

impl HttpApiMailer {
    /// Create a mailer from configuration.
    pub fn new(config: &MailerConfig) -> Result<Self, AppError> {
        if config.api_url.is_empty() {
            return Err(AppError::configuration(
                "mailer.api_url is required for the http provider",
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build mail client: {e}"),
                    e,
                )
            })?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            from: format!("{} <{}>", config.from_name, config.from_address),
            confirmation_url_base: config.confirmation_url_base.clone(),
        })
    }
}

#[async_trait]
impl Mailer for HttpApiMailer {
    async fn send_new_user_mail(
        &self,
        email: &str,
        verification_token: &str,
        name: &str,
    ) -> AppResult<()> {
        let subject = template::new_user_subject();
        let text = template::new_user_body(name, verification_token, &self.confirmation_url_base);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&OutboundMessage {
                from: &self.from,
                to: email,
                subject: &subject,
                text: &text,
            })
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::EmailSending,
                    format!("Mail API request failed: {e}"),
                    e,
                )
            })?;

        if !response.status().is_success() {
            return Err(AppError::email_sending(format!(
                "Mail API rejected message with status {}",
                response.status()
            )));
        }

        tracing::debug!(to = %email, "Confirmation mail accepted by delivery API");
        Ok(())
    }
}
