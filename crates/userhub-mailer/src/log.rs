//! Log-only mail provider.

use async_trait::async_trait;
use tracing::info;

use userhub_core::config::mailer::MailerConfig;
use userhub_core::result::AppResult;
use userhub_core::traits::Mailer;

use crate::template;

/// Writes outbound mail to the application log instead of delivering it.
#[derive(Debug, Clone)]
pub struct LogMailer {
    confirmation_url_base: String,
}

impl LogMailer {
    /// Create a log mailer from configuration.
    pub fn new(config: &MailerConfig) -> Self {
        Self {
            confirmation_url_base: config.confirmation_url_base.clone(),
        }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send_new_user_mail(
        &self,
        email: &str,
        verification_token: &str,
        name: &str,
    ) -> AppResult<()> {
        let body = template::new_user_body(name, verification_token, &self.confirmation_url_base);
        info!(to = %email, subject = %template::new_user_subject(), body = %body, "Mail (log provider)");
        Ok(())
    }
}
