//! # userhub-mailer
//!
//! Outbound mail dispatch for UserHub. Two providers implement the
//! [`Mailer`](userhub_core::traits::Mailer) trait from `userhub-core`:
//!
//! - [`http::HttpApiMailer`] — posts messages to an HTTP mail delivery API;
//! - [`log::LogMailer`] — writes messages to the application log, for
//!   development and tests.
//!
//! The provider is selected by configuration via [`build_mailer`].

pub mod http;
pub mod log;
pub mod template;

use std::sync::Arc;

use userhub_core::config::mailer::MailerConfig;
use userhub_core::error::AppError;
use userhub_core::traits::Mailer;

/// Build the configured mailer provider.
pub fn build_mailer(config: &MailerConfig) -> Result<Arc<dyn Mailer>, AppError> {
    match config.provider.as_str() {
        "http" => Ok(Arc::new(http::HttpApiMailer::new(config)?)),
        "log" => Ok(Arc::new(log::LogMailer::new(config))),
        other => Err(AppError::configuration(format!(
            "Unknown mailer provider: '{other}'. Expected one of: http, log"
        ))),
    }
}
