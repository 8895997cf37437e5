//! Outbound mail configuration.

use serde::{Deserialize, Serialize};

/// Mail delivery configuration.
///
/// `provider` selects the implementation: `"http"` posts to an HTTP mail
/// delivery API, `"log"` writes the mail to the application log (useful for
/// development and tests).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailerConfig {
    /// Mail provider: `"http"` or `"log"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// HTTP mail API endpoint (required for the `http` provider).
    #[serde(default)]
    pub api_url: String,
    /// Bearer token for the HTTP mail API.
    #[serde(default)]
    pub api_key: String,
    /// Sender address for outbound mail.
    #[serde(default = "default_from_address")]
    pub from_address: String,
    /// Sender display name.
    #[serde(default = "default_from_name")]
    pub from_name: String,
    /// Base URL embedded in confirmation links.
    #[serde(default = "default_confirmation_url_base")]
    pub confirmation_url_base: String,
    /// Request timeout for the HTTP mail API, in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_provider() -> String {
    "log".to_string()
}

fn default_from_address() -> String {
    "no-reply@userhub.local".to_string()
}

fn default_from_name() -> String {
    "UserHub".to_string()
}

fn default_confirmation_url_base() -> String {
    "http://localhost:8080/confirm".to_string()
}

fn default_timeout() -> u64 {
    10
}
