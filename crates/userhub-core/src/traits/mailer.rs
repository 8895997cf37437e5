//! Mailer trait for pluggable outbound mail delivery.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for outbound mail dispatch.
///
/// The trait is defined here in `userhub-core` and implemented in
/// `userhub-mailer`. Implementations are expected to be fire-and-return:
/// a successful return means the delivery provider accepted the message,
/// not that it reached the inbox.
#[async_trait]
pub trait Mailer: Send + Sync + std::fmt::Debug + 'static {
    /// Send the new-user confirmation mail.
    ///
    /// `verification_token` is the opaque secret the recipient uses to
    /// confirm ownership of `email`; `name` personalizes the greeting.
    async fn send_new_user_mail(
        &self,
        email: &str,
        verification_token: &str,
        name: &str,
    ) -> AppResult<()>;
}
