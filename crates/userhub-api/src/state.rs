//! Application state shared across all handlers.

use std::sync::Arc;

use userhub_core::config::AppConfig;
use userhub_service::AdminUserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Admin user service.
    pub admin_user_service: Arc<AdminUserService>,
}
