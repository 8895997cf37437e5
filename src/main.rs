//! UserHub Server — administrative user management service.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use userhub_core::config::AppConfig;
use userhub_core::error::AppError;

use userhub_auth::jwt::JwtKeys;
use userhub_auth::profile::ProfileResolver;
use userhub_database::repositories::user::UserRepository;
use userhub_database::store::UserStore;
use userhub_service::token::TokenGenerator;
use userhub_service::user::AdminUserService;

#[tokio::main]
async fn main() {
    let env = std::env::var("USERHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting UserHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = userhub_database::connection::create_pool(&config.database).await?;
    userhub_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Store, mailer, and caller resolution ─────────────
    let user_store: Arc<dyn UserStore> = Arc::new(UserRepository::new(db_pool.clone()));
    let mailer = userhub_mailer::build_mailer(&config.mailer)?;
    let jwt_keys = Arc::new(JwtKeys::new(&config.auth));
    let profile_resolver = Arc::new(ProfileResolver::new(
        Arc::clone(&jwt_keys),
        Arc::clone(&user_store),
    ));

    // ── Step 3: Services ─────────────────────────────────────────
    let admin_user_service = Arc::new(AdminUserService::new(
        Arc::clone(&user_store),
        mailer,
        profile_resolver,
        TokenGenerator::new(),
    ));

    // ── Step 4: Build and start HTTP server ──────────────────────
    let app_state = userhub_api::state::AppState {
        config: Arc::new(config.clone()),
        admin_user_service,
    };

    let app = userhub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("UserHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("UserHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
