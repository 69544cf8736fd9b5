//! Santalena site server.
//!
//! Serves the marketing site's API on a single port:
//!
//! - Public content endpoints (services, per-section images, contact form)
//! - Session-authenticated admin API (CRUD, uploads, contact inbox)
//! - Static uploads under `/uploads`
//!
//! Migrations and the admin account are applied on startup, so a fresh
//! database file is fully usable after first boot.

#![cfg_attr(not(test), forbid(unsafe_code))]

use secrecy::ExposeSecret;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use santalena_site::config::SiteConfig;
use santalena_site::services::email::ContactNotifier;
use santalena_site::state::AppState;
use santalena_site::{app, db, middleware};

#[tokio::main]
async fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "santalena_site=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SiteConfig::from_env().expect("Failed to load configuration");

    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");
    tracing::info!("Database pool created");

    db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");
    middleware::migrate_session_store(&pool)
        .await
        .expect("Failed to migrate session store");
    tracing::info!("Migrations applied");

    let notifier = match &config.email {
        Some(email_config) => Some(
            ContactNotifier::new(email_config).expect("Failed to configure SMTP transport"),
        ),
        None => {
            tracing::warn!("SMTP not configured; contact notifications are disabled");
            None
        }
    };

    let state =
        AppState::new(config.clone(), pool, notifier).expect("Failed to initialize state");

    // Ensure the admin account matches the configured credentials
    state
        .auth()
        .seed_admin(&config.admin.username, config.admin.password.expose_secret())
        .await
        .expect("Failed to seed admin account");
    tracing::info!(username = %config.admin.username, "Admin account ready");

    let addr = config.socket_addr();
    tracing::info!("site listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
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
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
