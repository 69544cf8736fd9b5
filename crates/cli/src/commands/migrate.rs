//! Database migration command.
//!
//! Applies the embedded schema migrations and creates the session table.
//! Idempotent; safe to run repeatedly.

use super::CommandError;

/// Run all migrations against the configured database.
///
/// # Errors
///
/// Returns `CommandError` if the connection or a migration fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = super::connect().await?;

    tracing::info!("Running schema migrations...");
    santalena_site::db::MIGRATOR.run(&pool).await?;

    tracing::info!("Preparing session store...");
    santalena_site::middleware::migrate_session_store(&pool).await?;

    tracing::info!("Migrations complete");
    Ok(())
}
