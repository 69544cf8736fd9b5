//! Admin account management commands.
//!
//! # Usage
//!
//! ```bash
//! santalena admin create -u admin -p 'a strong password'
//! santalena admin set-password -u admin -p 'a new password'
//! ```

use santalena_site::db::AdminRepository;
use santalena_site::services::auth::hash_password;

use super::CommandError;

/// Create (or replace the password of) an admin account.
///
/// # Errors
///
/// Returns `CommandError` if hashing or the database write fails.
pub async fn create(username: &str, password: &str) -> Result<(), CommandError> {
    let pool = super::connect().await?;

    let password_hash = hash_password(password)?;
    let admin = AdminRepository::new(&pool)
        .upsert(username, &password_hash)
        .await?;

    tracing::info!(id = %admin.id, username = %admin.username, "Admin account ready");
    Ok(())
}

/// Rotate the password of an existing admin account.
///
/// Unlike `create`, this refuses to touch an account that doesn't exist.
///
/// # Errors
///
/// Returns `CommandError::AdminNotFound` if the username is unknown.
pub async fn set_password(username: &str, password: &str) -> Result<(), CommandError> {
    let pool = super::connect().await?;
    let admins = AdminRepository::new(&pool);

    if admins.get_by_username(username).await?.is_none() {
        return Err(CommandError::AdminNotFound(username.to_string()));
    }

    let password_hash = hash_password(password)?;
    admins.upsert(username, &password_hash).await?;

    tracing::info!(username = %username, "Admin password updated");
    Ok(())
}
