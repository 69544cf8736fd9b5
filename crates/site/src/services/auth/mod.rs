//! Authentication service.
//!
//! Password authentication for the single admin account, using Argon2id.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::SqlitePool;

use crate::db::admins::AdminRepository;
use crate::models::Admin;

/// Authentication service.
///
/// Handles admin login and account seeding. Holds a fallback hash so that
/// login attempts against unknown usernames still pay the verification cost,
/// keeping response timing uniform.
pub struct AuthService {
    pool: SqlitePool,
    fallback_hash: String,
}

impl AuthService {
    /// Create a new authentication service.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::PasswordHash` if the fallback hash cannot be
    /// generated.
    pub fn new(pool: SqlitePool) -> Result<Self, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let fallback_hash = hash_password(salt.as_str())?;

        Ok(Self {
            pool,
            fallback_hash,
        })
    }

    /// Verify a username/password pair against the admins table.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the username is unknown or
    /// the password is wrong. Unknown usernames still run a verification
    /// against the fallback hash.
    pub async fn login(&self, username: &str, password: &str) -> Result<Admin, AuthError> {
        let admins = AdminRepository::new(&self.pool);

        let Some(admin) = admins.get_by_username(username).await? else {
            // Burn the same hashing work for unknown usernames
            let _ = verify_password(password, &self.fallback_hash);
            return Err(AuthError::InvalidCredentials);
        };

        verify_password(password, &admin.password_hash)?;

        Ok(admin)
    }

    /// Ensure the configured admin account exists with the configured
    /// password. Runs on every startup; rotates the hash if it changed.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::PasswordHash` if hashing fails or
    /// `AuthError::Repository` if the upsert fails.
    pub async fn seed_admin(&self, username: &str, password: &str) -> Result<Admin, AuthError> {
        let password_hash = hash_password(password)?;
        let admins = AdminRepository::new(&self.pool);
        let admin = admins.upsert(username, &password_hash).await?;

        Ok(admin)
    }
}

/// Hash a password using Argon2id.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
///
/// # Errors
///
/// Returns `AuthError::InvalidCredentials` on mismatch or malformed hash.
pub fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("correct horse battery").expect("hashing succeeds");
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("correct horse battery", &hash).is_ok());
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let hash = hash_password("correct horse battery").expect("hashing succeeds");
        assert!(matches!(
            verify_password("wrong password", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(matches!(
            verify_password("anything", "not-a-phc-string"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same password").expect("hashing succeeds");
        let b = hash_password("same password").expect("hashing succeeds");
        assert_ne!(a, b);
    }
}
