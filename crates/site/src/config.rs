//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SANTALENA_SESSION_SECRET` - Session signing secret (min 32 chars, high entropy)
//!
//! ## Optional
//! - `SANTALENA_DATABASE_URL` - `SQLite` connection string
//!   (default: sqlite://santalena.db?mode=rwc, falls back to `DATABASE_URL`)
//! - `SANTALENA_HOST` - Bind address (default: 127.0.0.1)
//! - `SANTALENA_PORT` - Listen port (default: 3000)
//! - `SANTALENA_BASE_URL` - Public URL for the site (default: <http://localhost:3000>)
//! - `SANTALENA_UPLOADS_DIR` - Directory for uploaded images (default: uploads)
//! - `ADMIN_USERNAME` - Seeded admin username (default: admin)
//! - `ADMIN_PASSWORD` - Seeded admin password (default: admin123)
//! - `SMTP_HOST` - SMTP relay host (default: smtp.gmail.com)
//! - `SMTP_PORT` - SMTP relay port (default: 587)
//! - `SMTP_USERNAME` / `SMTP_PASSWORD` - SMTP credentials
//! - `CONTACT_RECIPIENT` - Operator address receiving contact notifications
//! - `CONTACT_FROM_ADDRESS` - From header for notifications
//!
//! Contact notifications are disabled unless `SMTP_USERNAME`, `SMTP_PASSWORD`,
//! and `CONTACT_RECIPIENT` are all present.

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const MIN_SESSION_SECRET_LENGTH: usize = 32;
const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Site application configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// `SQLite` database connection URL
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the site
    pub base_url: String,
    /// Session signing secret
    pub session_secret: SecretString,
    /// Directory where uploaded images are stored
    pub uploads_dir: PathBuf,
    /// Admin account seeded at startup
    pub admin: AdminSeedConfig,
    /// SMTP configuration for contact notifications (None disables them)
    pub email: Option<EmailConfig>,
}

/// Seeded admin credentials.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct AdminSeedConfig {
    /// Admin username (unique, single account)
    pub username: String,
    /// Admin password, hashed before storage
    pub password: SecretString,
}

impl std::fmt::Debug for AdminSeedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSeedConfig")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// SMTP configuration for outbound contact notifications.
///
/// Implements `Debug` manually to redact the SMTP password.
#[derive(Clone)]
pub struct EmailConfig {
    /// SMTP relay host
    pub smtp_host: String,
    /// SMTP relay port
    pub smtp_port: u16,
    /// SMTP username
    pub smtp_username: String,
    /// SMTP password
    pub smtp_password: SecretString,
    /// From header on notification mail
    pub from_address: String,
    /// Operator address that receives contact notifications
    pub recipient: String,
}

impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_username", &self.smtp_username)
            .field("smtp_password", &"[REDACTED]")
            .field("from_address", &self.from_address)
            .field("recipient", &self.recipient)
            .finish()
    }
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if the session secret fails validation (placeholder detection, entropy
    /// check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("SANTALENA_DATABASE_URL");
        let host = get_env_or_default("SANTALENA_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SANTALENA_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("SANTALENA_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SANTALENA_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("SANTALENA_BASE_URL", "http://localhost:3000");
        let session_secret = get_validated_secret("SANTALENA_SESSION_SECRET")?;
        validate_session_secret(&session_secret, "SANTALENA_SESSION_SECRET")?;
        let uploads_dir = PathBuf::from(get_env_or_default("SANTALENA_UPLOADS_DIR", "uploads"));

        let admin = AdminSeedConfig::from_env();
        let email = EmailConfig::from_env()?;

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            session_secret,
            uploads_dir,
            admin,
            email,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl AdminSeedConfig {
    fn from_env() -> Self {
        Self {
            username: get_env_or_default("ADMIN_USERNAME", "admin"),
            password: SecretString::from(get_env_or_default("ADMIN_PASSWORD", "admin123")),
        }
    }
}

impl EmailConfig {
    /// Returns `None` when the SMTP credentials or recipient are absent;
    /// the contact pipeline then skips notification entirely.
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let (Some(smtp_username), Some(smtp_password), Some(recipient)) = (
            get_optional_env("SMTP_USERNAME"),
            get_optional_env("SMTP_PASSWORD"),
            get_optional_env("CONTACT_RECIPIENT"),
        ) else {
            return Ok(None);
        };

        let smtp_port = get_env_or_default("SMTP_PORT", "587")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SMTP_PORT".to_string(), e.to_string()))?;

        Ok(Some(Self {
            smtp_host: get_env_or_default("SMTP_HOST", "smtp.gmail.com"),
            smtp_port,
            smtp_username,
            smtp_password: SecretString::from(smtp_password),
            from_address: get_env_or_default(
                "CONTACT_FROM_ADDRESS",
                "Santalena Site <noreply@santalena.com>",
            ),
            recipient,
        }))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> SecretString {
    if let Ok(value) = std::env::var(primary_key) {
        return SecretString::from(value);
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return SecretString::from(value);
    }
    SecretString::from("sqlite://santalena.db?mode=rwc")
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that a session secret meets minimum length requirements.
fn validate_session_secret(secret: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let value = secret.expose_secret();
    if value.len() < MIN_SESSION_SECRET_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "must be at least {} characters (got {})",
                MIN_SESSION_SECRET_LENGTH,
                value.len()
            ),
        ));
    }
    Ok(())
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.len() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    // Check blocklist
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    // Check entropy (real secrets like API keys have high entropy)
    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Use a randomly generated secret."
            ),
        ));
    }

    Ok(())
}

/// Load and validate a secret from environment.
fn get_validated_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_secret_strength(&value, key)?;
    Ok(SecretString::from(value))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_shannon_entropy_empty() {
        assert!((shannon_entropy("") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_single_char() {
        // All same character = 0 entropy
        assert!((shannon_entropy("aaaaaaa") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_two_chars() {
        // "ab" has entropy of 1 bit per char (50% a, 50% b)
        let entropy = shannon_entropy("ab");
        assert!((entropy - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_shannon_entropy_high() {
        // Random-looking string should have high entropy
        let entropy = shannon_entropy("aB3$xY9!mK2@nL5#");
        assert!(entropy > 3.3);
    }

    #[test]
    fn test_validate_secret_strength_placeholder() {
        let result = validate_secret_strength("your-session-key-here", "TEST_VAR");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(_, _)));
    }

    #[test]
    fn test_validate_secret_strength_changeme() {
        let result = validate_secret_strength("changeme123", "TEST_VAR");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_secret_strength_low_entropy() {
        let result = validate_secret_strength("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", "TEST_VAR");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(_, _)));
    }

    #[test]
    fn test_validate_secret_strength_valid() {
        // High-entropy random string
        let result = validate_secret_strength("aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6", "TEST_VAR");
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_session_secret_too_short() {
        let secret = SecretString::from("short");
        let result = validate_session_secret(&secret, "TEST_SESSION");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_session_secret_valid_length() {
        let secret = SecretString::from("a".repeat(32));
        let result = validate_session_secret(&secret, "TEST_SESSION");
        assert!(result.is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let config = SiteConfig {
            database_url: SecretString::from("sqlite::memory:"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            session_secret: SecretString::from("x".repeat(32)),
            uploads_dir: PathBuf::from("uploads"),
            admin: AdminSeedConfig {
                username: "admin".to_string(),
                password: SecretString::from("admin123"),
            },
            email: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_email_config_debug_redacts_secrets() {
        let config = EmailConfig {
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 587,
            smtp_username: "mailer@santalena.com".to_string(),
            smtp_password: SecretString::from("super_secret_smtp_password"),
            from_address: "noreply@santalena.com".to_string(),
            recipient: "owner@santalena.com".to_string(),
        };

        let debug_output = format!("{config:?}");

        // Public fields should be visible
        assert!(debug_output.contains("smtp.gmail.com"));
        assert!(debug_output.contains("mailer@santalena.com"));

        // Secret fields should be redacted
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_smtp_password"));
    }

    #[test]
    fn test_admin_seed_debug_redacts_password() {
        let admin = AdminSeedConfig {
            username: "admin".to_string(),
            password: SecretString::from("hunter2-hunter2"),
        };
        let debug_output = format!("{admin:?}");
        assert!(debug_output.contains("admin"));
        assert!(!debug_output.contains("hunter2"));
    }
}
