//! Admin account.

use chrono::{DateTime, Utc};
use serde::Serialize;

use santalena_core::AdminId;

/// The admin account.
///
/// Exactly one row is seeded from environment configuration at startup;
/// there is no self-registration. The password hash never leaves this
/// struct's serialization boundary.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: AdminId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_never_serialized() {
        let admin = Admin {
            id: AdminId::new(1),
            username: "admin".to_string(),
            password_hash: "$argon2id$v=19$...".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&admin).unwrap();
        assert!(json.contains("\"username\":\"admin\""));
        assert!(!json.contains("argon2"));
        assert!(!json.contains("passwordHash"));
    }
}
