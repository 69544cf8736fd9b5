//! Massage service offered by the practice.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use santalena_core::ServiceId;

use crate::error::FieldError;

/// A service as shown on the public site and edited in the admin panel.
///
/// `active` controls public visibility: the public endpoint only returns
/// active services, and the admin panel toggles the flag instead of deleting
/// rows in the usual flow.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: ServiceId,
    pub title: String,
    pub description: String,
    /// Icon tag consumed by the front end (e.g. `spa`, `stone`).
    pub icon: String,
    /// Display label, e.g. "50 min".
    pub duration: String,
    /// Display label, e.g. "R$ 120".
    pub price: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub duration: String,
    pub price: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

impl NewService {
    /// Validate required fields, reporting every failing field.
    ///
    /// # Errors
    ///
    /// Returns one `FieldError` per empty required field.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("title", &self.title),
            ("description", &self.description),
            ("icon", &self.icon),
            ("duration", &self.duration),
            ("price", &self.price),
        ] {
            if value.trim().is_empty() {
                errors.push(FieldError::new(field, format!("{field} is required")));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Partial payload for updating a service.
///
/// Absent fields keep their stored values; `updated_at` is always refreshed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateService {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub duration: Option<String>,
    pub price: Option<String>,
    pub active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_service() -> NewService {
        NewService {
            title: "Relaxing Massage".to_string(),
            description: "A full-body relaxing massage.".to_string(),
            icon: "spa".to_string(),
            duration: "50 min".to_string(),
            price: "R$ 120".to_string(),
            active: true,
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(valid_service().validate().is_ok());
    }

    #[test]
    fn test_validate_reports_every_empty_field() {
        let service = NewService {
            title: String::new(),
            icon: "  ".to_string(),
            ..valid_service()
        };
        let errors = service.validate().expect_err("should fail");
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["title", "icon"]);
    }

    #[test]
    fn test_active_defaults_to_true() {
        let service: NewService = serde_json::from_str(
            r#"{"title":"t","description":"d","icon":"i","duration":"50 min","price":"R$ 120"}"#,
        )
        .expect("valid json");
        assert!(service.active);
    }
}
