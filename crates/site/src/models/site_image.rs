//! Images placed in the site's page regions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use santalena_core::{Section, SiteImageId};

use crate::error::FieldError;

/// An image assigned to a page region.
///
/// The section tag is stored as plain text; [`santalena_core::Section`]
/// names the regions the page layout consumes, and the front end treats any
/// other tag as part of the general gallery.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SiteImage {
    pub id: SiteImageId,
    pub section: String,
    pub image_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl SiteImage {
    /// The page region this image renders in.
    ///
    /// Unknown or empty tags fall back to the general gallery, matching how
    /// the front end places such images.
    #[must_use]
    pub fn region(&self) -> Section {
        self.section.parse().unwrap_or(Section::Gallery)
    }
}

/// Payload for creating a site image.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSiteImage {
    pub section: String,
    pub image_url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewSiteImage {
    /// Validate required fields, reporting every failing field.
    ///
    /// # Errors
    ///
    /// Returns one `FieldError` per empty required field.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.section.trim().is_empty() {
            errors.push(FieldError::new("section", "section is required"));
        }
        if self.image_url.trim().is_empty() {
            errors.push(FieldError::new("imageUrl", "imageUrl is required"));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Partial payload for updating a site image.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSiteImage {
    pub section: Option<String>,
    pub image_url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        let image = NewSiteImage {
            section: "hero".to_string(),
            image_url: "/uploads/images/hero.jpg".to_string(),
            title: None,
            description: None,
        };
        assert!(image.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_fields() {
        let image = NewSiteImage {
            section: String::new(),
            image_url: " ".to_string(),
            title: None,
            description: None,
        };
        let errors = image.validate().expect_err("should fail");
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["section", "imageUrl"]);
    }

    #[test]
    fn test_region_falls_back_to_gallery() {
        let mut image = SiteImage {
            id: SiteImageId::new(1),
            section: "ambiente".to_string(),
            image_url: "/uploads/images/a.jpg".to_string(),
            title: None,
            description: None,
            updated_at: Utc::now(),
        };
        assert_eq!(image.region(), Section::Gallery);

        image.section = "hero".to_string();
        assert_eq!(image.region(), Section::Hero);

        image.section = "banner".to_string();
        assert_eq!(image.region(), Section::Gallery);
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let image: NewSiteImage =
            serde_json::from_str(r#"{"section":"hero","imageUrl":"/uploads/images/a.png"}"#)
                .expect("valid json");
        assert_eq!(image.image_url, "/uploads/images/a.png");
    }
}
