//! Page section tags for site images.

use serde::{Deserialize, Serialize};

/// Error returned when a string is not a known page section.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown section: {0}")]
pub struct SectionParseError(pub String);

/// A page region an image belongs to.
///
/// Images are tagged with the section of the page they appear in. The front
/// end treats any image with an unknown or empty section as part of the
/// general gallery, so the tag is stored as plain text in the database and
/// this enum only names the sections the page layout actually consumes.
///
/// The gallery section historically carried the tag `ambiente`, which is
/// accepted as an alias when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Top-of-page hero banner.
    Hero,
    /// "About" section portrait.
    About,
    /// Ambience gallery grid.
    Gallery,
    /// Testimonial backdrop images.
    Testimonials,
}

impl Section {
    /// All sections a page region consumes, in page order.
    pub const ALL: [Self; 4] = [Self::Hero, Self::About, Self::Gallery, Self::Testimonials];

    /// The canonical tag stored in the database.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Gallery => "gallery",
            Self::Testimonials => "testimonials",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Section {
    type Err = SectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hero" => Ok(Self::Hero),
            "about" => Ok(Self::About),
            // "ambiente" is the legacy tag for the gallery grid
            "gallery" | "ambiente" => Ok(Self::Gallery),
            "testimonials" => Ok(Self::Testimonials),
            other => Err(SectionParseError(other.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_sections() {
        assert_eq!("hero".parse::<Section>().unwrap(), Section::Hero);
        assert_eq!("about".parse::<Section>().unwrap(), Section::About);
        assert_eq!("gallery".parse::<Section>().unwrap(), Section::Gallery);
        assert_eq!(
            "testimonials".parse::<Section>().unwrap(),
            Section::Testimonials
        );
    }

    #[test]
    fn test_parse_ambiente_alias() {
        assert_eq!("ambiente".parse::<Section>().unwrap(), Section::Gallery);
    }

    #[test]
    fn test_parse_unknown() {
        assert!("banner".parse::<Section>().is_err());
        assert!("".parse::<Section>().is_err());
    }

    #[test]
    fn test_roundtrip_canonical_tags() {
        for section in Section::ALL {
            assert_eq!(section.as_str().parse::<Section>().unwrap(), section);
        }
    }
}
