//! Domain models and request payloads.

pub mod admin;
pub mod contact_message;
pub mod service;
pub mod session;
pub mod site_image;

pub use admin::Admin;
pub use contact_message::{ContactMessage, NewContactMessage};
pub use service::{NewService, Service, UpdateService};
pub use session::{CurrentAdmin, session_keys};
pub use site_image::{NewSiteImage, SiteImage, UpdateSiteImage};
