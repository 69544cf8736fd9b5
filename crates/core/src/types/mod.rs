//! Core types for Santalena.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod section;

pub use email::{Email, EmailError};
pub use id::*;
pub use section::{Section, SectionParseError};
