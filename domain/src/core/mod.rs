//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a validated, non-empty question about an image
//! - [`image::ImageHandle`]: an opaque handle to a decoded image
//! - [`error::DomainError`]: domain-level errors
//! - [`text`]: answer text normalization helpers

pub mod error;
pub mod image;
pub mod question;
pub mod text;
