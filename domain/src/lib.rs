//! Domain layer for vqa-demo
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Answer Resolution
//!
//! A [`Question`] about an optional [`ImageHandle`] is resolved into an
//! [`AnswerResult`]:
//!
//! - **Rule-based**: the question is bucketed into an [`AnswerCategory`] by
//!   keyword, and an exemplar is picked from the static [`AnswerBank`]
//! - **Model-backed**: an external inference provider generates the text
//!
//! ## Confidence
//!
//! Confidence values always lie in `[0, 1]`. Values drawn from a
//! [`ConfidenceBand`] are decorative, see [`ConfidenceSource`].

pub mod answer;
pub mod config;
pub mod core;

// Re-export commonly used types
pub use answer::{
    bank::AnswerBank,
    category::{AnswerCategory, classify},
    confidence::{ConfidenceBand, ConfidenceSource},
    result::{AnswerResult, ResolutionMode},
};
pub use config::{OutputFormat, ResolverMode};
pub use core::{
    error::DomainError,
    image::{ImageFormat, ImageHandle},
    question::Question,
    text::{normalize_answer, truncate_str},
};
