//! Answer resolution concepts.
//!
//! - [`category::AnswerCategory`]: keyword-driven question buckets
//! - [`bank::AnswerBank`]: static exemplar answers per category
//! - [`confidence::ConfidenceBand`]: the interval confidence values are drawn from
//! - [`result::AnswerResult`]: what the resolver hands to the renderer

pub mod bank;
pub mod category;
pub mod confidence;
pub mod result;
