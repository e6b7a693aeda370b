//! Inference provider adapters
//!
//! Implements [`vqa_application::InferenceProvider`] for external services.

#[cfg(feature = "http-provider")]
pub mod http;
