//! Application layer for vqa-demo
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ResolverParams;
pub use ports::{
    inference_provider::{InferenceError, InferenceProvider, PredictRequest, Prediction},
    progress::{NoProgress, ResolveProgressNotifier},
    random_source::RandomSource,
};
pub use use_cases::resolve_answer::{ResolveAnswerError, ResolveAnswerInput, ResolveAnswerUseCase};
