//! Inference provider port
//!
//! Defines the interface for asking a multimodal model about an image.

use async_trait::async_trait;
use thiserror::Error;
use vqa_domain::{ImageHandle, Question};

/// Errors that can occur during inference
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed output: {0}")]
    MalformedOutput(String),

    #[error("Timeout")]
    Timeout,
}

/// A single visual question for the provider
#[derive(Debug, Clone)]
pub struct PredictRequest {
    pub image: ImageHandle,
    pub question: Question,
    /// Upper bound on generated tokens
    pub max_new_tokens: usize,
}

impl PredictRequest {
    pub fn new(image: ImageHandle, question: Question, max_new_tokens: usize) -> Self {
        Self {
            image,
            question,
            max_new_tokens,
        }
    }
}

/// Raw provider output
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Generated answer text, not yet normalized
    pub text: String,
    /// Model-derived score in `[0, 1]`, when the provider can compute one
    pub score: Option<f64>,
}

impl Prediction {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            score: None,
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }
}

/// Visual question answering backend
///
/// Implementations are constructed once by the composition root and shared;
/// any model state they cache lives inside the adapter.
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    /// Short name used in logs and progress output
    fn name(&self) -> &str;

    /// Generate an answer for the question about the image
    async fn predict(&self, request: &PredictRequest) -> Result<Prediction, InferenceError>;
}
