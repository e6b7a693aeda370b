//! Answer result value object

use super::category::AnswerCategory;
use super::confidence::ConfidenceSource;
use serde::{Deserialize, Serialize};

/// Which resolution path produced an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionMode {
    /// Keyword classification plus a canned exemplar
    RuleBased,
    /// Text generated by an inference provider
    ModelBacked,
}

impl ResolutionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionMode::RuleBased => "rule_based",
            ResolutionMode::ModelBacked => "model_backed",
        }
    }
}

impl std::fmt::Display for ResolutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Answer text and confidence handed to the renderer (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResult {
    answer: String,
    confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<AnswerCategory>,
    mode: ResolutionMode,
    confidence_source: ConfidenceSource,
}

impl AnswerResult {
    /// Result of the rule-based path; the confidence is always decorative
    pub fn rule_based(category: AnswerCategory, answer: impl Into<String>, confidence: f64) -> Self {
        Self {
            answer: answer.into(),
            confidence: clamp_unit(confidence),
            category: Some(category),
            mode: ResolutionMode::RuleBased,
            confidence_source: ConfidenceSource::Decorative,
        }
    }

    /// Result of the model-backed path
    pub fn model_backed(
        answer: impl Into<String>,
        confidence: f64,
        confidence_source: ConfidenceSource,
    ) -> Self {
        Self {
            answer: answer.into(),
            confidence: clamp_unit(confidence),
            category: None,
            mode: ResolutionMode::ModelBacked,
            confidence_source,
        }
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Confidence in `[0, 1]`
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Confidence scaled to `[0, 100]`
    pub fn confidence_percent(&self) -> f64 {
        self.confidence * 100.0
    }

    pub fn category(&self) -> Option<AnswerCategory> {
        self.category
    }

    pub fn mode(&self) -> ResolutionMode {
        self.mode
    }

    pub fn confidence_source(&self) -> ConfidenceSource {
        self.confidence_source
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}
