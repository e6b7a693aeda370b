//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Question cannot be empty")]
    EmptyQuestion,

    #[error("Invalid confidence band [{low}, {high}]: bounds must satisfy 0 <= low <= high <= 1")]
    InvalidConfidenceBand { low: f64, high: f64 },

    #[error("Unsupported image format: {0}")]
    UnsupportedImageFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_question_display() {
        let error = DomainError::EmptyQuestion;
        assert_eq!(error.to_string(), "Question cannot be empty");
    }

    #[test]
    fn test_band_error_display_includes_bounds() {
        let error = DomainError::InvalidConfidenceBand { low: 0.9, high: 0.1 };
        let msg = error.to_string();
        assert!(msg.contains("0.9"));
        assert!(msg.contains("0.1"));
    }
}
