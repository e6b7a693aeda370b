//! Resolver parameters controlling use case behavior
//!
//! [`ResolverParams`] groups the static parameters that control
//! [`ResolveAnswerUseCase`](crate::use_cases::resolve_answer::ResolveAnswerUseCase).
//! These are application-layer concerns, not domain policy.

use std::time::Duration;
use vqa_domain::ConfidenceBand;

/// Default cap on generated answer length, in whitespace-separated tokens
pub const DEFAULT_MAX_ANSWER_TOKENS: usize = 50;

/// Default budget for a single inference call
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq)]
pub struct ResolverParams {
    /// Band for the keyword-based path.
    pub rule_based_band: ConfidenceBand,
    /// Band for model answers that arrive without a score.
    pub model_band: ConfidenceBand,
    /// Generated answers are cut to this many tokens.
    pub max_answer_tokens: usize,
    /// Budget for one provider call; `None` waits indefinitely.
    pub provider_timeout: Option<Duration>,
}

impl Default for ResolverParams {
    fn default() -> Self {
        Self {
            rule_based_band: ConfidenceBand::RULE_BASED,
            model_band: ConfidenceBand::MODEL_BACKED,
            max_answer_tokens: DEFAULT_MAX_ANSWER_TOKENS,
            provider_timeout: Some(DEFAULT_PROVIDER_TIMEOUT),
        }
    }
}

impl ResolverParams {
    // ==================== Builder Methods ====================

    pub fn with_rule_based_band(mut self, band: ConfidenceBand) -> Self {
        self.rule_based_band = band;
        self
    }

    pub fn with_model_band(mut self, band: ConfidenceBand) -> Self {
        self.model_band = band;
        self
    }

    pub fn with_max_answer_tokens(mut self, max: usize) -> Self {
        self.max_answer_tokens = max;
        self
    }

    pub fn with_provider_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.provider_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = ResolverParams::default();
        assert_eq!(params.rule_based_band, ConfidenceBand::RULE_BASED);
        assert_eq!(params.model_band, ConfidenceBand::MODEL_BACKED);
        assert_eq!(params.max_answer_tokens, 50);
        assert_eq!(params.provider_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_builder() {
        let band = ConfidenceBand::new(0.5, 0.6).unwrap();
        let params = ResolverParams::default()
            .with_rule_based_band(band)
            .with_max_answer_tokens(10)
            .with_provider_timeout(None);

        assert_eq!(params.rule_based_band, band);
        assert_eq!(params.max_answer_tokens, 10);
        assert!(params.provider_timeout.is_none());
    }
}
