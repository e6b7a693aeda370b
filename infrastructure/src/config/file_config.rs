//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use vqa_application::ResolverParams;
use vqa_domain::{ConfidenceBand, OutputFormat, ResolverMode};

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("provider.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("resolver.max_answer_tokens cannot be 0")]
    ZeroMaxAnswerTokens,

    #[error("provider.model cannot be empty")]
    EmptyModelName,

    #[error("resolver.mode = \"model\" requires provider.endpoint")]
    MissingEndpoint,

    #[error("provider.endpoint must be an http(s) URL, got {0:?}")]
    InvalidEndpoint(String),
}

/// Raw resolver configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResolverConfig {
    /// Resolution path (auto, mock, model)
    pub mode: ResolverMode,
    /// Seed for reproducible answers; entropy when unset
    pub seed: Option<u64>,
    /// Generated answers are cut to this many tokens
    pub max_answer_tokens: usize,
    /// Confidence band for mock answers
    pub mock_confidence: ConfidenceBand,
    /// Confidence band for model answers without a score
    pub model_confidence: ConfidenceBand,
}

impl Default for FileResolverConfig {
    fn default() -> Self {
        Self {
            mode: ResolverMode::Auto,
            seed: None,
            max_answer_tokens: 50,
            mock_confidence: ConfidenceBand::RULE_BASED,
            model_confidence: ConfidenceBand::MODEL_BACKED,
        }
    }
}

/// Raw inference provider configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// HTTP endpoint of the inference service
    pub endpoint: Option<String>,
    /// Model identifier forwarded to the service
    pub model: String,
    /// Budget in seconds for one inference call
    pub timeout_seconds: Option<u64>,
    /// Name of the environment variable holding a bearer token
    pub api_key_env: Option<String>,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            model: "Salesforce/blip-vqa-base".to_string(),
            timeout_seconds: Some(30),
            api_key_env: None,
        }
    }
}

impl FileProviderConfig {
    /// Read the bearer token from the configured environment variable
    pub fn api_key(&self) -> Option<String> {
        self.api_key_env
            .as_deref()
            .and_then(|name| std::env::var(name).ok())
            .filter(|key| !key.trim().is_empty())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
    /// Show the analysis explanation steps in full output
    pub show_explanation: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            show_explanation: true,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Also write logs to this file
    pub file: Option<String>,
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Resolver settings
    pub resolver: FileResolverConfig,
    /// Inference provider settings
    pub provider: FileProviderConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        // Timeout of 0 seconds doesn't make sense
        if let Some(0) = self.provider.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.resolver.max_answer_tokens == 0 {
            return Err(ConfigValidationError::ZeroMaxAnswerTokens);
        }

        if self.provider.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        match &self.provider.endpoint {
            Some(endpoint) => {
                if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                    return Err(ConfigValidationError::InvalidEndpoint(endpoint.clone()));
                }
            }
            None if self.resolver.mode == ResolverMode::Model => {
                return Err(ConfigValidationError::MissingEndpoint);
            }
            None => {}
        }

        Ok(())
    }

    /// Resolver parameters for the application layer
    pub fn resolver_params(&self) -> ResolverParams {
        ResolverParams::default()
            .with_rule_based_band(self.resolver.mock_confidence)
            .with_model_band(self.resolver.model_confidence)
            .with_max_answer_tokens(self.resolver.max_answer_tokens)
            .with_provider_timeout(self.provider.timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[resolver]
mode = "model"
seed = 42
max_answer_tokens = 20
mock_confidence = { low = 0.5, high = 0.6 }
model_confidence = { low = 0.7, high = 0.8 }

[provider]
endpoint = "http://localhost:8000/vqa"
model = "blip-large"
timeout_seconds = 120
api_key_env = "MY_VQA_KEY"

[output]
format = "json"
color = false
show_explanation = false

[logging]
file = "vqa.log"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.resolver.mode, ResolverMode::Model);
        assert_eq!(config.resolver.seed, Some(42));
        assert_eq!(config.resolver.max_answer_tokens, 20);
        assert_eq!(config.resolver.mock_confidence.low(), 0.5);
        assert_eq!(config.resolver.model_confidence.high(), 0.8);
        assert_eq!(
            config.provider.endpoint.as_deref(),
            Some("http://localhost:8000/vqa")
        );
        assert_eq!(config.provider.model, "blip-large");
        assert_eq!(config.provider.timeout_seconds, Some(120));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(!config.output.show_explanation);
        assert_eq!(config.logging.file.as_deref(), Some("vqa.log"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[resolver]
mode = "mock"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.resolver.mode, ResolverMode::Mock);
        // Defaults should apply
        assert_eq!(config.resolver.max_answer_tokens, 50);
        assert_eq!(config.resolver.mock_confidence, ConfidenceBand::RULE_BASED);
        assert_eq!(config.provider.timeout_seconds, Some(30));
        assert!(config.output.color);
        assert!(config.output.show_explanation);
    }

    #[test]
    fn test_inverted_band_is_rejected_at_parse_time() {
        let toml_str = r#"
[resolver]
mock_confidence = { low = 0.9, high = 0.1 }
"#;
        assert!(toml::from_str::<FileConfig>(toml_str).is_err());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let toml_str = r#"
[provider]
timeout_seconds = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_validate_model_mode_needs_endpoint() {
        let mut config = FileConfig::default();
        config.resolver.mode = ResolverMode::Model;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::MissingEndpoint)
        ));

        config.provider.endpoint = Some("localhost:8000".to_string());
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_validate_zero_tokens_and_empty_model() {
        let mut config = FileConfig::default();
        config.resolver.max_answer_tokens = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::ZeroMaxAnswerTokens)
        ));

        let mut config = FileConfig::default();
        config.provider.model = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyModelName)
        ));
    }

    #[test]
    fn test_resolver_params_conversion() {
        let mut config = FileConfig::default();
        config.resolver.max_answer_tokens = 12;
        config.provider.timeout_seconds = None;

        let params = config.resolver_params();
        assert_eq!(params.max_answer_tokens, 12);
        assert_eq!(params.rule_based_band, ConfidenceBand::RULE_BASED);
        assert!(params.provider_timeout.is_none());
    }

    #[test]
    fn test_api_key_from_env() {
        let config = FileProviderConfig {
            api_key_env: Some("VQA_TEST_SURELY_UNSET_KEY".to_string()),
            ..Default::default()
        };
        assert!(config.api_key().is_none());
        assert!(FileProviderConfig::default().api_key().is_none());
    }
}
