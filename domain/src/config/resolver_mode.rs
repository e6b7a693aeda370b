//! Resolver mode value object

use crate::answer::result::ResolutionMode;
use serde::{Deserialize, Serialize};

/// Which resolution path the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolverMode {
    /// Use the model when an inference endpoint is configured, otherwise mock
    #[default]
    Auto,
    /// Always use the keyword-based mock
    Mock,
    /// Always use the model; fails if no provider is available
    Model,
}

impl ResolverMode {
    /// Settle `Auto` given whether a provider is configured
    pub fn effective(self, provider_configured: bool) -> ResolutionMode {
        match self {
            ResolverMode::Auto if provider_configured => ResolutionMode::ModelBacked,
            ResolverMode::Auto | ResolverMode::Mock => ResolutionMode::RuleBased,
            ResolverMode::Model => ResolutionMode::ModelBacked,
        }
    }
}

impl std::str::FromStr for ResolverMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ResolverMode::Auto),
            "mock" => Ok(ResolverMode::Mock),
            "model" => Ok(ResolverMode::Model),
            other => Err(format!("unknown resolver mode: {other}")),
        }
    }
}
