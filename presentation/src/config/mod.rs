//! Presentation-level configuration
//!
//! Configuration for output formatting.

use crate::cli::commands::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Output format: "full", "answer", or "json"
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show the analysis explanation steps
    pub show_explanation: bool,
    /// Show a progress spinner while resolving
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Full,
            color: true,
            show_explanation: true,
            show_progress: true,
        }
    }
}
