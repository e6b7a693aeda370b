//! Presentation layer for vqa-demo
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the sample question catalogue.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod samples;

// Re-export commonly used types
pub use cli::commands::{Cli, ModeArg, OutputFormat};
pub use config::OutputConfig;
pub use output::{console::ConsoleFormatter, formatter::OutputFormatter};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use samples::{QUICK_QUESTIONS, SAMPLE_QUESTIONS};
