//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod output_format;
mod resolver_mode;

pub use output_format::OutputFormat;
pub use resolver_mode::ResolverMode;
