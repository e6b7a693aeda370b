//! Application-level configuration.
//!
//! - [`ResolverParams`]: confidence bands, answer length and provider budget

pub mod resolver_params;

pub use resolver_params::ResolverParams;
