//! Infrastructure layer for vqa-demo
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod inference;
pub mod media;
pub mod random;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileProviderConfig, FileResolverConfig,
};
#[cfg(feature = "http-provider")]
pub use inference::http::HttpInferenceProvider;
pub use media::{ImageFileLoader, ImageLoadError};
pub use random::StdRandomSource;
