//! Configuration file loading for vqa-demo
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `VQA_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./vqa.toml` or `./.vqa.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/vqa-demo/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig, FileProviderConfig,
    FileResolverConfig,
};
pub use loader::ConfigLoader;
