//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["vqa.toml", ".vqa.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `VQA_*` environment variables (`VQA_PROVIDER__ENDPOINT=...`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./vqa.toml` or `./.vqa.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/vqa-demo/config.toml`
    /// 5. Default values
    ///
    /// A `config_path` that does not exist is an error.
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        if let Some(path) = config_path.filter(|p| !p.exists()) {
            return Err(Box::new(figment::Error::from(format!(
                "config file not found: {}",
                path.display()
            ))));
        }

        Self::figment(config_path, Self::project_config_path().as_deref())
            .extract()
            .map_err(Box::new)
    }

    fn figment(config_path: Option<&PathBuf>, project_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = project_path {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed("VQA_").split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/vqa-demo/config.toml if set,
    /// otherwise the platform config directory
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("vqa-demo").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [ENV  ] VQA_* variables (nested keys split on \"__\")");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./vqa.toml or ./.vqa.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use vqa_domain::{OutputFormat, ResolverMode};

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.resolver.mode, ResolverMode::Auto);
        assert!(config.provider.endpoint.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("vqa-demo"));
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        let project = write_toml(
            r#"
[resolver]
mode = "mock"
seed = 1

[output]
format = "answer"
"#,
        );
        let explicit = write_toml(
            r#"
[resolver]
seed = 7
"#,
        );

        let config: FileConfig = ConfigLoader::figment(
            Some(&explicit.path().to_path_buf()),
            Some(project.path()),
        )
        .extract()
        .unwrap();

        assert_eq!(config.resolver.mode, ResolverMode::Mock);
        assert_eq!(config.resolver.seed, Some(7));
        assert_eq!(config.output.format, Some(OutputFormat::Answer));
        // untouched sections keep their defaults
        assert_eq!(config.resolver.max_answer_tokens, 50);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let missing = PathBuf::from("/nonexistent/vqa-demo/config.toml");
        let err = ConfigLoader::load(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn test_load_explicit_file() {
        let explicit = write_toml(
            r#"
[provider]
timeout_seconds = 12
"#,
        );
        let config = ConfigLoader::load(Some(&explicit.path().to_path_buf())).unwrap();
        assert_eq!(config.provider.timeout_seconds, Some(12));
    }
}
