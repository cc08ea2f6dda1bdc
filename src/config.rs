//! Runtime configuration
//!
//! Precedence, lowest first: built-in defaults, optional TOML file,
//! environment. A missing API key is not an error here; the generation call
//! fails instead.

use crate::llm::adapters::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Primary API key variable
pub const ENV_API_KEY: &str = "API_KEY";
/// Fallback API key variable
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_MODEL: &str = "METAPROMPT_MODEL";
pub const ENV_BASE_URL: &str = "METAPROMPT_BASE_URL";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    /// Per-request timeout; `None` keeps the HTTP client default
    pub timeout_secs: Option<u64>,
    /// Directory for the TUI log file; `None` uses the temp dir
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            log_dir: None,
        }
    }
}

/// On-disk layout; every key optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    log_dir: Option<PathBuf>,
}

impl Config {
    /// Load defaults, then `path` (if any), then the process environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, |key| std::env::var(key).ok())
    }

    /// `load` with an injectable environment lookup
    pub fn load_with_env<F>(path: Option<&Path>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = path {
            let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            config.apply_toml(&content, path, &env)?;
        }

        config.apply_env(&env);
        Ok(config)
    }

    fn apply_toml<F>(&mut self, content: &str, path: &Path, env: &F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file: FileConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(key) = file.api_key {
            self.api_key = resolve_env_ref(&key, env);
        }
        if let Some(model) = file.model {
            self.model = model;
        }
        if let Some(base_url) = file.base_url {
            self.base_url = base_url;
        }
        if file.timeout_secs.is_some() {
            self.timeout_secs = file.timeout_secs;
        }
        if file.log_dir.is_some() {
            self.log_dir = file.log_dir;
        }
        Ok(())
    }

    fn apply_env<F>(&mut self, env: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty(ENV_API_KEY).or_else(|| non_empty(ENV_GEMINI_API_KEY)) {
            self.api_key = key;
        }
        if let Some(model) = non_empty(ENV_MODEL) {
            self.model = model;
        }
        if let Some(base_url) = non_empty(ENV_BASE_URL) {
            self.base_url = base_url;
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

/// Resolve an `env:NAME` reference; other values pass through
///
/// An unset variable resolves to an empty key.
fn resolve_env_ref<F>(value: &str, env: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match value.strip_prefix("env:") {
        Some(name) => env(name).unwrap_or_default(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_sources() {
        let config = Config::load_with_env(None, env_of(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.model, "gemini-3-pro-preview");
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_env_api_key_and_fallback() {
        let config = Config::load_with_env(None, env_of(&[("API_KEY", "k1")])).unwrap();
        assert_eq!(config.api_key, "k1");

        let config = Config::load_with_env(None, env_of(&[("GEMINI_API_KEY", "k2")])).unwrap();
        assert_eq!(config.api_key, "k2");

        let config = Config::load_with_env(
            None,
            env_of(&[("API_KEY", "k1"), ("GEMINI_API_KEY", "k2")]),
        )
        .unwrap();
        assert_eq!(config.api_key, "k1");
    }

    #[test]
    fn test_file_then_env_precedence() {
        let file = write_config(
            r#"
api_key = "from-file"
model = "gemini-file"
timeout_secs = 45
"#,
        );
        let config =
            Config::load_with_env(Some(file.path()), env_of(&[("METAPROMPT_MODEL", "gemini-env")]))
                .unwrap();
        assert_eq!(config.api_key, "from-file");
        assert_eq!(config.model, "gemini-env");
        assert_eq!(config.timeout_secs, Some(45));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_file_env_reference() {
        let file = write_config("api_key = \"env:MY_SECRET\"\n");
        let config =
            Config::load_with_env(Some(file.path()), env_of(&[("MY_SECRET", "s3cr3t")])).unwrap();
        assert_eq!(config.api_key, "s3cr3t");

        let config = Config::load_with_env(Some(file.path()), env_of(&[])).unwrap();
        assert_eq!(config.api_key, "");
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = Config::load_with_env(Some(Path::new("/nonexistent/metaprompt.toml")), env_of(&[]));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_unknown_key_is_error() {
        let file = write_config("provider = \"openai\"\n");
        let result = Config::load_with_env(Some(file.path()), env_of(&[]));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_blank_env_ignored() {
        let config = Config::load_with_env(None, env_of(&[("API_KEY", "  ")])).unwrap();
        assert!(!config.has_api_key());
    }
}
