//! Runtime configuration.
//!
//! Values are layered, later sources winning:
//! defaults < `~/.discuss/config.json` < environment < CLI flags.
//!
//! ```ignore
//! use discuss::config::Config;
//!
//! let config = Config::default()
//!     .with_base_url("https://forum.example.com")
//!     .with_sort("newest");
//! ```

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::cli::CliOptions;
use crate::error::{DiscussError, DiscussResult};

/// The config and log directory name under the home directory.
pub const CONFIG_DIR: &str = ".discuss";

/// The config file name.
pub const CONFIG_FILE: &str = "config.json";

/// Default forum base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost";

/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_URL: &str = "DISCUSS_URL";
pub const ENV_TOKEN: &str = "DISCUSS_TOKEN";
pub const ENV_SORT: &str = "DISCUSS_SORT";

/// Resolved configuration for a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Forum root, without a trailing slash
    pub base_url: String,
    /// API token; when present the session starts logged in
    pub token: Option<String>,
    /// Initial sort key. Unknown keys fall back to the default sort when
    /// a request is built.
    pub sort: String,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            sort: crate::state::DEFAULT_SORT.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// On-disk shape of `config.json`. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FileConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = sort.into();
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Build the full layered configuration for the CLI options given.
    pub fn load(cli: &CliOptions) -> DiscussResult<Self> {
        let mut config = Self::default();
        if let Some(path) = default_config_path() {
            config = config.merge_file(&path)?;
        }
        Ok(config.merge_env().merge_cli(cli))
    }

    /// Apply values from a config file. A missing file is not an error.
    pub fn merge_file(self, path: &Path) -> DiscussResult<Self> {
        if !path.exists() {
            return Ok(self);
        }

        let file = File::open(path)?;
        let file_config: FileConfig = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| DiscussError::Config(format!("{}: {}", path.display(), e)))?;

        tracing::debug!("Loaded config file {}", path.display());
        Ok(self.merge(file_config))
    }

    /// Apply values from a parsed file config.
    pub fn merge(mut self, file: FileConfig) -> Self {
        if let Some(url) = file.base_url {
            self = self.with_base_url(url);
        }
        if let Some(token) = file.token {
            self.token = Some(token);
        }
        if let Some(sort) = file.sort {
            self.sort = sort;
        }
        if let Some(secs) = file.request_timeout_secs {
            self.request_timeout_secs = secs;
        }
        self
    }

    /// Apply `DISCUSS_URL`, `DISCUSS_TOKEN` and `DISCUSS_SORT`. Empty values
    /// are ignored.
    pub fn merge_env(mut self) -> Self {
        if let Some(url) = env_value(ENV_URL) {
            self = self.with_base_url(url);
        }
        if let Some(token) = env_value(ENV_TOKEN) {
            self.token = Some(token);
        }
        if let Some(sort) = env_value(ENV_SORT) {
            self.sort = sort;
        }
        self
    }

    /// Apply command-line overrides.
    pub fn merge_cli(mut self, cli: &CliOptions) -> Self {
        if let Some(url) = &cli.url {
            self = self.with_base_url(url.clone());
        }
        if let Some(token) = &cli.token {
            self.token = Some(token.clone());
        }
        if let Some(sort) = &cli.sort {
            self.sort = sort.clone();
        }
        self
    }
}

/// `~/.discuss`, or `None` when the home directory is unknown.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR))
}

/// `~/.discuss/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::TempDir;

    fn clear_env() {
        std::env::remove_var(ENV_URL);
        std::env::remove_var(ENV_TOKEN);
        std::env::remove_var(ENV_SORT);
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost");
        assert_eq!(config.token, None);
        assert_eq!(config.sort, "recent");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = Config::new().with_base_url("https://forum.test/");
        assert_eq!(config.base_url, "https://forum.test");
    }

    #[test]
    fn test_merge_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut file = File::create(&path).unwrap();
        write!(
            file,
            r#"{{"base_url": "https://forum.test", "sort": "oldest", "request_timeout_secs": 5}}"#
        )
        .unwrap();

        let config = Config::default().merge_file(&path).unwrap();
        assert_eq!(config.base_url, "https://forum.test");
        assert_eq!(config.sort, "oldest");
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.token, None);
    }

    #[test]
    fn test_missing_file_is_ignored() {
        let dir = TempDir::new().unwrap();
        let config = Config::default()
            .merge_file(&dir.path().join("absent.json"))
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{not json").unwrap();

        let err = Config::default().merge_file(&path).unwrap_err();
        assert!(matches!(err, DiscussError::Config(_)));
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_env();
        std::env::set_var(ENV_URL, "https://env.test");
        std::env::set_var(ENV_SORT, "replies");

        let config = Config::default()
            .merge(FileConfig {
                base_url: Some("https://file.test".to_string()),
                token: Some("file-token".to_string()),
                ..Default::default()
            })
            .merge_env();

        assert_eq!(config.base_url, "https://env.test");
        assert_eq!(config.sort, "replies");
        assert_eq!(config.token.as_deref(), Some("file-token"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_empty_env_values_ignored() {
        clear_env();
        std::env::set_var(ENV_TOKEN, "");
        let config = Config::default().merge_env();
        assert_eq!(config.token, None);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_cli_overrides_env() {
        clear_env();
        std::env::set_var(ENV_SORT, "replies");
        let cli = CliOptions {
            sort: Some("newest".to_string()),
            token: Some("cli-token".to_string()),
            url: None,
        };

        let config = Config::default().merge_env().merge_cli(&cli);
        assert_eq!(config.sort, "newest");
        assert_eq!(config.token.as_deref(), Some("cli-token"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        clear_env();
    }
}
