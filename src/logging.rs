//! Tracing setup.
//!
//! Logs go to `~/.discuss/discuss.log` so they never draw over the TUI.
//! The filter comes from `DISCUSS_LOG` (EnvFilter syntax), default `info`.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::DiscussResult;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "DISCUSS_LOG";

/// Log file name inside the config directory.
pub const LOG_FILE: &str = "discuss.log";

/// Filter used when `DISCUSS_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Build the filter from `DISCUSS_LOG`, falling back to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `~/.discuss/discuss.log`
pub fn default_log_path() -> Option<PathBuf> {
    crate::config::config_dir().map(|dir| dir.join(LOG_FILE))
}

/// Install the global subscriber writing to `path`, appending.
///
/// Returns the path actually used. Calling this twice is harmless: the
/// second install is ignored.
pub fn init_to(path: &Path) -> DiscussResult<PathBuf> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();

    Ok(path.to_path_buf())
}

/// Install the subscriber at the default location. Without a home
/// directory logging stays disabled.
pub fn init() -> DiscussResult<Option<PathBuf>> {
    match default_log_path() {
        Some(path) => init_to(&path).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_log_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(LOG_FILE);

        let used = init_to(&path).unwrap();
        assert_eq!(used, path);
        assert!(path.exists());
    }

    #[test]
    #[serial]
    fn test_unset_filter_defaults_to_info() {
        std::env::remove_var(LOG_ENV);
        assert_eq!(env_filter().to_string(), DEFAULT_FILTER);
    }
}
