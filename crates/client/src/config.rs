//! Client configuration loaded from the process environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;

/// Client-side configuration.
///
/// Environment variables:
/// - `RINGSIDE_TICK_MS` - frame interval in milliseconds (default: 16)
/// - `RINGSIDE_SAVE_PATH` - save file location override
/// - `RINGSIDE_DATA_DIR` - load `moves.ron` / `opponents.ron` from this
///   directory instead of the built-in content
/// - `RINGSIDE_LOG_DIR` - write logs to `ringside.log` in this directory
///   instead of stderr
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub tick_interval: Duration,
    pub save_path: PathBuf,
    pub data_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(16),
            save_path: default_save_path(),
            data_dir: None,
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(tick_ms) = read_env::<u64>("RINGSIDE_TICK_MS") {
            config.tick_interval = Duration::from_millis(tick_ms.max(1));
        }
        if let Some(path) = read_env::<PathBuf>("RINGSIDE_SAVE_PATH") {
            config.save_path = path;
        }
        if let Some(dir) = read_env::<PathBuf>("RINGSIDE_DATA_DIR") {
            config.data_dir = Some(dir);
        }
        if let Some(dir) = read_env::<PathBuf>("RINGSIDE_LOG_DIR") {
            config.log_dir = Some(dir);
        }

        config
    }
}

/// Platform save location, falling back to the working directory when no
/// project directory can be resolved.
fn default_save_path() -> PathBuf {
    match ProjectDirs::from("", "", "ringside") {
        Some(dirs) => dirs.data_dir().join("save.txt"),
        None => PathBuf::from("save.txt"),
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
