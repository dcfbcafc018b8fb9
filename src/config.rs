//! Runtime configuration from the environment.
//!
//! `DRIVEDECK_URL` overrides the backend base URL; `DRIVEDECK_LOG` sets the
//! tracing filter. Logs go to a file under the user data dir so the TUI's
//! stdout stays clean.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::api::DEFAULT_BASE_URL;

/// Environment variable overriding the backend base URL
pub const URL_ENV: &str = "DRIVEDECK_URL";

/// Environment variable selecting the tracing filter
pub const LOG_ENV: &str = "DRIVEDECK_LOG";

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL (without the `/api` prefix)
    pub base_url: String,
    /// Tracing filter directive
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Build the configuration from the environment.
    pub fn from_env() -> Self {
        let base_url = std::env::var(URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let log_filter = std::env::var(LOG_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "info".to_string());

        Self {
            base_url,
            log_filter,
        }
    }

    /// Install the global tracing subscriber, writing to the log file.
    ///
    /// Logging is best-effort: when the log file cannot be opened the app
    /// runs without a subscriber rather than failing startup.
    pub fn init_logging(&self) {
        let Some(path) = log_file_path() else {
            return;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
            return;
        };

        let filter = EnvFilter::try_new(&self.log_filter)
            .unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init();
    }
}

/// Location of the log file under the user data dir
pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("drivedeck").join("drivedeck.log"))
}
