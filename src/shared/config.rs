//! Application configuration. Journal directory, banner, menu retry limit.

use serde::Deserialize;
use std::path::PathBuf;

/// Transcripts are written to the working directory unless configured otherwise.
pub const DEFAULT_JOURNAL_DIR: &str = ".";

/// Consecutive invalid menu selections before the session is ended.
pub const DEFAULT_MAX_INVALID_ATTEMPTS: u32 = 3;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Directory for `<name>_journal.txt` files. Read from JOURNAL_DIR.
    #[serde(default)]
    pub dir: Option<String>,

    /// Show the welcome banner (default true). Read from JOURNAL_SHOW_BANNER.
    #[serde(default)]
    pub show_banner: Option<bool>,

    /// Invalid menu selections in a row before forced exit. Read from JOURNAL_MAX_INVALID_ATTEMPTS.
    #[serde(default)]
    pub max_invalid_attempts: Option<u32>,
}

impl AppConfig {
    /// Environment (`JOURNAL_*`, `.env` included) plus an optional file named by JOURNAL_CONFIG.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("JOURNAL_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("JOURNAL"));
        c.build()?.try_deserialize()
    }

    pub fn journal_dir_or_default(&self) -> PathBuf {
        PathBuf::from(self.dir.as_deref().unwrap_or(DEFAULT_JOURNAL_DIR))
    }

    pub fn show_banner_or_default(&self) -> bool {
        self.show_banner.unwrap_or(true)
    }

    /// Never below 1, so a single invalid choice can always end a session.
    pub fn max_invalid_attempts_or_default(&self) -> u32 {
        self.max_invalid_attempts
            .unwrap_or(DEFAULT_MAX_INVALID_ATTEMPTS)
            .max(1)
    }
}
