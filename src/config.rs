//! Application Configuration
//!
//! Endpoint and loader settings. Build-time overrides:
//! `LIST_API_URL` replaces the endpoint, `LIST_LOG_LEVEL` the log level.

use tracing::Level;

pub const DEFAULT_API_URL: &str = "https://apis.ccbp.in/list-creation/lists";

/// Progress advanced per loader tick
pub const DEFAULT_PROGRESS_STEP: u8 = 25;

/// Milliseconds between loader ticks
pub const DEFAULT_PROGRESS_INTERVAL_MS: u32 = 500;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    pub progress_step: u8,
    pub progress_interval_ms: u32,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            progress_step: DEFAULT_PROGRESS_STEP,
            progress_interval_ms: DEFAULT_PROGRESS_INTERVAL_MS,
            log_level: if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO },
        }
    }
}

impl AppConfig {
    /// Defaults with build-time environment overrides applied
    pub fn from_build_env() -> Self {
        Self::with_overrides(option_env!("LIST_API_URL"), option_env!("LIST_LOG_LEVEL"))
    }

    fn with_overrides(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_url.map(str::trim).filter(|url| !url.is_empty()) {
            config.api_url = url.to_string();
        }
        if let Some(level) = log_level.and_then(|raw| raw.trim().parse::<Level>().ok()) {
            config.log_level = level;
        }
        config
    }
}
