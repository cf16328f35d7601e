//! Runtime configuration from environment variables.
//!
//! `.env` loading happens in `main`; everything here reads the process
//! environment. Unset variables fall back to defaults, malformed values are
//! configuration errors rather than silent fallbacks.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;

const ENV_REPLY_DELAY_MS: &str = "UNICONNECT_REPLY_DELAY_MS";
const ENV_REPLY_JITTER_MS: &str = "UNICONNECT_REPLY_JITTER_MS";
const ENV_RATE_LIMIT: &str = "UNICONNECT_RATE_LIMIT";
const ENV_RATE_WINDOW_SECS: &str = "UNICONNECT_RATE_WINDOW_SECS";
const ENV_DATA_DIR: &str = "UNICONNECT_DATA_DIR";

/// Typing delay before a canned reply, matching the original product feel.
const DEFAULT_REPLY_DELAY_MS: u64 = 1500;
const DEFAULT_REPLY_JITTER_MS: u64 = 0;
const DEFAULT_RATE_LIMIT: usize = 20;
const DEFAULT_RATE_WINDOW_SECS: u64 = 60;

/// Runtime configuration for the hub.
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Base delay before a reply completes.
    pub reply_delay_ms: u64,
    /// Maximum random extra delay added to `reply_delay_ms`.
    pub reply_jitter_ms: u64,
    /// Sends allowed per conversation per window.
    pub rate_limit: usize,
    /// Sliding window length for the rate limiter.
    pub rate_window_secs: u64,
    /// Override for the portable data directory.
    pub data_dir: Option<PathBuf>,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            reply_jitter_ms: DEFAULT_REPLY_JITTER_MS,
            rate_limit: DEFAULT_RATE_LIMIT,
            rate_window_secs: DEFAULT_RATE_WINDOW_SECS,
            data_dir: None,
        }
    }
}

impl HubConfig {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            reply_delay_ms: parse_env(ENV_REPLY_DELAY_MS, DEFAULT_REPLY_DELAY_MS)?,
            reply_jitter_ms: parse_env(ENV_REPLY_JITTER_MS, DEFAULT_REPLY_JITTER_MS)?,
            rate_limit: parse_env(ENV_RATE_LIMIT, DEFAULT_RATE_LIMIT)?,
            rate_window_secs: parse_env(ENV_RATE_WINDOW_SECS, DEFAULT_RATE_WINDOW_SECS)?,
            data_dir: std::env::var_os(ENV_DATA_DIR).map(PathBuf::from),
        })
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn reply_jitter(&self) -> Duration {
        Duration::from_millis(self.reply_jitter_ms)
    }

    pub fn rate_window(&self) -> Duration {
        Duration::from_secs(self.rate_window_secs)
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("Invalid value for {}: {:?}", name, raw))),
        Err(std::env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(AppError::Config(format!("Cannot read {}: {}", name, e))),
    }
}
