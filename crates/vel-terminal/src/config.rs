//! `config.toml` for the `vel` binary.
//!
//! Every field is optional; missing fields take their defaults.
//!
//! ```toml
//! feed_interval_ms = 8000
//! stats_interval_ms = 5000
//! cursor_interval_ms = 530
//! tick_rate_ms = 50
//! start_section = "console"
//! seed = 42
//! color_mode = "256"
//! mouse = true
//! social_url = "https://twitter.com"
//! log_level = "debug"
//! log_file = "/tmp/vel.log"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;
use vel_core::content::DEFAULT_SOCIAL_URL;
use vel_core::{Periods, Section};

use crate::color::ColorMode;
use crate::error::VelError;

const APP_DIR: &str = "vel";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VelConfig {
    pub feed_interval_ms: u64,
    pub stats_interval_ms: u64,
    pub cursor_interval_ms: u64,
    /// Upper bound on input polling between frames.
    pub tick_rate_ms: u64,
    pub start_section: Section,
    /// Fixed RNG seed; unset draws one from the OS.
    pub seed: Option<u64>,
    /// Unset detects from `COLORTERM`/`TERM`.
    pub color_mode: Option<ColorMode>,
    pub mouse: bool,
    pub social_url: String,
    pub log_level: String,
    /// Logs are discarded when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for VelConfig {
    fn default() -> Self {
        Self {
            feed_interval_ms: Periods::DEFAULT_FEED_MS,
            stats_interval_ms: Periods::DEFAULT_STATS_MS,
            cursor_interval_ms: Periods::DEFAULT_CURSOR_MS,
            tick_rate_ms: 50,
            start_section: Section::default(),
            seed: None,
            color_mode: None,
            mouse: false,
            social_url: DEFAULT_SOCIAL_URL.to_string(),
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl VelConfig {
    /// Candidate config locations, most specific first:
    /// `$XDG_CONFIG_HOME/vel/config.toml`, then `~/.config/vel/config.toml`.
    pub fn config_paths() -> Vec<PathBuf> {
        Self::config_paths_from(
            std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
            std::env::var_os("HOME").map(PathBuf::from),
        )
    }

    fn config_paths_from(xdg: Option<PathBuf>, home: Option<PathBuf>) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(xdg) = xdg {
            paths.push(xdg.join(APP_DIR).join(CONFIG_FILE));
        }
        if let Some(home) = home {
            paths.push(home.join(".config").join(APP_DIR).join(CONFIG_FILE));
        }
        paths
    }

    /// First readable and valid config on the search path, else defaults,
    /// plus the broken files passed over on the way.
    pub fn load() -> (Self, Vec<SkippedConfig>) {
        Self::load_first(&Self::config_paths())
    }

    pub fn load_first(paths: &[PathBuf]) -> (Self, Vec<SkippedConfig>) {
        let mut skipped = Vec::new();
        for path in paths.iter().filter(|path| path.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => return (config, skipped),
                Err(error) => skipped.push(SkippedConfig {
                    path: path.clone(),
                    error,
                }),
            }
        }
        (Self::default(), skipped)
    }

    /// Load and validate a specific file.
    pub fn load_from_file(path: &Path) -> Result<Self, VelError> {
        let contents = fs::read_to_string(path).map_err(|source| VelError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(toml: &str) -> Result<Self, VelError> {
        let config: Self = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, VelError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), VelError> {
        let periods = [
            ("feed_interval_ms", self.feed_interval_ms),
            ("stats_interval_ms", self.stats_interval_ms),
            ("cursor_interval_ms", self.cursor_interval_ms),
            ("tick_rate_ms", self.tick_rate_ms),
        ];
        if let Some((name, _)) = periods.iter().find(|(_, ms)| *ms == 0) {
            return Err(VelError::InvalidConfig(format!("{name} must be non-zero")));
        }
        Ok(())
    }

    pub const fn periods(&self) -> Periods {
        Periods {
            feed_ms: self.feed_interval_ms,
            stats_ms: self.stats_interval_ms,
            cursor_ms: self.cursor_interval_ms,
        }
    }
}

/// A config file on the search path that exists but could not be used.
///
/// Discovery runs before the subscriber is installed, so callers report
/// these with [`SkippedConfig::warn`] once logging is up.
#[derive(Debug)]
pub struct SkippedConfig {
    pub path: PathBuf,
    pub error: VelError,
}

impl SkippedConfig {
    pub fn warn(&self) {
        warn!(path = %self.path.display(), error = %self.error, "skipping config");
    }
}
