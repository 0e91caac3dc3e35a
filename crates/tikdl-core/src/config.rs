use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// HTTP settings loaded from `~/.config/tikdl/config.toml`.
///
/// Every field is optional in the file; missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TikdlConfig {
    /// Seconds allowed for the TCP/TLS connect phase.
    pub connect_timeout_secs: u64,
    /// Hard cap on a whole transfer in seconds (None = no cap).
    pub timeout_secs: Option<u64>,
    /// Abort a transfer that stays below this many bytes/sec ...
    pub low_speed_limit_bytes: u32,
    /// ... for this many seconds.
    pub low_speed_time_secs: u64,
    /// Maximum redirects followed per request.
    pub max_redirections: u32,
    /// Optional User-Agent header sent with every request.
    pub user_agent: Option<String>,
}

impl Default for TikdlConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 30,
            timeout_secs: None,
            low_speed_limit_bytes: 1024,
            low_speed_time_secs: 60,
            max_redirections: 10,
            user_agent: None,
        }
    }
}

impl TikdlConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn low_speed_time(&self) -> Duration {
        Duration::from_secs(self.low_speed_time_secs)
    }
}

/// Location of the config file. The file itself may not exist.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("tikdl")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load configuration from the XDG config dir, falling back to defaults when no
/// file exists. Unlike most tools the file is never created on our behalf.
pub fn load() -> Result<TikdlConfig> {
    load_at(&config_path()?)
}

/// Like [`load_from`], but a missing file yields defaults. Nothing is written.
pub fn load_at(path: &Path) -> Result<TikdlConfig> {
    if !path.is_file() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(TikdlConfig::default());
    }
    load_from(path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<TikdlConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: TikdlConfig = toml::from_str(&data)
        .with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
