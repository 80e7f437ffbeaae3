use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Largest declared `Content-Length` accepted by the header pre-check (20 MiB).
pub const DEFAULT_MAX_CONTENT_LENGTH: u64 = 20 * 1024 * 1024;

/// Global configuration loaded from `~/.config/imgfetch/config.toml`.
///
/// Keys missing from the file take their default values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Directory images are saved into; relative paths resolve against the working directory.
    pub output_dir: PathBuf,
    /// Timeout in seconds for the HEAD pre-check.
    pub head_timeout_secs: u64,
    /// Timeout in seconds for the full GET.
    pub get_timeout_secs: u64,
    /// Declared sizes above this many bytes are rejected before download.
    pub max_content_length: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("Fetched_Images"),
            head_timeout_secs: 10,
            get_timeout_secs: 20,
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
        }
    }
}

impl FetchConfig {
    pub fn head_timeout(&self) -> Duration {
        Duration::from_secs(self.head_timeout_secs)
    }

    pub fn get_timeout(&self) -> Duration {
        Duration::from_secs(self.get_timeout_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FetchConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<FetchConfig> {
    if !path.exists() {
        let default_cfg = FetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: FetchConfig = toml::from_str(&data)?;
    Ok(cfg)
}
