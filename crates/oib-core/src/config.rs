use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::listing::Timeouts;

/// Address manifest published alongside the vendor image catalog.
const DEFAULT_MANIFEST_URL: &str =
    "https://raw.githubusercontent.com/awesometic/odroid-etcher/master/assets/odroid-image-addresses.json";

/// Global configuration loaded from `~/.config/oib/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OibConfig {
    /// Remote manifest describing boards, distributors, and mirror addresses.
    #[serde(default = "default_manifest_url")]
    pub manifest_url: String,
    /// TCP connect timeout for listing fetches, in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout for listing fetches, in seconds.
    pub request_timeout_secs: u64,
    /// Bounded timeout for the manifest fetch and its connectivity probe, in seconds.
    pub manifest_timeout_secs: u64,
}

fn default_manifest_url() -> String {
    DEFAULT_MANIFEST_URL.to_string()
}

impl Default for OibConfig {
    fn default() -> Self {
        Self {
            manifest_url: default_manifest_url(),
            connect_timeout_secs: 15,
            request_timeout_secs: 30,
            manifest_timeout_secs: 5,
        }
    }
}

impl OibConfig {
    /// Timeout pair applied to every listing-page GET.
    pub fn listing_timeouts(&self) -> Timeouts {
        Timeouts {
            connect: Duration::from_secs(self.connect_timeout_secs),
            request: Duration::from_secs(self.request_timeout_secs),
        }
    }

    /// Timeout pair applied to the manifest GET (bounded, short).
    pub fn manifest_timeouts(&self) -> Timeouts {
        Timeouts {
            connect: Duration::from_secs(self.manifest_timeout_secs),
            request: Duration::from_secs(self.manifest_timeout_secs),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("oib")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<OibConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = OibConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: OibConfig = toml::from_str(&data)?;
    Ok(cfg)
}
