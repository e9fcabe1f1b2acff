use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Server root of the stock container image.
pub const DEFAULT_SERVER_ROOT: &str = "/var/www/html";

/// How resolved apps paths are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Toml,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "toml" => Ok(OutputFormat::Toml),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}' (expected toml or json)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Toml => write!(f, "toml"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Global configuration loaded from `~/.config/appspaths/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppsPathsConfig {
    /// Server root the built-in `apps` directory lives under.
    pub server_root: String,
    /// Default output format for `appspaths resolve`.
    pub output_format: OutputFormat,
}

impl Default for AppsPathsConfig {
    fn default() -> Self {
        Self {
            server_root: DEFAULT_SERVER_ROOT.to_string(),
            output_format: OutputFormat::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("appspaths")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AppsPathsConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Like [`load_or_init`], for an explicit config file path.
pub fn load_or_init_at(path: &Path) -> Result<AppsPathsConfig> {
    if !path.exists() {
        let default_cfg = AppsPathsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("failed to write default config {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: AppsPathsConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
