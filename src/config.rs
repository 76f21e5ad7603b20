use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::annotate::RenderMode;
use crate::apex::ShutterRangePolicy;

/// Top-level configuration for exif-caption.
///
/// Every field has a default, so a config file only needs the keys it changes.
///
/// # Loading
///
/// ```rust,no_run
/// use exif_caption::config::Config;
///
/// // From a JSON file
/// let config = Config::load(Some("config.json".as_ref())).unwrap();
///
/// // Or use defaults and customize
/// let mut config = Config::default();
/// config.source = Some("DSC_6846.jpg".into());
/// config.output.destination = Some("DSC_6846_labeled.png".into());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Image to caption. The command-line path takes precedence.
    pub source: Option<PathBuf>,
    /// APEX conversion behavior.
    pub conversion: ConversionConfig,
    /// How the caption canvas is prepared.
    pub render: RenderConfig,
    /// Where (and whether) the annotated canvas is written.
    pub output: OutputConfig,
}

/// APEX conversion settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// If `true`, a shutter APEX value outside 30s..1/8000s is an error
    /// instead of an empty label.
    pub strict_shutter_range: bool,
}

impl ConversionConfig {
    pub fn shutter_policy(&self) -> ShutterRangePolicy {
        if self.strict_shutter_range {
            ShutterRangePolicy::Reject
        } else {
            ShutterRangePolicy::Preserve
        }
    }
}

/// Canvas settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// `"blank"` draws on an empty canvas, `"composite"` over the source pixels.
    pub mode: RenderMode,
}

/// Output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Encode the annotated canvas here; the format follows the extension.
    /// When unset the canvas stays in memory.
    pub destination: Option<PathBuf>,
}

impl Config {
    /// Resolve the config file path: same directory as the executable.
    pub fn config_path() -> Result<PathBuf> {
        let exe_path = std::env::current_exe().context("Failed to get executable path")?;
        let exe_dir = exe_path
            .parent()
            .context("Failed to get executable directory")?;
        Ok(exe_dir.join("config.json"))
    }

    /// Load config from the given path, or from the default location.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        if !config_path.exists() {
            log::debug!(
                "Config file not found at {}. Using defaults.",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;
        let config: Config =
            serde_json::from_str(&contents).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Save config to the given path, or to the default location.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&config_path, contents).context("Failed to write config file")?;
        log::info!("Config saved to {}", config_path.display());
        Ok(())
    }
}
