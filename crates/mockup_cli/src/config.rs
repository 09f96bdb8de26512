//! Mockup configuration file handling

use anyhow::{Context, Result};
use mockup_core::{ExportOptions, RenderOptions};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "mockup.toml";

/// Top-level Mockup configuration (mockup.toml)
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct MockupConfig {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// Render selection and options
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RenderConfig {
    /// Device id from the catalog; unset renders the empty state
    #[serde(default)]
    pub device: Option<String>,
    /// Background id from the catalog
    #[serde(default = "default_background")]
    pub background: Option<String>,
    #[serde(flatten)]
    pub options: RenderOptions,
}

fn default_background() -> Option<String> {
    Some(mockup_core::default_background().id.to_string())
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            device: None,
            background: default_background(),
            options: RenderOptions::default(),
        }
    }
}

/// Export configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExportConfig {
    /// 1.0 writes PNG, anything lower writes JPEG at that quality
    #[serde(default = "default_quality")]
    pub quality: f32,
    /// Output directory
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_quality() -> f32 {
    1.0
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            quality: default_quality(),
            output_dir: default_output_dir(),
        }
    }
}

impl ExportConfig {
    pub fn options(&self) -> ExportOptions {
        ExportOptions::with_quality(self.quality)
    }
}

impl MockupConfig {
    /// Load the configuration for a run.
    ///
    /// An explicit path must exist. Without one, `mockup.toml` in the working
    /// directory is used when present, defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => Self::load_or_default(Path::new(DEFAULT_CONFIG_FILE)),
        }
    }

    /// Load `path`, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_file(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load a config file that must exist
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("Config file {} does not exist", path.display());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
