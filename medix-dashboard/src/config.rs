//! Configuration for the dashboard.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use medix_common::{Format, IconTable, LoggingConfig};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] medix_common::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Complete dashboard configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Which parts of the progress view are painted.
    #[serde(default)]
    pub view: ViewFeatures,

    /// Bar drawing settings.
    #[serde(default)]
    pub bar: BarConfig,

    /// Extra or replacement genre glyphs.
    #[serde(default)]
    pub icons: BTreeMap<String, String>,

    /// Output format when no `--format` flag is given.
    #[serde(default)]
    pub output: OutputFormat,
}

/// Optional parts of the progress view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewFeatures {
    /// Genre table.
    #[serde(default = "enabled")]
    pub table: bool,

    /// Card per genre.
    #[serde(default)]
    pub cards: bool,

    /// ICO / PNG / RAW legend.
    #[serde(default = "enabled")]
    pub legend: bool,

    /// Pick a light label on short, pale bars. When off every label uses the
    /// default style.
    #[serde(default = "enabled")]
    pub contrast_labels: bool,

    /// `ico / png / raw` counts under each bar.
    #[serde(default = "enabled")]
    pub counts: bool,
}

fn enabled() -> bool {
    true
}

impl Default for ViewFeatures {
    fn default() -> Self {
        Self {
            table: true,
            cards: false,
            legend: true,
            contrast_labels: true,
            counts: true,
        }
    }
}

/// Bar drawing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarConfig {
    /// Width of a genre bar in terminal cells.
    #[serde(default = "default_bar_width")]
    pub width: usize,

    /// Use ANSI colours.
    #[serde(default)]
    pub color: bool,
}

fn default_bar_width() -> usize {
    40
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            width: default_bar_width(),
            color: false,
        }
    }
}

/// How descriptors leave the process.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Painted for a terminal.
    #[default]
    Text,
    /// Descriptors as JSON.
    Json,
    /// Descriptors as CBOR.
    Cbor,
}

impl OutputFormat {
    /// Serialization format, or `None` for painted text.
    pub fn encoding(self) -> Option<Format> {
        match self {
            OutputFormat::Text => None,
            OutputFormat::Json => Some(Format::Json),
            OutputFormat::Cbor => Some(Format::Cbor),
        }
    }
}

const MIN_BAR_WIDTH: usize = 10;
const MAX_BAR_WIDTH: usize = 200;

impl DashboardConfig {
    /// Load configuration from a JSON5 file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config: DashboardConfig = medix_common::load_config(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a JSON5 string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = medix_common::parse_config(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the configuration: an explicit path must exist, otherwise the
    /// per-user file is used when present, otherwise defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "Using per-user config");
                Self::load_from_file(path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BAR_WIDTH..=MAX_BAR_WIDTH).contains(&self.bar.width) {
            return Err(ConfigError::Validation(format!(
                "bar width must be between {} and {}, got {}",
                MIN_BAR_WIDTH, MAX_BAR_WIDTH, self.bar.width
            )));
        }

        if !self.view.table && !self.view.cards {
            return Err(ConfigError::Validation(
                "at least one of view.table or view.cards must be enabled".to_string(),
            ));
        }

        if let Some((name, _)) = self
            .icons
            .iter()
            .find(|(name, glyph)| name.trim().is_empty() || glyph.trim().is_empty())
        {
            return Err(ConfigError::Validation(format!(
                "icon entry '{}' must have a non-empty name and glyph",
                name
            )));
        }

        Ok(())
    }

    /// Built-in icons with the configured overrides applied.
    pub fn icon_table(&self) -> IconTable {
        IconTable::builtin().with_overrides(
            self.icons
                .iter()
                .map(|(name, glyph)| (name.clone(), glyph.clone())),
        )
    }
}

/// `<config dir>/medix/dashboard.json5`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("medix").join("dashboard.json5"))
}
