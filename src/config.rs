use crate::cli::output::OutputFormat;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".recite.toml";

/// Resolved settings after every layer has been applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub language: String,
    pub format: OutputFormat,
    /// Attempts scoring below this ratio make the run fail.
    pub min_accuracy: Option<f64>,
    pub show_reference: bool,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "latin".to_string(),
            format: OutputFormat::default(),
            min_accuracy: None,
            show_reference: true,
            color: true,
        }
    }
}

/// One source of settings (a config file or the command line). Only the
/// keys it actually sets are `Some`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigLayer {
    pub language: Option<String>,
    pub format: Option<OutputFormat>,
    pub min_accuracy: Option<f64>,
    pub show_reference: Option<bool>,
    pub color: Option<bool>,
}

impl ConfigLayer {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Stack `over` on top of `self`; keys set in `over` win.
    pub fn merge(self, over: Self) -> Self {
        Self {
            language: over.language.or(self.language),
            format: over.format.or(self.format),
            min_accuracy: over.min_accuracy.or(self.min_accuracy),
            show_reference: over.show_reference.or(self.show_reference),
            color: over.color.or(self.color),
        }
    }

    /// Fill unset keys from the defaults.
    pub fn resolve(self) -> Config {
        let defaults = Config::default();
        Config {
            language: self.language.unwrap_or(defaults.language),
            format: self.format.unwrap_or(defaults.format),
            min_accuracy: self.min_accuracy.or(defaults.min_accuracy),
            show_reference: self.show_reference.unwrap_or(defaults.show_reference),
            color: self.color.unwrap_or(defaults.color),
        }
    }
}

/// Values given on the command line; unset flags leave the file settings alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub language: Option<String>,
    pub format: Option<OutputFormat>,
    pub min_accuracy: Option<f64>,
    pub show_recognized: bool,
    pub no_color: bool,
}

impl From<Overrides> for ConfigLayer {
    fn from(overrides: Overrides) -> Self {
        Self {
            language: overrides.language,
            format: overrides.format,
            min_accuracy: overrides.min_accuracy,
            show_reference: overrides.show_recognized.then_some(false),
            color: overrides.no_color.then_some(false),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let mut layers = ConfigLayer::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                layers = layers.merge(ConfigLayer::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            layers = layers.merge(ConfigLayer::from_file(&local_path)?);
        }

        Ok(layers.merge(overrides.into()).resolve())
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recite").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
