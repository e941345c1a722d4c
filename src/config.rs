use crate::chart::{ChartError, Item};
use crate::color::Color;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Immutable chart parameters, validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawConfiguration")]
pub struct Configuration {
    hole_size_multiplier: f64,
    spacing: f64,
    highlight_expansion_size: f64,
    horizontal_inset: f64,
    impact_feedback_enabled: bool,
}

impl Configuration {
    pub fn new(
        hole_size_multiplier: f64,
        spacing: f64,
        highlight_expansion_size: f64,
        horizontal_inset: f64,
        impact_feedback_enabled: bool,
    ) -> Result<Self, ChartError> {
        if !(hole_size_multiplier > 0.0 && hole_size_multiplier <= 1.0) {
            return Err(ChartError::invalid_configuration(
                "hole_size_multiplier",
                hole_size_multiplier,
                "must be in (0, 1]",
            ));
        }

        for (field, value) in [
            ("spacing", spacing),
            ("highlight_expansion_size", highlight_expansion_size),
            ("horizontal_inset", horizontal_inset),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ChartError::invalid_configuration(
                    field,
                    value,
                    "must be finite and non-negative",
                ));
            }
        }

        Ok(Self {
            hole_size_multiplier,
            spacing,
            highlight_expansion_size,
            horizontal_inset,
            impact_feedback_enabled,
        })
    }

    pub fn hole_size_multiplier(&self) -> f64 {
        self.hole_size_multiplier
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn highlight_expansion_size(&self) -> f64 {
        self.highlight_expansion_size
    }

    pub fn horizontal_inset(&self) -> f64 {
        self.horizontal_inset
    }

    pub fn impact_feedback_enabled(&self) -> bool {
        self.impact_feedback_enabled
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            hole_size_multiplier: 0.5,
            spacing: 4.0,
            highlight_expansion_size: 16.0,
            horizontal_inset: 32.0,
            impact_feedback_enabled: true,
        }
    }
}

/// Wire shape of [`Configuration`]; every field falls back to the default.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
struct RawConfiguration {
    hole_size_multiplier: f64,
    spacing: f64,
    highlight_expansion_size: f64,
    horizontal_inset: f64,
    impact_feedback_enabled: bool,
}

impl Default for RawConfiguration {
    fn default() -> Self {
        let c = Configuration::default();
        Self {
            hole_size_multiplier: c.hole_size_multiplier,
            spacing: c.spacing,
            highlight_expansion_size: c.highlight_expansion_size,
            horizontal_inset: c.horizontal_inset,
            impact_feedback_enabled: c.impact_feedback_enabled,
        }
    }
}

impl TryFrom<RawConfiguration> for Configuration {
    type Error = ChartError;

    fn try_from(raw: RawConfiguration) -> Result<Self, Self::Error> {
        Self::new(
            raw.hole_size_multiplier,
            raw.spacing,
            raw.highlight_expansion_size,
            raw.horizontal_inset,
            raw.impact_feedback_enabled,
        )
    }
}

/// Everything a host needs to put a chart on screen.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub configuration: Configuration,
    #[serde(default)]
    pub items: Vec<Item>,
    pub background_color: Option<Color>,
    pub hole_color: Option<Color>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn get_settings_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("org", "semicircle", "semicircle-chart")
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("settings.toml"))
}

/// Loads settings from `path` (or the per-user default), layered with `SEMICIRCLE_*`
/// environment overrides such as `SEMICIRCLE_CONFIGURATION__SPACING=2`.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    load_settings_with(path, environment())
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("SEMICIRCLE")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn load_settings_with(
    path: Option<&Path>,
    environment: config::Environment,
) -> Result<Settings, ConfigError> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (get_settings_path()?, false),
    };

    let s = config::Config::builder()
        .add_source(config::File::from(path).required(required))
        .add_source(environment)
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default(path: Option<&Path>) -> Settings {
    match load_settings(path) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("Falling back to default settings: {}", e);
            Settings::default()
        }
    }
}

/// Writes the commented template to the per-user settings path unless a file is already there.
pub fn write_default_settings() -> Result<PathBuf, ConfigError> {
    let path = get_settings_path()?;
    write_template(&path)?;
    Ok(path)
}

/// Returns whether a template was written; existing settings are left alone.
fn write_template(path: &Path) -> Result<bool, ConfigError> {
    if path.exists() {
        log::debug!("Keeping existing settings at {}", path.display());
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    fs_err::write(path, DEFAULT_SETTINGS)?;
    log::info!("Wrote settings template to {}", path.display());
    Ok(true)
}

const DEFAULT_SETTINGS: &str = include_str!("default_settings.toml");
