//! Configuration and settings management for PlotKit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats; the default location is in the
//! platform-specific configuration directory.
//!
//! Configuration is organized into logical sections:
//! - Plotter settings (pen depths, feed rate, park position)
//! - Font files (script and block Hershey fonts)
//! - Card text (closing line, sender and recipient addresses)
//! - Output location

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Pen plotter motion settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotterSettings {
    /// Z position with the pen touching the paper (mm)
    pub draw_depth: f64,
    /// Z position for pen-up travel (mm)
    pub safe_depth: f64,
    /// Drawing feed rate (mm/min)
    pub feed_rate: f64,
    /// Park position reached at the end of every program
    pub park_x: f64,
    pub park_y: f64,
    pub park_z: f64,
    /// Whether to add N[nnn] line numbers in generated G-code
    pub line_numbers_enabled: bool,
}

impl Default for PlotterSettings {
    fn default() -> Self {
        Self {
            draw_depth: -5.0,
            safe_depth: -3.0,
            feed_rate: 1000.0,
            park_x: 230.0,
            park_y: 180.0,
            park_z: 0.0,
            line_numbers_enabled: false,
        }
    }
}

/// Hershey font file locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSettings {
    /// Font used for the greeting and closing
    pub script_font: PathBuf,
    /// Font used for body text, addresses and the URL
    pub block_font: PathBuf,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            script_font: PathBuf::from("fonts/scripts.jhf"),
            block_font: PathBuf::from("fonts/futural.jhf"),
        }
    }
}

/// Text printed on the card and envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardSettings {
    /// Closing line written inside the card
    pub closing: String,
    /// Return address, one entry per line
    pub sender: Vec<String>,
    /// Recipient address, one entry per line. The envelope is skipped when empty.
    pub recipient: Vec<String>,
}

impl Default for CardSettings {
    fn default() -> Self {
        Self {
            closing: "With warm regards".to_string(),
            sender: Vec::new(),
            recipient: Vec::new(),
        }
    }
}

/// Where generated programs are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub directory: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("output"),
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub plotter: PlotterSettings,
    pub fonts: FontSettings,
    pub card: CardSettings,
    pub output: OutputSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location: `<config_dir>/plotkit/config.toml`
    pub fn default_config_path() -> ConfigResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("plotkit").join("config.toml"))
            .ok_or_else(|| ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string()))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let out_of_range = |key: &str, value: f64| ConfigError::ValueOutOfRange {
            key: key.to_string(),
            value: value.to_string(),
        };

        if self.plotter.feed_rate <= 0.0 {
            return Err(out_of_range("plotter.feed_rate", self.plotter.feed_rate));
        }

        // Z grows upward, so travel must happen above the drawing height.
        if self.plotter.safe_depth <= self.plotter.draw_depth {
            return Err(out_of_range("plotter.safe_depth", self.plotter.safe_depth));
        }

        if self.fonts.script_font.as_os_str().is_empty() {
            return Err(ConfigError::MissingKey("fonts.script_font".to_string()));
        }
        if self.fonts.block_font.as_os_str().is_empty() {
            return Err(ConfigError::MissingKey("fonts.block_font".to_string()));
        }

        if self.output.directory.as_os_str().is_empty() {
            return Err(ConfigError::MissingKey("output.directory".to_string()));
        }

        Ok(())
    }

    /// Resolve font paths relative to the directory holding the config file.
    pub fn resolve_relative_to(&mut self, base: &Path) {
        for path in [
            &mut self.fonts.script_font,
            &mut self.fonts.block_font,
            &mut self.output.directory,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
