//! PlotKit Settings Crate
//!
//! Handles plotter configuration, font locations, card text, and settings
//! persistence.

pub mod config;
pub mod error;

pub use config::{CardSettings, Config, FontSettings, OutputSettings, PlotterSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
