//! Configuration file support for rainbowboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/rainbowboard/config.toml`. Settings include drawing defaults,
//! the canvas size and background, and export preferences.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::{ColorSpec, ImageFormatSpec};
pub use types::{CanvasConfig, DrawingConfig, ExportConfig};

use crate::input::settings::{FONT_SIZE_RANGE, THICKNESS_RANGE};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Valid canvas edge length in pixels.
pub const CANVAS_SIZE_RANGE: std::ops::RangeInclusive<u32> = 1..=8192;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "red"
/// default_thickness = 5
/// default_tool = "rectangle"
///
/// [canvas]
/// width = 1024
/// height = 768
/// background_color = [250, 250, 250]
///
/// [export]
/// save_directory = "~/Pictures/Boards"
/// default_format = "jpg"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Drawing tool defaults (color, width, font, tool)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Canvas size and background color
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Image export preferences
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value, or replaced by
    /// the default, and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_thickness`: 1 - 20
    /// - `default_font_size`: 8 - 72
    /// - `canvas.width`, `canvas.height`: 1 - 8192
    fn validate_and_clamp(&mut self) {
        if !THICKNESS_RANGE.contains(&self.drawing.default_thickness) {
            log::warn!(
                "Invalid default_thickness {}, clamping to 1-20 range",
                self.drawing.default_thickness
            );
            self.drawing.default_thickness = self
                .drawing
                .default_thickness
                .clamp(*THICKNESS_RANGE.start(), *THICKNESS_RANGE.end());
        }

        if !FONT_SIZE_RANGE.contains(&self.drawing.default_font_size) {
            log::warn!(
                "Invalid default_font_size {}, clamping to 8-72 range",
                self.drawing.default_font_size
            );
            self.drawing.default_font_size = self
                .drawing
                .default_font_size
                .clamp(*FONT_SIZE_RANGE.start(), *FONT_SIZE_RANGE.end());
        }

        for (name, value) in [
            ("width", &mut self.canvas.width),
            ("height", &mut self.canvas.height),
        ] {
            if !CANVAS_SIZE_RANGE.contains(&*value) {
                log::warn!("Invalid canvas {name} {value}, clamping to 1-8192 range");
                *value = (*value).clamp(*CANVAS_SIZE_RANGE.start(), *CANVAS_SIZE_RANGE.end());
            }
        }

        if self.drawing.default_color.try_to_color().is_none() {
            log::warn!(
                "Unknown default_color {:?}, falling back to black",
                self.drawing.default_color
            );
            self.drawing.default_color = DrawingConfig::default().default_color;
        }

        if self.canvas.background_color.try_to_color().is_none() {
            log::warn!(
                "Unknown background_color {:?}, falling back to white",
                self.canvas.background_color
            );
            self.canvas.background_color = CanvasConfig::default().background_color;
        }

        // Validate font weight is reasonable
        let valid_weight = matches!(
            self.drawing.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .drawing
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            log::warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.drawing.font_weight
            );
            self.drawing.font_weight = "normal".to_string();
        }

        if !matches!(
            self.drawing.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            log::warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.drawing.font_style
            );
            self.drawing.font_style = "normal".to_string();
        }

        if self.export.filename_template.trim().is_empty() {
            log::warn!("Empty filename_template, falling back to the default");
            self.export.filename_template = ExportConfig::default().filename_template;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/rainbowboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("rainbowboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Loads configuration from an explicit file.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn from_toml_str(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    /// Returns the JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
