//! Configuration type definitions.

use super::enums::{ColorSpec, ImageFormatSpec};
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the tool state when the board first opens. Users change these
/// values at runtime through the settings mutators.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default pen color - either a named color or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default pen width in pixels (valid range: 1 - 20)
    #[serde(default = "default_thickness")]
    pub default_thickness: u32,

    /// Default font size for the Text tool in points (valid range: 8 - 72)
    #[serde(default = "default_font_size")]
    pub default_font_size: u32,

    /// Tool selected at startup (pen, line, rectangle, circle, triangle, text)
    #[serde(default)]
    pub default_tool: Tool,

    /// Font family name for text rendering (e.g., "Sans", "Monospace")
    /// Falls back to "Sans" if the family is not installed
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", 400, 700)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_thickness: default_thickness(),
            default_font_size: default_font_size(),
            default_tool: Tool::default(),
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
        }
    }
}

/// Canvas dimensions and background.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels; exported images have exactly this width (1 - 8192)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Canvas height in pixels (1 - 8192)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Background fill, also the color the eraser paints with
    #[serde(default = "default_background")]
    pub background_color: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background_color: default_background(),
        }
    }
}

/// Image export settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory used when an export target is a directory or `~`-relative
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// File name template for generated names (chrono format specifiers)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// Format used for generated file names
    #[serde(default)]
    pub default_format: ImageFormatSpec,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
            default_format: ImageFormatSpec::default(),
        }
    }
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_thickness() -> u32 {
    3
}

fn default_font_size() -> u32 {
    24
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_save_directory() -> String {
    dirs::picture_dir()
        .map(|dir| dir.join("Rainbowboard").to_string_lossy().into_owned())
        .unwrap_or_else(|| "~/Pictures/Rainbowboard".to_string())
}

fn default_filename_template() -> String {
    "board_%Y-%m-%d_%H%M%S".to_string()
}
