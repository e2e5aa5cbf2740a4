//! Drawing settings pushed from the UI into the drawing surface.

use super::tool::Tool;
use crate::config::Config;
use crate::draw::{Color, FontDescriptor, color};

/// Valid pen width range in pixels.
pub const THICKNESS_RANGE: std::ops::RangeInclusive<u32> = 1..=20;

/// Valid font size range in points.
pub const FONT_SIZE_RANGE: std::ops::RangeInclusive<u32> = 8..=72;

/// Every user-adjustable drawing setting in one value.
///
/// The surface reads these when it builds a preview or commits a shape, so a
/// committed shape keeps the style that was active at commit time.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingSettings {
    /// The user's chosen pen color; kept intact while eraser mode is on
    pub color: Color,
    /// Pen width in pixels
    pub thickness: u32,
    /// Eraser mode paints with the background color
    pub eraser: bool,
    /// Active tool
    pub tool: Tool,
    /// Text placed by the Text tool (empty = Text tool does nothing)
    pub text: String,
    /// Font size for the Text tool in points
    pub font_size: u32,
    /// Font family, weight and style for the Text tool
    pub font_descriptor: FontDescriptor,
    /// Canvas background color, used by eraser mode
    pub background: Color,
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self {
            color: color::BLACK,
            thickness: 3,
            eraser: false,
            tool: Tool::Pen,
            text: String::new(),
            font_size: 24,
            font_descriptor: FontDescriptor::default(),
            background: color::WHITE,
        }
    }
}

impl DrawingSettings {
    /// Builds the initial settings from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            color: config.drawing.default_color.to_color(),
            thickness: clamp_thickness(config.drawing.default_thickness),
            eraser: false,
            tool: config.drawing.default_tool,
            text: String::new(),
            font_size: clamp_font_size(config.drawing.default_font_size),
            font_descriptor: FontDescriptor::new(
                config.drawing.font_family.clone(),
                config.drawing.font_weight.clone(),
                config.drawing.font_style.clone(),
            ),
            background: config.canvas.background_color.to_color(),
        }
    }

    /// Color that new strokes are painted with.
    ///
    /// In eraser mode this is the background color; the chosen color stays
    /// in `color` and comes back as soon as eraser mode is turned off.
    pub fn effective_color(&self) -> Color {
        if self.eraser {
            self.background
        } else {
            self.color
        }
    }
}

/// Clamps a pen width into [`THICKNESS_RANGE`], logging out-of-range input.
pub fn clamp_thickness(thickness: u32) -> u32 {
    if !THICKNESS_RANGE.contains(&thickness) {
        log::warn!(
            "Invalid thickness {thickness}, clamping to {}-{} range",
            THICKNESS_RANGE.start(),
            THICKNESS_RANGE.end()
        );
    }
    thickness.clamp(*THICKNESS_RANGE.start(), *THICKNESS_RANGE.end())
}

/// Clamps a font size into [`FONT_SIZE_RANGE`], logging out-of-range input.
pub fn clamp_font_size(size: u32) -> u32 {
    if !FONT_SIZE_RANGE.contains(&size) {
        log::warn!(
            "Invalid font size {size}, clamping to {}-{} range",
            FONT_SIZE_RANGE.start(),
            FONT_SIZE_RANGE.end()
        );
    }
    size.clamp(*FONT_SIZE_RANGE.start(), *FONT_SIZE_RANGE.end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{RED, WHITE};

    #[test]
    fn eraser_uses_background_without_losing_color() {
        let mut settings = DrawingSettings {
            color: RED,
            ..DrawingSettings::default()
        };
        settings.eraser = true;
        assert_eq!(settings.effective_color(), WHITE);
        assert_eq!(settings.color, RED);

        settings.eraser = false;
        assert_eq!(settings.effective_color(), RED);
    }

    #[test]
    fn clamps_to_ranges() {
        assert_eq!(clamp_thickness(0), 1);
        assert_eq!(clamp_thickness(7), 7);
        assert_eq!(clamp_thickness(50), 20);
        assert_eq!(clamp_font_size(4), 8);
        assert_eq!(clamp_font_size(30), 30);
        assert_eq!(clamp_font_size(100), 72);
    }

    #[test]
    fn from_default_config_matches_defaults() {
        let settings = DrawingSettings::from_config(&Config::default());
        assert_eq!(settings, DrawingSettings::default());
    }
}
