use crate::draw::Color;
use crate::input::settings::{DrawingSettings, clamp_font_size, clamp_thickness};
use crate::input::tool::Tool;

use super::InputState;

impl InputState {
    /// Sets the pen color.
    ///
    /// While eraser mode is on the new color is stored but not used until
    /// eraser mode is turned off.
    pub fn set_color(&mut self, color: Color) {
        self.settings.color = color;
        self.needs_redraw = true;
        log::debug!("Color set to {}", color.hex_name());
    }

    /// Sets the pen color from a hue in degrees at full saturation.
    pub fn set_hue(&mut self, hue: u32) {
        self.set_color(Color::from_hue(hue));
    }

    /// Sets the pen width, clamped to 1-20 px.
    pub fn set_thickness(&mut self, thickness: u32) {
        self.settings.thickness = clamp_thickness(thickness);
        self.needs_redraw = true;
        log::debug!("Thickness set to {}px", self.settings.thickness);
    }

    /// Turns eraser mode on or off.
    pub fn set_eraser(&mut self, enabled: bool) {
        self.settings.eraser = enabled;
        self.needs_redraw = true;
        log::debug!("Eraser mode {}", if enabled { "on" } else { "off" });
    }

    /// Flips eraser mode and returns the new state.
    pub fn toggle_eraser(&mut self) -> bool {
        let enabled = !self.settings.eraser;
        self.set_eraser(enabled);
        enabled
    }

    /// Selects the active tool.
    ///
    /// Any pending shape (a drag or a partial triangle) is discarded without
    /// a commit, so no state carries over between tools.
    pub fn set_tool(&mut self, tool: Tool) {
        self.cancel_pending();
        self.settings.tool = tool;
        self.needs_redraw = true;
        log::debug!("Tool set to {tool}");
    }

    /// Sets the text placed by the Text tool and its font size (8-72 pt).
    pub fn set_text_properties(&mut self, text: &str, font_size: u32) {
        self.settings.text = text.to_string();
        self.settings.font_size = clamp_font_size(font_size);
    }

    /// Replaces all settings at once.
    ///
    /// Switching to a different tool this way cancels the pending shape just
    /// like [`InputState::set_tool`]. The canvas background belongs to the
    /// board, so the incoming `background` is ignored.
    pub fn apply_settings(&mut self, settings: DrawingSettings) {
        if settings.tool != self.settings.tool {
            self.cancel_pending();
        }
        self.settings = DrawingSettings {
            thickness: clamp_thickness(settings.thickness),
            font_size: clamp_font_size(settings.font_size),
            background: self.settings.background,
            ..settings
        };
        self.needs_redraw = true;
    }
}
