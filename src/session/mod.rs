//! History/session controller.
//!
//! A [`Session`] owns the committed-shape history and the drawing surface. It
//! forwards pointer input to the surface, turns surface events into history
//! entries and status text, and implements undo, confirmed clear and raster
//! export.

mod confirm;
mod status;

pub use confirm::ClearConfirmation;

use crate::config::{Config, ExportConfig};
use crate::draw::{Color, Frame, Shape, render_background, render_shapes};
use crate::export::{self, ExportError, file};
use crate::input::{DrawingSettings, InputState, MouseButton, SurfaceEvent, Tool};
use std::path::{Path, PathBuf};

/// One drawing board: history, surface, canvas and export settings.
#[derive(Debug)]
pub struct Session {
    frame: Frame,
    surface: InputState,
    width: u32,
    height: u32,
    background: Color,
    export: ExportConfig,
    status: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Session {
    /// Creates an empty board from a loaded configuration.
    pub fn new(config: &Config) -> Self {
        let settings = DrawingSettings::from_config(config);
        let status = status::ready(settings.tool);
        Self {
            frame: Frame::new(),
            surface: InputState::new(settings),
            width: config.canvas.width,
            height: config.canvas.height,
            background: config.canvas.background_color.to_color(),
            export: config.export.clone(),
            status,
        }
    }

    /// Committed shapes, oldest first. This is exactly what is rendered and exported.
    pub fn shapes(&self) -> &[Shape] {
        &self.frame.shapes
    }

    /// Number of committed shapes.
    pub fn history_len(&self) -> usize {
        self.frame.len()
    }

    /// Whether the undo action should be enabled.
    pub fn undo_available(&self) -> bool {
        !self.frame.is_empty()
    }

    /// The drawing surface, for reading settings and pending state.
    pub fn surface(&self) -> &InputState {
        &self.surface
    }

    /// Canvas size in pixels.
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Latest status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    // ------------------------------------------------------------------
    // Pointer input
    // ------------------------------------------------------------------

    pub fn pointer_down(&mut self, button: MouseButton, x: i32, y: i32) {
        self.surface.on_mouse_press(button, x, y);
        self.drain_surface_events();
    }

    pub fn pointer_move(&mut self, x: i32, y: i32) {
        self.surface.on_mouse_motion(x, y);
        self.drain_surface_events();
    }

    pub fn pointer_up(&mut self, button: MouseButton, x: i32, y: i32) {
        self.surface.on_mouse_release(button, x, y);
        self.drain_surface_events();
    }

    fn drain_surface_events(&mut self) {
        for event in self.surface.take_events() {
            match event {
                SurfaceEvent::CursorMoved { x, y } => {
                    let settings = self.surface.settings();
                    self.status = status::cursor(
                        settings.tool,
                        x,
                        y,
                        settings.color,
                        self.frame.len(),
                    );
                }
                SurfaceEvent::Clicked { .. } => {}
                SurfaceEvent::ShapeCommitted(shape) => self.commit(shape),
            }
        }
    }

    // ------------------------------------------------------------------
    // History
    // ------------------------------------------------------------------

    /// Pushes a finished shape onto the history; undo becomes available.
    pub fn commit(&mut self, shape: Shape) {
        let text_anchor = match &shape {
            Shape::Text { x, y, text, .. } => Some((*x, *y, text.clone())),
            _ => None,
        };

        self.frame.add_shape(shape);
        let history = self.frame.len();
        self.status = match text_anchor {
            Some((x, y, text)) => status::text_added(x, y, &text, history),
            None => status::committed(history),
        };
        log::info!("Shape committed ({history} in history)");
    }

    /// Removes the most recently committed shape.
    ///
    /// Returns `None` (and changes nothing) when the history is empty.
    pub fn undo(&mut self) -> Option<Shape> {
        let shape = self.frame.undo()?;
        self.status = status::undone(self.frame.len());
        log::info!(
            "Undid {} shape, {} remaining",
            shape.kind_name(),
            self.frame.len()
        );
        Some(shape)
    }

    /// Empties the board after asking for confirmation.
    ///
    /// Returns true if the board was cleared. A confirmed clear also discards
    /// the pending shape, so nothing is left on screen. Declining leaves
    /// history, pending shape and status untouched.
    pub fn clear(&mut self, confirmation: &mut impl ClearConfirmation) -> bool {
        if !confirmation.confirm_clear() {
            log::debug!("Clear declined");
            return false;
        }

        self.frame.clear();
        self.surface.cancel_pending();
        self.status = status::cleared();
        log::info!("Canvas cleared");
        true
    }

    // ------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------

    pub fn set_color(&mut self, color: Color) {
        self.surface.set_color(color);
        self.status = status::color_changed(color, self.frame.len());
    }

    pub fn set_hue(&mut self, hue: u32) {
        self.set_color(Color::from_hue(hue));
    }

    pub fn set_thickness(&mut self, thickness: u32) {
        self.surface.set_thickness(thickness);
        self.status = status::width_changed(self.surface.settings().thickness, self.frame.len());
    }

    pub fn set_eraser(&mut self, enabled: bool) {
        self.surface.set_eraser(enabled);
        self.status = status::eraser(enabled, self.frame.len());
    }

    pub fn toggle_eraser(&mut self) -> bool {
        let enabled = self.surface.toggle_eraser();
        self.status = status::eraser(enabled, self.frame.len());
        enabled
    }

    /// Selects a tool; any pending shape is discarded.
    pub fn set_tool(&mut self, tool: Tool) {
        self.surface.set_tool(tool);
        self.status = status::tool_switched(tool, self.frame.len());
    }

    pub fn set_text_properties(&mut self, text: &str, font_size: u32) {
        self.surface.set_text_properties(text, font_size);
    }

    // ------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------

    /// Draws the board for display: background, committed shapes, then the
    /// dashed preview of the pending shape.
    pub fn render(&self, ctx: &cairo::Context) {
        render_background(ctx, self.background);
        render_shapes(ctx, &self.frame.shapes);
        self.surface.render_provisional_shape(ctx);
    }

    /// Flattens the committed shapes into an image file.
    ///
    /// An empty path means the user cancelled and returns `Ok(None)`. Other
    /// paths are resolved by [`file::resolve_target`]. The pending preview is
    /// never part of the image.
    pub fn export_to_image(&mut self, path: impl AsRef<Path>) -> Result<Option<PathBuf>, ExportError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            log::debug!("Export cancelled (empty path)");
            return Ok(None);
        }

        let (target, format) = file::resolve_target(path, &self.export);
        self.write_export(&target, format).map(Some)
    }

    /// Exports into the configured save directory with a generated name.
    pub fn export_to_default(&mut self) -> Result<PathBuf, ExportError> {
        let (target, format) = file::default_target(&self.export)?;
        self.write_export(&target, format)
    }

    fn write_export(
        &mut self,
        target: &Path,
        format: export::ExportFormat,
    ) -> Result<PathBuf, ExportError> {
        let written = export::export_shapes(
            &self.frame.shapes,
            self.width,
            self.height,
            self.background,
            target,
            format,
        )
        .inspect_err(|err| log::warn!("Export to {} failed: {}", target.display(), err))?;

        self.status = status::saved(&written, self.frame.len());
        Ok(written)
    }
}
