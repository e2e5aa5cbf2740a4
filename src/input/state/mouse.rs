use crate::draw::Shape;
use crate::input::{
    events::{MouseButton, SurfaceEvent},
    tool::Tool,
};

use super::{DrawingState, InputState, TriangleState};

impl InputState {
    /// Processes a mouse button press event.
    ///
    /// # Behavior
    /// - Left press with a drag tool while Idle: starts a drag anchored at (x, y)
    /// - Left press with Triangle: advances the three-click sequence
    /// - Left press with Text: places the current text immediately
    /// - Left press while already dragging: ignored
    /// - Right press: cancels the pending shape
    pub fn on_mouse_press(&mut self, button: MouseButton, x: i32, y: i32) {
        match button {
            MouseButton::Left => {
                self.cursor = Some((x, y));
                let tool = self.settings.tool;
                if tool.is_drag_tool() {
                    self.start_drag(tool, x, y);
                } else if tool == Tool::Triangle {
                    self.triangle_click(x, y);
                } else {
                    self.emit(SurfaceEvent::Clicked { x, y });
                    self.place_text(x, y);
                }
            }
            MouseButton::Right => {
                self.cancel_pending();
            }
            MouseButton::Middle => {}
        }
    }

    /// Processes mouse motion events.
    ///
    /// Always reports the cursor position. While dragging, the Pen appends
    /// the point to its path and the other drag tools move their free
    /// corner; with two triangle vertices placed, the preview's third vertex
    /// follows the cursor.
    pub fn on_mouse_motion(&mut self, x: i32, y: i32) {
        self.cursor = Some((x, y));
        self.emit(SurfaceEvent::CursorMoved { x, y });

        if let DrawingState::Drawing {
            tool,
            current_x,
            current_y,
            points,
            ..
        } = &mut self.state
        {
            if *tool == Tool::Pen {
                points.push((x, y));
            }
            *current_x = x;
            *current_y = y;
            self.needs_redraw = true;
        }

        if let TriangleState::TwoVertices { cursor, .. } = &mut self.triangle {
            *cursor = (x, y);
            self.needs_redraw = true;
        }
    }

    /// Processes mouse button release events.
    ///
    /// When the left button is released during a drag, the shape is built
    /// with the current settings and committed, and the surface returns to
    /// Idle. Line, Rectangle and Circle use the release point as their final
    /// corner; the Pen path is left as drawn. Triangle and Text commit on
    /// press, so release does nothing for them.
    pub fn on_mouse_release(&mut self, button: MouseButton, x: i32, y: i32) {
        if button != MouseButton::Left {
            return;
        }

        let DrawingState::Drawing {
            tool,
            start_x,
            start_y,
            points,
            ..
        } = std::mem::replace(&mut self.state, DrawingState::Idle)
        else {
            return;
        };

        if let Some(shape) = self.build_drag_shape(tool, (start_x, start_y), (x, y), &points) {
            self.commit(shape);
        }
    }

    fn start_drag(&mut self, tool: Tool, x: i32, y: i32) {
        if !matches!(self.state, DrawingState::Idle) {
            log::debug!("Ignoring press at ({x}, {y}); drag already in progress");
            return;
        }

        self.emit(SurfaceEvent::Clicked { x, y });
        self.state = DrawingState::Drawing {
            tool,
            start_x: x,
            start_y: y,
            current_x: x,
            current_y: y,
            points: vec![(x, y)],
        };
        self.needs_redraw = true;
    }

    fn triangle_click(&mut self, x: i32, y: i32) {
        self.triangle = match self.triangle {
            TriangleState::Empty => TriangleState::OneVertex { v0: (x, y) },
            TriangleState::OneVertex { v0 } => TriangleState::TwoVertices {
                v0,
                v1: (x, y),
                cursor: v0,
            },
            TriangleState::TwoVertices { v0, v1, .. } => {
                let shape = Shape::Triangle {
                    vertices: [v0, v1, (x, y)],
                    color: self.settings.effective_color(),
                    thick: self.settings.thickness,
                };
                self.commit(shape);
                TriangleState::Empty
            }
        };
        self.needs_redraw = true;
    }

    fn place_text(&mut self, x: i32, y: i32) {
        if self.settings.text.is_empty() {
            log::debug!("Text tool clicked with empty text; nothing to place");
            return;
        }

        let shape = Shape::Text {
            x,
            y,
            text: self.settings.text.clone(),
            color: self.settings.effective_color(),
            size: self.settings.font_size,
            font_descriptor: self.settings.font_descriptor.clone(),
        };
        self.commit(shape);
    }
}
