use crate::draw::{Shape, StrokeStyle, render::render_polygon, render_freehand_borrowed, render_shape_styled};
use crate::input::tool::Tool;

use super::{DrawingState, InputState, TriangleState};

impl InputState {
    /// Returns the pending shape for live preview, built with the current
    /// settings.
    ///
    /// # Returns
    /// - `Some(Shape)` while dragging, or once two triangle vertices are placed
    /// - `None` when nothing is pending (including a single triangle vertex)
    ///
    /// # Note
    /// For the Pen this clones the points vector. Prefer
    /// [`InputState::render_provisional_shape`] when drawing long strokes.
    pub fn provisional_shape(&self) -> Option<Shape> {
        if let DrawingState::Drawing {
            tool,
            start_x,
            start_y,
            current_x,
            current_y,
            points,
        } = &self.state
        {
            return self.build_drag_shape(
                *tool,
                (*start_x, *start_y),
                (*current_x, *current_y),
                points,
            );
        }

        if let TriangleState::TwoVertices { v0, v1, cursor } = self.triangle {
            return Some(Shape::Triangle {
                vertices: [v0, v1, cursor],
                color: self.settings.effective_color(),
                thick: self.settings.thickness,
            });
        }

        None
    }

    /// Renders the pending shape with a dashed stroke.
    ///
    /// # Returns
    /// `true` if a provisional shape was rendered, `false` otherwise
    pub fn render_provisional_shape(&self, ctx: &cairo::Context) -> bool {
        let color = self.settings.effective_color();
        let thick = self.settings.thickness;

        match &self.state {
            DrawingState::Drawing {
                tool: Tool::Pen,
                points,
                ..
            } => {
                // Borrow the points instead of cloning them every frame
                render_freehand_borrowed(ctx, points, color, thick, StrokeStyle::Dashed);
                return true;
            }
            DrawingState::Drawing { .. } => {
                if let Some(shape) = self.provisional_shape() {
                    render_shape_styled(ctx, &shape, StrokeStyle::Dashed);
                    return true;
                }
            }
            DrawingState::Idle => {}
        }

        if let TriangleState::TwoVertices { v0, v1, cursor } = self.triangle {
            render_polygon(ctx, &[v0, v1, cursor], color, thick, StrokeStyle::Dashed);
            return true;
        }

        false
    }
}
