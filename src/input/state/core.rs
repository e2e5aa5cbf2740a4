//! Drawing state machines and input state management.

use crate::draw::Shape;
use crate::input::events::SurfaceEvent;
use crate::input::settings::DrawingSettings;
use crate::input::tool::Tool;
use crate::util;

/// Drag state machine for Pen, Line, Rectangle and Circle.
///
/// Tracks whether the user is idle or holding the button down on a shape.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingState {
    /// Not dragging - waiting for a press
    Idle,
    /// Button held down while building a shape
    Drawing {
        /// Which tool is being used for this shape
        tool: Tool,
        /// Starting X coordinate (where the button was pressed)
        start_x: i32,
        /// Starting Y coordinate (where the button was pressed)
        start_y: i32,
        /// Latest pointer X coordinate
        current_x: i32,
        /// Latest pointer Y coordinate
        current_y: i32,
        /// Accumulated points for freehand drawing
        points: Vec<(i32, i32)>,
    },
}

/// Click-sequence state machine for the Triangle tool.
///
/// Runs independently of [`DrawingState`]; only the Triangle tool drives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleState {
    /// No vertex placed yet
    Empty,
    /// First vertex placed; nothing is previewed yet
    OneVertex { v0: (i32, i32) },
    /// Two vertices placed; the preview follows the cursor as the third
    TwoVertices {
        v0: (i32, i32),
        v1: (i32, i32),
        cursor: (i32, i32),
    },
}

/// The drawing surface: pointer handling, pending shapes and live preview.
///
/// It owns no history. Finished shapes leave as [`SurfaceEvent::ShapeCommitted`]
/// and are stored by whoever drains [`InputState::take_events`].
#[derive(Debug)]
pub struct InputState {
    /// Current drawing settings (color, width, eraser, tool, text)
    pub(super) settings: DrawingSettings,
    /// Drag state machine
    pub state: DrawingState,
    /// Triangle click-sequence state machine
    pub triangle: TriangleState,
    /// Last known pointer position
    pub cursor: Option<(i32, i32)>,
    /// Whether the preview needs to be redrawn
    pub needs_redraw: bool,
    /// Events waiting to be drained by the session
    events: Vec<SurfaceEvent>,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(DrawingSettings::default())
    }
}

impl InputState {
    /// Creates an idle surface with the given settings.
    pub fn new(settings: DrawingSettings) -> Self {
        Self {
            settings,
            state: DrawingState::Idle,
            triangle: TriangleState::Empty,
            cursor: None,
            needs_redraw: true,
            events: Vec::new(),
        }
    }

    /// Current drawing settings.
    pub fn settings(&self) -> &DrawingSettings {
        &self.settings
    }

    /// Drains queued events in the order they were emitted.
    pub fn take_events(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.events)
    }

    pub(super) fn emit(&mut self, event: SurfaceEvent) {
        self.events.push(event);
    }

    pub(super) fn commit(&mut self, shape: Shape) {
        log::debug!("Committing {} shape", shape.kind_name());
        self.needs_redraw = true;
        self.emit(SurfaceEvent::ShapeCommitted(shape));
    }

    /// Returns true while a drag or a partial triangle is in progress.
    pub fn has_pending_shape(&self) -> bool {
        !matches!(self.state, DrawingState::Idle)
            || !matches!(self.triangle, TriangleState::Empty)
    }

    /// Discards any pending drag or partial triangle without committing.
    ///
    /// Returns true if something was discarded.
    pub fn cancel_pending(&mut self) -> bool {
        if !self.has_pending_shape() {
            return false;
        }
        log::debug!(
            "Discarding pending shape (drag: {:?}, triangle: {:?})",
            !matches!(self.state, DrawingState::Idle),
            self.triangle
        );
        self.state = DrawingState::Idle;
        self.triangle = TriangleState::Empty;
        self.needs_redraw = true;
        true
    }

    /// Builds the shape described by a drag from `start` to `current`.
    ///
    /// Uses the settings as they are now; callers decide whether the result
    /// is a preview or a commit.
    pub(super) fn build_drag_shape(
        &self,
        tool: Tool,
        start: (i32, i32),
        current: (i32, i32),
        points: &[(i32, i32)],
    ) -> Option<Shape> {
        let color = self.settings.effective_color();
        let thick = self.settings.thickness;

        match tool {
            Tool::Pen => Some(Shape::Freehand {
                points: points.to_vec(),
                color,
                thick,
            }),
            Tool::Line => Some(Shape::Line {
                x1: start.0,
                y1: start.1,
                x2: current.0,
                y2: current.1,
                color,
                thick,
            }),
            Tool::Rectangle => {
                let (x, y, w, h) = util::normalized_rect(start.0, start.1, current.0, current.1);
                Some(Shape::Rect {
                    x,
                    y,
                    w,
                    h,
                    color,
                    thick,
                })
            }
            Tool::Circle => {
                let (x, y, w, h) = util::normalized_rect(start.0, start.1, current.0, current.1);
                Some(Shape::Ellipse {
                    x,
                    y,
                    w,
                    h,
                    color,
                    thick,
                })
            }
            // Not drag tools
            Tool::Triangle | Tool::Text => None,
        }
    }
}
