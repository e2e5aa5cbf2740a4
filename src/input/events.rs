//! Pointer input and outbound surface events.

use crate::draw::Shape;
use serde::Deserialize;

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    /// Left mouse button (primary drawing button)
    #[default]
    Left,
    /// Right mouse button (cancels the pending shape)
    Right,
    /// Middle mouse button (unused)
    Middle,
}

/// Notifications the drawing surface emits for its collaborators.
///
/// Queued by [`InputState`](super::InputState) and drained with
/// [`InputState::take_events`](super::InputState::take_events).
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// Pointer moved; reported whether or not a shape is pending
    CursorMoved { x: i32, y: i32 },
    /// Left button pressed at a position (outside the triangle sequence)
    Clicked { x: i32, y: i32 },
    /// A shape was finalized and should be pushed onto the history
    ShapeCommitted(Shape),
}
