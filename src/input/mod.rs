//! Pointer input handling and the drawing-tool state machine.
//!
//! This module translates pointer events into shapes. It holds the drawing
//! settings (color, width, eraser, tool, text), runs the drag and triangle
//! state machines, renders the live preview and reports committed shapes as
//! [`SurfaceEvent`]s.

pub mod events;
pub mod settings;
pub mod state;
pub mod tool;

pub use events::{MouseButton, SurfaceEvent};
pub use settings::DrawingSettings;
pub use state::{DrawingState, InputState, TriangleState};
pub use tool::Tool;
