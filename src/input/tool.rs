//! Drawing tool selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Drawing tool selection.
///
/// Exactly one tool is active at a time. The active tool decides what a
/// pointer press starts: a drag (Pen, Line, Rectangle, Circle), a click
/// sequence (Triangle), or an immediate placement (Text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand drawing - follows the pointer path
    #[default]
    Pen,
    /// Straight line between press and release points
    Line,
    /// Rectangle outline from corner to corner
    #[serde(alias = "rect")]
    Rectangle,
    /// Ellipse inscribed in the dragged box
    #[serde(alias = "ellipse")]
    Circle,
    /// Triangle placed with three clicks
    Triangle,
    /// Text placed with a single click
    Text,
}

impl Tool {
    /// Human-readable label used in status text.
    pub fn label(&self) -> &'static str {
        match self {
            Tool::Pen => "Pen",
            Tool::Line => "Line",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
            Tool::Triangle => "Triangle",
            Tool::Text => "Text",
        }
    }

    /// Whether the tool builds its shape by dragging with the button held.
    pub fn is_drag_tool(&self) -> bool {
        matches!(
            self,
            Tool::Pen | Tool::Line | Tool::Rectangle | Tool::Circle
        )
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
