//! Shape definitions for committed drawings.

use super::color::Color;
use super::font::FontDescriptor;

/// A finished, immutable shape on the board.
///
/// Each variant carries its own geometry plus the color and width that were
/// active when it was committed, so later settings changes never alter it.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Freehand pen stroke - polyline through every pointer position
    Freehand {
        /// Anchor point followed by each moved-to point, in order
        points: Vec<(i32, i32)>,
        color: Color,
        /// Line thickness in pixels
        thick: u32,
    },
    /// Straight line between two points
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
        thick: u32,
    },
    /// Rectangle outline; (x, y) is the top-left corner
    Rect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Color,
        thick: u32,
    },
    /// Ellipse outline inscribed in a normalized bounding box
    Ellipse {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Color,
        thick: u32,
    },
    /// Triangle outline through three clicked vertices
    Triangle {
        vertices: [(i32, i32); 3],
        color: Color,
        thick: u32,
    },
    /// Text placed with its top-left corner at (x, y)
    Text {
        x: i32,
        y: i32,
        text: String,
        color: Color,
        /// Font size in points
        size: u32,
        font_descriptor: FontDescriptor,
    },
}

impl Shape {
    /// Short lowercase name of the shape kind, used in logs and status text.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Freehand { .. } => "freehand",
            Shape::Line { .. } => "line",
            Shape::Rect { .. } => "rectangle",
            Shape::Ellipse { .. } => "ellipse",
            Shape::Triangle { .. } => "triangle",
            Shape::Text { .. } => "text",
        }
    }

    /// Color the shape was committed with.
    pub fn color(&self) -> Color {
        match self {
            Shape::Freehand { color, .. }
            | Shape::Line { color, .. }
            | Shape::Rect { color, .. }
            | Shape::Ellipse { color, .. }
            | Shape::Triangle { color, .. }
            | Shape::Text { color, .. } => *color,
        }
    }
}
