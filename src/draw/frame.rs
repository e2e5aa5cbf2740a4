//! Frame container holding the drawing history.

use super::shape::Shape;

/// Ordered history of committed shapes.
///
/// Insertion order is drawing order and undo order: the last shape added is
/// drawn on top and is the first one removed by [`Frame::undo`]. The frame is
/// also the rendered scene, so the two can never disagree.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// All shapes in draw order (first = bottom layer, last = top layer)
    pub shapes: Vec<Shape>,
}

impl Frame {
    /// Creates a new empty frame with no shapes.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Removes all shapes from the frame, clearing the canvas.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Adds a new shape to the frame (drawn on top of existing shapes).
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Removes and returns the most recently added shape, if any.
    pub fn undo(&mut self) -> Option<Shape> {
        self.shapes.pop()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
