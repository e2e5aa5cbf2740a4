//! Rendering primitives and shape definitions (Cairo-based).
//!
//! This module defines the core drawing types of the board:
//! - [`Color`]: RGB color with the swatch palette and hue conversion
//! - [`Shape`]: the six committed shape kinds
//! - [`Frame`]: ordered history of committed shapes
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod font;
pub mod frame;
pub mod render;
pub mod shape;

pub use color::Color;
pub use font::FontDescriptor;
pub use frame::Frame;
pub use render::{
    StrokeStyle, render_background, render_freehand_borrowed, render_shape, render_shape_styled,
    render_shapes,
};
pub use shape::Shape;
