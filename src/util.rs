//! Utility functions for color names and drag geometry.
//!
//! This module provides:
//! - Color name lookup for the configuration file and scripts
//! - Normalized rectangles from two drag corners

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to palette colors.
///
/// Names are case-insensitive; spaces, dashes and underscores are ignored, so
/// "Dark Red", "dark-red" and "darkred" all resolve to the same swatch.
///
/// # Returns
/// - `Some(Color)` if the name matches a palette color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    let key: String = name
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .map(|c| c.to_ascii_lowercase())
        .collect();

    match key.as_str() {
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "cyan" => Some(CYAN),
        "magenta" | "pink" => Some(MAGENTA),
        "gray" | "grey" => Some(GRAY),
        "darkred" => Some(DARK_RED),
        "darkgreen" => Some(DARK_GREEN),
        "darkblue" => Some(DARK_BLUE),
        "lightgray" | "lightgrey" => Some(LIGHT_GRAY),
        "orange" => Some(ORANGE),
        _ => parse_hex(&key),
    }
}

/// Parses `#rrggbb` (the form shown in status text) back into a color.
fn parse_hex(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::new(r, g, b))
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Normalizes a drag between two corners into `(x, y, w, h)`.
///
/// The top-left corner is the per-axis minimum, so the result does not depend
/// on drag direction. Sizes are unsigned distances and hold the full span
/// between any two `i32` corners.
pub fn normalized_rect(x1: i32, y1: i32, x2: i32, y2: i32) -> (i32, i32, u32, u32) {
    (x1.min(x2), y1.min(y2), x1.abs_diff(x2), y1.abs_diff(y2))
}
