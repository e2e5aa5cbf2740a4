//! Status line texts shown after each user action.

use crate::draw::Color;
use crate::input::Tool;

pub(super) fn ready(tool: Tool) -> String {
    format!("Ready - Tool: {} | History: 0 items", tool.label())
}

pub(super) fn cursor(tool: Tool, x: i32, y: i32, color: Color, history: usize) -> String {
    format!(
        "Tool: {} | Position: ({x}, {y}) | Color: {} | History: {history} items",
        tool.label(),
        color.hex_name()
    )
}

pub(super) fn committed(history: usize) -> String {
    format!("Drawing history: {history} items")
}

pub(super) fn text_added(x: i32, y: i32, text: &str, history: usize) -> String {
    format!("Added text at ({x}, {y}): {text} | History: {history} items")
}

pub(super) fn undone(history: usize) -> String {
    format!("Undone, remaining history: {history} items")
}

pub(super) fn cleared() -> String {
    "Canvas cleared | History: 0 items".to_string()
}

pub(super) fn color_changed(color: Color, history: usize) -> String {
    format!("Color changed to: {} | History: {history} items", color.hex_name())
}

pub(super) fn width_changed(width: u32, history: usize) -> String {
    format!("Width: {width}px | History: {history} items")
}

pub(super) fn eraser(enabled: bool, history: usize) -> String {
    if enabled {
        format!("Eraser mode | History: {history} items")
    } else {
        format!("Pen mode | History: {history} items")
    }
}

pub(super) fn tool_switched(tool: Tool, history: usize) -> String {
    format!("Tool switched to: {} | History: {history} items", tool.label())
}

pub(super) fn saved(path: &std::path::Path, history: usize) -> String {
    format!("Image saved to: {} | History: {history} items", path.display())
}
