//! Drawing board core: tools, history, export.
//!
//! The [`session::Session`] is the entry point. It owns the committed shape
//! history and the drawing surface ([`input::InputState`]) that turns pointer
//! events into shapes, and it exports the board as PNG, JPEG or BMP. Any UI
//! layer can drive it; the `rainbowboard` binary drives it from TOML scripts.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod script;
pub mod session;
pub mod util;

pub use config::Config;
pub use session::{ClearConfirmation, Session};
