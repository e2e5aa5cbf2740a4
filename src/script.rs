//! Drawing scripts: TOML files that replay pointer input and commands.
//!
//! A script stands in for a user in front of the board. Each `[[step]]`
//! table names an `action` and its arguments:
//!
//! ```toml
//! [[step]]
//! action = "tool"
//! tool = "rectangle"
//!
//! [[step]]
//! action = "press"
//! x = 10
//! y = 10
//!
//! [[step]]
//! action = "release"
//! x = 120
//! y = 80
//!
//! [[step]]
//! action = "clear"
//! confirm = false
//! ```

use crate::config::ColorSpec;
use crate::export::ExportError;
use crate::input::{MouseButton, Tool};
use crate::session::Session;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading or replaying a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Step {step}: unknown color {color:?}")]
    UnknownColor { step: usize, color: ColorSpec },

    #[error("Step {step}: export failed: {source}")]
    Export {
        step: usize,
        #[source]
        source: ExportError,
    },
}

/// One scripted user action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Step {
    /// Select a tool
    Tool { tool: Tool },
    /// Pick a color by name, `#rrggbb` or `[r, g, b]`
    Color { color: ColorSpec },
    /// Pick a color from the hue slider (degrees)
    Hue { hue: u32 },
    /// Set the pen width
    Width { width: u32 },
    /// Set eraser mode, or toggle it when `enabled` is omitted
    Eraser { enabled: Option<bool> },
    /// Set the Text tool's text, and optionally its font size
    Text { text: String, size: Option<u32> },
    Press {
        x: i32,
        y: i32,
        #[serde(default)]
        button: MouseButton,
    },
    Move { x: i32, y: i32 },
    Release {
        x: i32,
        y: i32,
        #[serde(default)]
        button: MouseButton,
    },
    /// Press and release at the same point
    Click {
        x: i32,
        y: i32,
        #[serde(default)]
        button: MouseButton,
    },
    Undo,
    /// Clear the board; `confirm` answers the confirmation question
    Clear { confirm: Option<bool> },
    /// Export to `path`, or to the configured save directory when omitted
    Export { path: Option<PathBuf> },
}

/// A parsed drawing script.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Script {
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

/// What a replay produced.
#[derive(Debug, Default)]
pub struct ScriptReport {
    /// Steps executed
    pub steps: usize,
    /// Files written by `export` steps, in order
    pub exported: Vec<PathBuf>,
}

impl Script {
    /// Parses a script from TOML text.
    pub fn parse(source: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let source = fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let script = Self::parse(&source)?;
        log::debug!("Loaded {} step(s) from {}", script.steps.len(), path.display());
        Ok(script)
    }

    /// Replays every step against `session`.
    ///
    /// `clear` steps without an explicit `confirm` are answered with
    /// `confirm_clear`. Stops at the first failing step; steps are numbered
    /// from 1 in errors.
    pub fn run(&self, session: &mut Session, confirm_clear: bool) -> Result<ScriptReport, ScriptError> {
        let mut report = ScriptReport::default();

        for (index, step) in self.steps.iter().enumerate() {
            let number = index + 1;
            log::debug!("Step {number}: {step:?}");

            match step {
                Step::Tool { tool } => session.set_tool(*tool),
                Step::Color { color } => {
                    let resolved = color.try_to_color().ok_or_else(|| ScriptError::UnknownColor {
                        step: number,
                        color: color.clone(),
                    })?;
                    session.set_color(resolved);
                }
                Step::Hue { hue } => session.set_hue(*hue),
                Step::Width { width } => session.set_thickness(*width),
                Step::Eraser { enabled: Some(enabled) } => session.set_eraser(*enabled),
                Step::Eraser { enabled: None } => {
                    session.toggle_eraser();
                }
                Step::Text { text, size } => {
                    let size = size.unwrap_or(session.surface().settings().font_size);
                    session.set_text_properties(text, size);
                }
                Step::Press { x, y, button } => session.pointer_down(*button, *x, *y),
                Step::Move { x, y } => session.pointer_move(*x, *y),
                Step::Release { x, y, button } => session.pointer_up(*button, *x, *y),
                Step::Click { x, y, button } => {
                    session.pointer_down(*button, *x, *y);
                    session.pointer_up(*button, *x, *y);
                }
                Step::Undo => {
                    session.undo();
                }
                Step::Clear { confirm } => {
                    session.clear(&mut confirm.unwrap_or(confirm_clear));
                }
                Step::Export { path } => {
                    let written = match path {
                        Some(path) => session.export_to_image(path),
                        None => session.export_to_default().map(Some),
                    }
                    .map_err(|source| ScriptError::Export {
                        step: number,
                        source,
                    })?;
                    report.exported.extend(written);
                }
            }

            report.steps += 1;
            log::trace!("Status: {}", session.status());
        }

        Ok(report)
    }
}
