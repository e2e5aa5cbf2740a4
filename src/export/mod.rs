//! Raster export of the board.
//!
//! This module provides:
//! - Export target resolution (extension-based format, generated names)
//! - Rasterization of committed shapes through Cairo
//! - PNG, JPEG and BMP encoding through the `image` crate

pub mod file;
pub mod raster;
pub mod types;

pub use types::{ExportError, ExportFormat};

use crate::draw::{Color, Shape};
use std::path::{Path, PathBuf};

/// Writes the shapes on a `width` x `height` canvas to `target` in `format`.
///
/// Returns the path written.
pub fn export_shapes(
    shapes: &[Shape],
    width: u32,
    height: u32,
    background: Color,
    target: &Path,
    format: ExportFormat,
) -> Result<PathBuf, ExportError> {
    let image = raster::rasterize(shapes, width, height, background)?;
    raster::write_image(&image, target, format)?;

    log::info!(
        "Exported {} shape(s) as {:?} ({}x{}) to {}",
        shapes.len(),
        format,
        width,
        height,
        target.display()
    );
    Ok(target.to_path_buf())
}
