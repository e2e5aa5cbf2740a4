//! Flattening the board into pixels and encoding them.

use super::types::{ExportError, ExportFormat};
use crate::draw::{Color, Shape, render_background, render_shapes};
use image::RgbImage;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Renders the background and committed shapes at 1:1 into an RGB image of
/// exactly `width` x `height` pixels.
pub fn rasterize(
    shapes: &[Shape],
    width: u32,
    height: u32,
    background: Color,
) -> Result<RgbImage, ExportError> {
    let surface = cairo::ImageSurface::create(cairo::Format::Rgb24, width as i32, height as i32)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        render_background(&ctx, background);
        render_shapes(&ctx, shapes);
    }
    surface.flush();

    let stride = surface.stride() as usize;
    let (w, h) = (width as usize, height as usize);
    let mut pixels = Vec::with_capacity(w * h * 3);

    // Rgb24 stores each pixel as a native-endian 0x00RRGGBB word
    surface.with_data(|data| {
        for row in data.chunks(stride).take(h) {
            for px in row[..w * 4].chunks_exact(4) {
                let word = u32::from_ne_bytes([px[0], px[1], px[2], px[3]]);
                pixels.extend_from_slice(&[(word >> 16) as u8, (word >> 8) as u8, word as u8]);
            }
        }
    })?;

    RgbImage::from_raw(width, height, pixels)
        .ok_or_else(|| ExportError::Surface("pixel buffer does not match canvas size".into()))
}

/// Encodes `image` into `path` in the given format.
///
/// The file is created (or truncated) first so that an unwritable target
/// surfaces as [`ExportError::Io`].
pub fn write_image(image: &RgbImage, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    image.write_to(&mut writer, format.image_format())?;
    writer.flush()?;
    Ok(())
}
