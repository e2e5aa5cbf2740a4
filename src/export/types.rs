//! Data types for raster export.

use crate::config::ImageFormatSpec;
use std::path::Path;
use thiserror::Error;

/// Raster formats the board can be written as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
    Bmp,
}

impl ExportFormat {
    /// Looks up a format by file extension (case-insensitive, without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "bmp" => Some(Self::Bmp),
            _ => None,
        }
    }

    /// Format implied by the path's extension, if it names a supported one.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Canonical file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Bmp => "bmp",
        }
    }

    pub(crate) fn image_format(self) -> image::ImageFormat {
        match self {
            Self::Png => image::ImageFormat::Png,
            Self::Jpeg => image::ImageFormat::Jpeg,
            Self::Bmp => image::ImageFormat::Bmp,
        }
    }
}

impl From<ImageFormatSpec> for ExportFormat {
    fn from(spec: ImageFormatSpec) -> Self {
        match spec {
            ImageFormatSpec::Png => Self::Png,
            ImageFormatSpec::Jpg => Self::Jpeg,
            ImageFormatSpec::Bmp => Self::Bmp,
        }
    }
}

/// Errors that can occur while exporting the board.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cairo surface error: {0}")]
    Surface(String),

    #[error("Image encoding error: {0}")]
    Encode(#[from] image::ImageError),
}

impl From<cairo::Error> for ExportError {
    fn from(err: cairo::Error) -> Self {
        ExportError::Surface(err.to_string())
    }
}

impl From<cairo::BorrowError> for ExportError {
    fn from(err: cairo::BorrowError) -> Self {
        ExportError::Surface(err.to_string())
    }
}
