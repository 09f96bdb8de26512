//! Render error types

use mockup_image::ImageError;
use mockup_paint::PaintError;
use thiserror::Error;

/// Errors raised by a render pass or its export
#[derive(Error, Debug)]
pub enum RenderError {
    /// The rasterizer could not allocate a surface of this size
    #[error("Failed to allocate a {width}x{height} surface")]
    SurfaceAllocation { width: u32, height: u32 },

    /// Zoom must be a finite percentage above zero
    #[error("Invalid zoom percentage: {0}")]
    InvalidZoom(f32),

    /// Screen image pixels do not match their declared size
    #[error("Invalid screen image: {width}x{height} RGBA8 image with {len} bytes")]
    InvalidImage { width: u32, height: u32, len: usize },

    #[error("Export failed: {0}")]
    Export(#[from] ImageError),
}

impl From<PaintError> for RenderError {
    fn from(err: PaintError) -> Self {
        match err {
            PaintError::SurfaceAllocation { width, height } => {
                RenderError::SurfaceAllocation { width, height }
            }
            PaintError::InvalidImageData { width, height, len } => {
                RenderError::InvalidImage { width, height, len }
            }
        }
    }
}

/// Result type for render operations
pub type Result<T> = std::result::Result<T, RenderError>;

/// A category name that matches no known category
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown category: {0}")]
pub struct ParseCategoryError(pub String);
