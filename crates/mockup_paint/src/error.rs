//! Paint error types

use thiserror::Error;

/// Errors raised while preparing or rasterizing paint commands
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaintError {
    /// Pixel buffer length does not match the declared dimensions
    #[error("Invalid image data: {width}x{height} RGBA8 image with {len} bytes")]
    InvalidImageData { width: u32, height: u32, len: usize },

    /// The rasterizer could not allocate a surface of this size
    #[error("Failed to allocate a {width}x{height} surface")]
    SurfaceAllocation { width: u32, height: u32 },
}

/// Result type for paint operations
pub type Result<T> = std::result::Result<T, PaintError>;
