//! Image error types

use thiserror::Error;

/// Errors raised while loading or encoding images
#[derive(Error, Debug)]
pub enum ImageError {
    /// The bytes could not be decoded as a supported raster image
    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    /// The file name or MIME type is not an accepted image type
    #[error("Not an image file: {name}")]
    UnsupportedFile { name: String },

    #[error("Invalid base64 image data: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    /// Pixel buffer length does not match the declared dimensions
    #[error("Invalid dimensions: {width}x{height} RGBA8 image with {len} bytes")]
    InvalidDimensions { width: u32, height: u32, len: usize },
}

/// Result type for image operations
pub type Result<T> = std::result::Result<T, ImageError>;
