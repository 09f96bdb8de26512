//! Mockup Image
//!
//! Image loading and export encoding for Mockup.
//!
//! # Features
//!
//! - Load screen images from file paths, raw bytes, base64 and data URIs
//! - Support for PNG, JPEG, GIF, WebP, BMP formats
//! - Cover fitting of an image into a screen rectangle
//! - PNG / JPEG export with caller-supplied quality
//!
//! # Example
//!
//! ```ignore
//! use mockup_image::{ImageSource, SourceImage};
//!
//! // Load from file
//! let image = SourceImage::load(ImageSource::file("screenshot.png"))?;
//!
//! // Load from a pasted data URI
//! let image = SourceImage::load(ImageSource::from_uri("data:image/png;base64,iVBORw0KGgo..."))?;
//! ```

mod error;
mod export;
mod fit;
mod loader;
mod source;

pub use error::{ImageError, Result};
pub use export::{encode, export_file_name, ExportFormat, ExportOptions};
pub use fit::{cover_fit, FitRect};
pub use loader::SourceImage;
pub use source::{is_image_file, ImageFormat, ImageSource};
