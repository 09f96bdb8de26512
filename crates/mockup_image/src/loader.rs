//! Image decoding

use std::sync::Arc;

use base64::Engine;

use crate::error::{ImageError, Result};
use crate::source::{is_image_file, ImageFormat, ImageSource};

/// A decoded bitmap in straight-alpha RGBA8
///
/// Pixels are reference counted so handing the image to a render pass is a
/// refcount bump, not a copy.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    width: u32,
    height: u32,
    pixels: Arc<[u8]>,
}

impl SourceImage {
    /// Load and decode an image from any supported source
    pub fn load(source: ImageSource) -> Result<Self> {
        let image = match source {
            ImageSource::File(path) => {
                let name = path.display().to_string();
                if !is_image_file(&name, None) {
                    return Err(ImageError::UnsupportedFile { name });
                }
                let data = std::fs::read(&path)?;
                let format = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .and_then(ImageFormat::from_extension);
                Self::decode(&data, format)?
            }
            ImageSource::Base64(data) => Self::decode_base64(&data)?,
            ImageSource::Bytes { data, format } => Self::decode(&data, format)?,
            ImageSource::Rgba {
                data,
                width,
                height,
            } => Self::from_rgba8(width, height, data)?,
        };
        tracing::debug!(
            width = image.width,
            height = image.height,
            "loaded source image"
        );
        Ok(image)
    }

    /// Wrap pre-decoded straight RGBA8 pixels
    pub fn from_rgba8(width: u32, height: u32, pixels: impl Into<Arc<[u8]>>) -> Result<Self> {
        let pixels = pixels.into();
        let expected = width as usize * height as usize * 4;
        if width == 0 || height == 0 || pixels.len() != expected {
            return Err(ImageError::InvalidDimensions {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Decode encoded bytes, guessing the format when no hint is given
    fn decode(data: &[u8], format: Option<ImageFormat>) -> Result<Self> {
        let decoded = match format {
            Some(format) => image::load_from_memory_with_format(data, format.to_codec())
                // A wrong extension should not reject an otherwise valid file.
                .or_else(|_| image::load_from_memory(data)),
            None => image::load_from_memory(data),
        }
        .map_err(ImageError::Decode)?;

        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba8(width, height, rgba.into_raw())
    }

    /// Decode base64 data, with or without a `data:` URI prefix
    fn decode_base64(data: &str) -> Result<Self> {
        let (format, payload) = match data.strip_prefix("data:") {
            Some(rest) => match rest.split_once(',') {
                Some((header, payload)) => {
                    let mime = header.split(';').next().unwrap_or_default();
                    if !is_image_file("", Some(mime)) {
                        return Err(ImageError::UnsupportedFile {
                            name: mime.to_string(),
                        });
                    }
                    (ImageFormat::from_mime(mime), payload)
                }
                None => (None, rest),
            },
            None => (None, data),
        };
        let bytes = base64::engine::general_purpose::STANDARD.decode(payload.trim())?;
        Self::decode(&bytes, format)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Straight-alpha RGBA8 rows
    pub fn pixels(&self) -> &Arc<[u8]> {
        &self.pixels
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_source_is_validated() {
        let image = SourceImage::load(ImageSource::rgba(vec![0; 16], 2, 2)).unwrap();
        assert_eq!((image.width(), image.height()), (2, 2));

        let err = SourceImage::load(ImageSource::rgba(vec![0; 15], 2, 2)).unwrap_err();
        assert!(matches!(
            err,
            ImageError::InvalidDimensions {
                width: 2,
                height: 2,
                len: 15
            }
        ));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = SourceImage::load(ImageSource::bytes(b"definitely not an image".to_vec()))
            .unwrap_err();
        assert!(matches!(err, ImageError::Decode(_)));
    }

    #[test]
    fn bad_base64_is_reported() {
        let err = SourceImage::load(ImageSource::base64("data:image/png;base64,@@@")).unwrap_err();
        assert!(matches!(err, ImageError::Base64(_)));
    }

    #[test]
    fn non_image_data_uri_is_rejected() {
        let err =
            SourceImage::load(ImageSource::base64("data:text/plain;base64,aGk=")).unwrap_err();
        assert!(matches!(err, ImageError::UnsupportedFile { .. }));
    }

    #[test]
    fn non_image_file_name_is_rejected_before_reading() {
        let err = SourceImage::load(ImageSource::file("/nonexistent/notes.txt")).unwrap_err();
        assert!(matches!(err, ImageError::UnsupportedFile { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = SourceImage::load(ImageSource::file("/nonexistent/shot.png")).unwrap_err();
        assert!(matches!(err, ImageError::Io(_)));
    }
}
