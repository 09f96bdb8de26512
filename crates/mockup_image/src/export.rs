//! Export encoding
//!
//! Quality `>= 1.0` selects lossless PNG; anything lower selects JPEG at
//! `round(quality * 100)` clamped to `1..=100`.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::error::{ImageError, Result};

/// Caller-supplied export settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    /// Encoder quality in `0.0..=1.0`; `1.0` means lossless PNG
    pub quality: f32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { quality: 1.0 }
    }
}

impl ExportOptions {
    pub fn with_quality(quality: f32) -> Self {
        Self { quality }
    }

    pub fn format(&self) -> ExportFormat {
        if self.quality >= 1.0 || self.quality.is_nan() {
            ExportFormat::Png
        } else {
            let quality = (self.quality * 100.0).round().clamp(1.0, 100.0) as u8;
            ExportFormat::Jpeg { quality }
        }
    }
}

/// Output encoding for an exported frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg { quality: u8 },
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg { .. } => "jpeg",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg { .. } => "image/jpeg",
        }
    }
}

/// Download name for an exported frame: `mockup-<device>-<millis>.<ext>`
pub fn export_file_name(device_id: &str, timestamp_millis: u64, format: ExportFormat) -> String {
    format!("mockup-{device_id}-{timestamp_millis}.{}", format.extension())
}

/// Encode straight-alpha RGBA8 pixels
///
/// JPEG has no alpha channel, so alpha is dropped; composed frames are opaque
/// wherever the background reaches.
pub fn encode(rgba: &[u8], width: u32, height: u32, format: ExportFormat) -> Result<Vec<u8>> {
    let expected = width as usize * height as usize * 4;
    if width == 0 || height == 0 || rgba.len() != expected {
        return Err(ImageError::InvalidDimensions {
            width,
            height,
            len: rgba.len(),
        });
    }

    let mut bytes = Vec::new();
    match format {
        ExportFormat::Png => PngEncoder::new(&mut bytes)
            .write_image(rgba, width, height, ExtendedColorType::Rgba8)
            .map_err(ImageError::Encode)?,
        ExportFormat::Jpeg { quality } => {
            let rgb: Vec<u8> = rgba
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect();
            JpegEncoder::new_with_quality(&mut bytes, quality)
                .write_image(&rgb, width, height, ExtendedColorType::Rgb8)
                .map_err(ImageError::Encode)?
        }
    }
    tracing::debug!(
        width,
        height,
        format = format.extension(),
        size = bytes.len(),
        "encoded export"
    );
    Ok(bytes)
}
