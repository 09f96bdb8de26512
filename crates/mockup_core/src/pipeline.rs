//! Composition pipeline
//!
//! One render pass: size the surface, paint the background, then draw the
//! shadow, silhouette, screen and details under a transform that rotates and
//! places the device around its own centre. The pass is a pure function of
//! its [`RenderRequest`]; every call allocates a fresh surface.

use mockup_image::{encode, export_file_name, ExportFormat, ExportOptions};
use mockup_paint::{rasterize, Color, Image, PaintCommand, PaintContext, Surface, Transform2D};

use crate::background::paint_background;
use crate::descriptor::DeviceDescriptor;
use crate::details::paint_details;
use crate::error::{RenderError, Result};
use crate::request::RenderRequest;
use crate::screen::paint_screen;
use crate::shadow::paint_shadow;
use crate::silhouette::paint_silhouette;

/// Margin around the device for shadow blur and rotation overhang
pub const PADDING: f32 = 100.0;

/// Largest surface edge the pipeline will allocate
pub const MAX_SURFACE_DIMENSION: u32 = 16_384;

/// Surface size for `device` at zoom `z`: the scaled body plus [`PADDING`] on
/// every side, fractional sizes truncated.
pub fn surface_size(device: &DeviceDescriptor, z: f32) -> Result<(u32, u32)> {
    let width = (device.width * z + 2.0 * PADDING).trunc();
    let height = (device.height * z + 2.0 * PADDING).trunc();
    let limit = MAX_SURFACE_DIMENSION as f32;
    if !(width >= 1.0 && height >= 1.0 && width <= limit && height <= limit) {
        return Err(RenderError::SurfaceAllocation {
            width: width.clamp(0.0, u32::MAX as f32) as u32,
            height: height.clamp(0.0, u32::MAX as f32) as u32,
        });
    }
    Ok((width as u32, height as u32))
}

/// A recorded render pass, ready to rasterize
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayList {
    pub width: u32,
    pub height: u32,
    pub commands: Vec<PaintCommand>,
}

/// Record the paint commands for `request` without rasterizing them.
///
/// Returns `Ok(None)` when the device or background is missing.
pub fn record(request: &RenderRequest<'_>) -> Result<Option<DisplayList>> {
    let (Some(device), Some(background)) = (request.device, request.background) else {
        return Ok(None);
    };
    let z = request.options.zoom_factor()?;
    let (width, height) = surface_size(device, z)?;
    let (w, h) = (width as f32, height as f32);

    let mut ctx = PaintContext::new();
    ctx.clear(Color::TRANSPARENT);
    paint_background(&mut ctx, &background.fill, background.tile.as_ref(), w, h);

    let rotation = request.options.normalized_rotation().to_radians();
    let placement = Transform2D::translate(w / 2.0, h / 2.0)
        .then(Transform2D::rotate(rotation))
        .then(Transform2D::translate(
            -device.width * z / 2.0,
            -device.height * z / 2.0,
        ));
    ctx.push_transform(placement);

    if request.options.shadow_enabled {
        paint_shadow(&mut ctx, device, z);
    }
    paint_silhouette(&mut ctx, device, z);
    if let Some(source) = request.image {
        let image = Image::from_rgba8(source.width(), source.height(), source.pixels().clone())?;
        paint_screen(&mut ctx, device, &image, z);
    }
    paint_details(&mut ctx, device, z);

    ctx.pop_transform();
    debug_assert!(ctx.is_balanced());

    Ok(Some(DisplayList {
        width,
        height,
        commands: ctx.take_commands(),
    }))
}

/// Run one render pass.
pub fn compose(request: &RenderRequest<'_>) -> Result<Composition> {
    let Some(list) = record(request)? else {
        tracing::debug!("device or background not selected, nothing to compose");
        return Ok(Composition::Empty);
    };
    // `record` only returns a list when a device is present
    let device_id = request.device.map(|d| d.id).unwrap_or_default();

    tracing::debug!(
        device = device_id,
        width = list.width,
        height = list.height,
        commands = list.commands.len(),
        "composing frame"
    );
    let mut surface = Surface::new(list.width, list.height)?;
    rasterize(&mut surface, &list.commands);
    tracing::debug!(device = device_id, "frame composed");

    Ok(Composition::Composed(Frame { surface, device_id }))
}

/// Outcome of a render pass
#[derive(Debug, Clone)]
pub enum Composition {
    /// No device or no background selected: show a placeholder, export disabled
    Empty,
    /// A finished frame, export enabled
    Composed(Frame),
}

impl Composition {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Export is only available once a frame exists
    pub fn can_export(&self) -> bool {
        matches!(self, Self::Composed(_))
    }

    pub fn frame(&self) -> Option<&Frame> {
        match self {
            Self::Composed(frame) => Some(frame),
            Self::Empty => None,
        }
    }

    pub fn into_frame(self) -> Option<Frame> {
        match self {
            Self::Composed(frame) => Some(frame),
            Self::Empty => None,
        }
    }
}

/// A composed mockup
#[derive(Debug, Clone)]
pub struct Frame {
    surface: Surface,
    device_id: &'static str,
}

impl Frame {
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    pub fn device_id(&self) -> &'static str {
        self.device_id
    }

    /// Straight-alpha RGBA at `(x, y)`
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.surface.pixel(x, y)
    }

    /// Encode the frame for download, named after the device and `timestamp_millis`
    pub fn export(&self, options: &ExportOptions, timestamp_millis: u64) -> Result<ExportedImage> {
        let format = options.format();
        let bytes = encode(&self.surface.to_rgba8(), self.width(), self.height(), format)?;
        Ok(ExportedImage {
            file_name: export_file_name(self.device_id, timestamp_millis, format),
            format,
            bytes,
        })
    }
}

/// An encoded frame
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedImage {
    pub file_name: String,
    pub format: ExportFormat,
    pub bytes: Vec<u8>,
}
