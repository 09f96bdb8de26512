//! Render request

use mockup_image::SourceImage;

use crate::descriptor::{BackgroundDescriptor, DeviceDescriptor};
use crate::options::RenderOptions;

/// Everything one render pass reads. Missing device or background is a valid
/// request that composes to the empty placeholder state.
#[derive(Clone, Debug, Default)]
pub struct RenderRequest<'a> {
    pub device: Option<&'a DeviceDescriptor>,
    pub background: Option<&'a BackgroundDescriptor>,
    /// No image means the screen stays the device's own colour
    pub image: Option<&'a SourceImage>,
    pub options: RenderOptions,
}

impl<'a> RenderRequest<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn device(mut self, device: &'a DeviceDescriptor) -> Self {
        self.device = Some(device);
        self
    }

    pub fn background(mut self, background: &'a BackgroundDescriptor) -> Self {
        self.background = Some(background);
        self
    }

    pub fn image(mut self, image: &'a SourceImage) -> Self {
        self.image = Some(image);
        self
    }

    pub fn options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }
}
