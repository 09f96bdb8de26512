//! Cover fitting (CSS `object-fit: cover` with centred position)

/// An axis-aligned placement rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FitRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl FitRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Scale an `image_width` x `image_height` image so it fills `container`
/// while keeping its aspect ratio.
///
/// The returned rect covers the container on both axes; exactly one axis
/// matches the container and the other overflows equally on both sides.
pub fn cover_fit(image_width: u32, image_height: u32, container: FitRect) -> FitRect {
    let img_w = image_width as f32;
    let img_h = image_height as f32;
    if img_w <= 0.0 || img_h <= 0.0 || container.height <= 0.0 {
        return container;
    }

    let image_ratio = img_w / img_h;
    let container_ratio = container.width / container.height;

    if image_ratio > container_ratio {
        // Wider than the container: match height, crop the sides
        let width = container.height * image_ratio;
        FitRect::new(
            container.x - (width - container.width) / 2.0,
            container.y,
            width,
            container.height,
        )
    } else {
        // Taller (or equal): match width, crop top and bottom
        let height = container.width / image_ratio;
        FitRect::new(
            container.x,
            container.y - (height - container.height) / 2.0,
            container.width,
            height,
        )
    }
}
