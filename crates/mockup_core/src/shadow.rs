//! Drop shadow under the device body

use mockup_paint::{Color, PaintContext, Shadow, ShadowInk};

use crate::descriptor::DeviceDescriptor;
use crate::silhouette::body_shape;

const SHADOW_BLUR: f32 = 50.0;
const SHADOW_OFFSET_Y: f32 = 20.0;

/// Shadow parameters at zoom `z`. Offset and blur are in surface pixels, so
/// the shadow always falls straight down whatever the rotation.
pub fn device_shadow(z: f32) -> Shadow {
    Shadow::new(
        0.0,
        SHADOW_OFFSET_Y * z,
        SHADOW_BLUR * z,
        Color::BLACK.with_alpha(0.4),
    )
}

/// Cast the body's shadow, then cover it with a near-invisible body fill.
pub fn paint_shadow(ctx: &mut PaintContext, device: &DeviceDescriptor, z: f32) {
    let body = body_shape(device, z);
    ctx.draw_shadow(body.clone(), device_shadow(z), ShadowInk::Fill);
    ctx.fill_shape(body, Color::BLACK.with_alpha(0.01));
}
