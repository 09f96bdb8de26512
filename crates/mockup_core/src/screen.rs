//! Screen content compositor
//!
//! Cover-fits the source image into the device's screen area and draws it
//! through a clip of the screen shape. The clip is popped before returning.

use mockup_image::{cover_fit, FitRect};
use mockup_paint::{Circle, Image, PaintContext, Point, Rect, RoundedRect, Shape};

use crate::descriptor::DeviceDescriptor;

/// The screen outline at zoom `z`.
///
/// Round devices clip to a circle of diameter `screen_width` centred on the
/// body; everything else to the screen rect with the bezel-reduced radius.
pub fn screen_clip(device: &DeviceDescriptor, z: f32) -> Shape {
    if device.circular {
        let center = Point::new(device.width * z / 2.0, device.height * z / 2.0);
        Circle::new(center, device.screen_width * z / 2.0).into()
    } else {
        RoundedRect::new(scaled_screen(device, z), device.inner_radius() * z).into()
    }
}

/// Where the image lands: cover-fitted to the screen rect, overflow centred.
pub fn screen_placement(device: &DeviceDescriptor, image: &Image, z: f32) -> Rect {
    let screen = scaled_screen(device, z);
    let fit = cover_fit(
        image.width(),
        image.height(),
        FitRect::new(screen.x, screen.y, screen.width, screen.height),
    );
    Rect::new(fit.x, fit.y, fit.width, fit.height)
}

pub fn paint_screen(ctx: &mut PaintContext, device: &DeviceDescriptor, image: &Image, z: f32) {
    let dest = screen_placement(device, image, z);
    ctx.push_clip(screen_clip(device, z));
    ctx.draw_image(image, dest);
    ctx.pop_clip();
}

fn scaled_screen(device: &DeviceDescriptor, z: f32) -> Rect {
    let screen = device.screen_rect();
    Rect::new(
        screen.x * z,
        screen.y * z,
        screen.width * z,
        screen.height * z,
    )
}
