//! Device silhouette renderer
//!
//! Draws the body, bezel highlight and body-level decorations in device space
//! (origin at the body's top-left, already rotated by the pipeline). Every
//! length is multiplied by the zoom factor; stroke widths and the glow blur
//! are fixed pixel amounts.

use mockup_paint::{
    Circle, Color, Gradient, PaintContext, Point, Rect, RoundedRect, Shadow, ShadowInk, Shape,
};

use crate::descriptor::DeviceDescriptor;

/// Inset of the bezel highlight from the body edge
const BEZEL_INSET: f32 = 2.0;

const KEYBOARD_HEIGHT: f32 = 60.0;
const TRACKPAD_WIDTH: f32 = 150.0;
const TRACKPAD_HEIGHT: f32 = 40.0;
const TRACKPAD_RADIUS: f32 = 5.0;
const TRACKPAD_OFFSET: f32 = 10.0;

const STAND_NECK_WIDTH: f32 = 120.0;
const STAND_NECK_HEIGHT: f32 = 80.0;
const STAND_BASE_WIDTH: f32 = 200.0;
const STAND_BASE_HEIGHT: f32 = 15.0;
const STAND_BASE_RADIUS: f32 = 5.0;

const CROWN_WIDTH: f32 = 10.0;
const CROWN_HEIGHT: f32 = 30.0;
/// Crown top, as a fraction of body height
const CROWN_POSITION: f32 = 0.35;

const JOYCON_WIDTH: f32 = 100.0;
const JOYCON_RADIUS: f32 = 20.0;

const GLOW_STROKE_WIDTH: f32 = 3.0;
const GLOW_BLUR: f32 = 30.0;
const GLOW_COLOR: Color = Color::rgb(1.0, 0.0, 128.0 / 255.0);

fn bezel_highlight() -> Color {
    Color::WHITE.with_alpha(0.1)
}

/// The body outline at zoom `z`: a circle for round devices, otherwise the
/// rounded rect `(0, 0, w*z, h*z, r*z)`.
pub fn body_shape(device: &DeviceDescriptor, z: f32) -> Shape {
    let (w, h) = (device.width * z, device.height * z);
    if device.circular {
        Circle::new(Point::new(w / 2.0, h / 2.0), w / 2.0).into()
    } else {
        RoundedRect::new(Rect::new(0.0, 0.0, w, h), device.corner_radius * z).into()
    }
}

/// Paint the body and its decorations in draw order.
pub fn paint_silhouette(ctx: &mut PaintContext, device: &DeviceDescriptor, z: f32) {
    let (w, h) = (device.width * z, device.height * z);

    ctx.fill_shape(body_shape(device, z), device.frame_color);

    let inset = BEZEL_INSET * z;
    if device.circular {
        ctx.stroke_circle(w / 2.0, h / 2.0, (w / 2.0 - inset).max(0.0), bezel_highlight(), 1.0);
    } else {
        ctx.stroke_rounded_rect(
            inset,
            inset,
            w - 2.0 * inset,
            h - 2.0 * inset,
            ((device.corner_radius - BEZEL_INSET) * z).max(0.0),
            bezel_highlight(),
            1.0,
        );
    }

    if device.keyboard {
        paint_keyboard(ctx, w, h, z);
    }
    if device.stand {
        paint_stand(ctx, w, h, z);
    }
    if device.chin_height > 0.0 {
        let chin = device.chin_height * z;
        ctx.fill_rect(0.0, h - chin, w, chin, device.frame_color);
    }
    if device.crown {
        let crown_w = CROWN_WIDTH * z;
        ctx.fill_rect(
            w - crown_w / 2.0,
            h * CROWN_POSITION,
            crown_w,
            CROWN_HEIGHT * z,
            Color::from_hex(0x555555),
        );
    }
    if device.joycons {
        let joycon_w = JOYCON_WIDTH * z;
        let radius = JOYCON_RADIUS * z;
        ctx.fill_rounded_rect(0.0, 0.0, joycon_w, h, radius, Color::from_hex(0x0ab9e6));
        ctx.fill_rounded_rect(w - joycon_w, 0.0, joycon_w, h, radius, Color::from_hex(0xff3c28));
    }
    if device.rgb_glow {
        paint_glow(ctx, device, w, h, z);
    }
}

fn paint_keyboard(ctx: &mut PaintContext, w: f32, h: f32, z: f32) {
    let band = KEYBOARD_HEIGHT * z;
    let top = h - band;
    ctx.fill_rect(0.0, top, w, band, Color::from_hex(0x1a1a1a));

    let sheen = Gradient::linear_simple(
        Point::new(0.0, top),
        Point::new(0.0, h),
        Color::WHITE.with_alpha(0.05),
        Color::BLACK.with_alpha(0.1),
    );
    ctx.fill_rect(0.0, top, w, band, sheen);

    let pad_w = TRACKPAD_WIDTH * z;
    ctx.fill_rounded_rect(
        (w - pad_w) / 2.0,
        top + TRACKPAD_OFFSET * z,
        pad_w,
        TRACKPAD_HEIGHT * z,
        TRACKPAD_RADIUS * z,
        Color::WHITE.with_alpha(0.03),
    );
}

/// Neck and base hang below the body, into the surface padding.
fn paint_stand(ctx: &mut PaintContext, w: f32, h: f32, z: f32) {
    let neck_w = STAND_NECK_WIDTH * z;
    let neck_h = STAND_NECK_HEIGHT * z;
    ctx.fill_rect((w - neck_w) / 2.0, h, neck_w, neck_h, Color::from_hex(0x2a2a2a));

    let base_w = STAND_BASE_WIDTH * z;
    ctx.fill_rounded_rect(
        (w - base_w) / 2.0,
        h + neck_h,
        base_w,
        STAND_BASE_HEIGHT * z,
        STAND_BASE_RADIUS * z,
        Color::from_hex(0x1f1f1f),
    );
}

fn paint_glow(ctx: &mut PaintContext, device: &DeviceDescriptor, w: f32, h: f32, z: f32) {
    let outline = RoundedRect::new(Rect::new(0.0, 0.0, w, h), device.corner_radius * z);
    ctx.draw_shadow(
        outline,
        Shadow::new(0.0, 0.0, GLOW_BLUR, GLOW_COLOR.with_alpha(0.5)),
        ShadowInk::Stroke {
            width: GLOW_STROKE_WIDTH,
        },
    );
    ctx.stroke_shape(
        outline,
        GLOW_COLOR.with_alpha(0.5),
        GLOW_STROKE_WIDTH,
    );
}
