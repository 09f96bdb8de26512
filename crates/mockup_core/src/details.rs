//! Device detail overlay
//!
//! Cutouts and markings painted on top of the screen content.

use mockup_paint::{Color, PaintContext, Point};

use crate::descriptor::DeviceDescriptor;

const ISLAND_WIDTH: f32 = 110.0;
const ISLAND_HEIGHT: f32 = 35.0;
/// Gap between the top of the screen and the island
const ISLAND_OFFSET: f32 = 12.0;

const NOTCH_RADIUS: f32 = 15.0;

const LAPTOP_NOTCH_WIDTH: f32 = 70.0;
const LAPTOP_NOTCH_HEIGHT: f32 = 22.0;
const LAPTOP_NOTCH_RADIUS: f32 = 8.0;

const FOLD_LINE_WIDTH: f32 = 2.0;

pub fn paint_details(ctx: &mut PaintContext, device: &DeviceDescriptor, z: f32) {
    let (w, h) = (device.width * z, device.height * z);

    if device.dynamic_island {
        let island_w = ISLAND_WIDTH * z;
        let island_h = ISLAND_HEIGHT * z;
        ctx.fill_rounded_rect(
            (w - island_w) / 2.0,
            (device.screen_y + ISLAND_OFFSET) * z,
            island_w,
            island_h,
            island_h / 2.0,
            Color::BLACK,
        );
    } else if let Some(notch) = device.notch {
        let notch_w = notch.width * z;
        ctx.fill_rounded_rect(
            (w - notch_w) / 2.0,
            0.0,
            notch_w,
            notch.height * z,
            NOTCH_RADIUS * z,
            device.frame_color,
        );
    }

    if device.has_notch && device.keyboard {
        let notch_w = LAPTOP_NOTCH_WIDTH * z;
        ctx.fill_rounded_rect(
            (w - notch_w) / 2.0,
            0.0,
            notch_w,
            LAPTOP_NOTCH_HEIGHT * z,
            LAPTOP_NOTCH_RADIUS * z,
            device.frame_color,
        );
    }

    if let Some(hole) = device.punch_hole {
        ctx.fill_circle(hole.x * z, hole.y * z, hole.radius * z, Color::BLACK);
    }

    if device.fold_line {
        ctx.stroke_line(
            Point::new(w / 2.0, 0.0),
            Point::new(w / 2.0, h),
            Color::BLACK.with_alpha(0.2),
            FOLD_LINE_WIDTH,
        );
    }
}
