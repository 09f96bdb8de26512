//! Background renderer
//!
//! Paints a [`FillSpec`] (and optional tile pattern) over the whole surface,
//! outside the device transform.

use mockup_paint::path::{circle_path, rounded_rect_path};
use mockup_paint::{Color, Gradient, PaintContext, Path, Point};

use crate::descriptor::{FillSpec, Tile, TilePattern};

/// Alpha of a mesh blob's centre (`#rrggbb80`)
const MESH_BLOB_ALPHA: f32 = 128.0 / 255.0;

/// Mesh blob radius as a fraction of the surface width
const MESH_BLOB_RADIUS: f32 = 0.5;

/// Fill a `width` x `height` surface with `fill`, then overlay `tile`.
pub fn paint_background(
    ctx: &mut PaintContext,
    fill: &FillSpec,
    tile: Option<&Tile>,
    width: f32,
    height: f32,
) {
    match fill {
        FillSpec::Solid(color) => ctx.fill_rect(0.0, 0.0, width, height, *color),
        FillSpec::Linear { stops, .. } => match stops.as_slice() {
            [] => {
                tracing::warn!("linear background without stops, filling black");
                ctx.fill_rect(0.0, 0.0, width, height, Color::BLACK);
            }
            [only] => ctx.fill_rect(0.0, 0.0, width, height, *only),
            stops => {
                let gradient =
                    Gradient::linear_even(Point::ZERO, Point::new(width, height), stops);
                ctx.fill_rect(0.0, 0.0, width, height, gradient);
            }
        },
        FillSpec::RadialMesh { base, blobs } => {
            ctx.fill_rect(0.0, 0.0, width, height, *base);
            for blob in blobs {
                let center = Point::new(
                    blob.x_percent / 100.0 * width,
                    blob.y_percent / 100.0 * height,
                );
                let gradient = Gradient::radial_simple(
                    center,
                    width * MESH_BLOB_RADIUS,
                    blob.color.with_alpha(MESH_BLOB_ALPHA),
                    blob.color.with_alpha(0.0),
                );
                ctx.fill_rect(0.0, 0.0, width, height, gradient);
            }
        }
    }

    if let Some(tile) = tile {
        paint_tile(ctx, tile, width, height);
    }
}

/// Repeat the tile pattern from the surface origin. The whole lattice is one
/// path so it rasterizes in a single fill.
fn paint_tile(ctx: &mut PaintContext, tile: &Tile, width: f32, height: f32) {
    if !(tile.size > 0.0) {
        tracing::warn!(size = tile.size, "skipping tile pattern with no pitch");
        return;
    }
    let columns = (width / tile.size).ceil() as u32;
    let rows = (height / tile.size).ceil() as u32;

    let mut lattice = Path::new();
    let color = match tile.pattern {
        TilePattern::Grid { color, line_width } => {
            for row in 0..rows {
                let y = row as f32 * tile.size;
                lattice.append(&rounded_rect_path(0.0, y, width, line_width, 0.0));
            }
            for column in 0..columns {
                let x = column as f32 * tile.size;
                lattice.append(&rounded_rect_path(x, 0.0, line_width, height, 0.0));
            }
            color
        }
        TilePattern::Dots { color, radius } => {
            let half = tile.size / 2.0;
            for row in 0..rows {
                for column in 0..columns {
                    let cx = column as f32 * tile.size + half;
                    let cy = row as f32 * tile.size + half;
                    lattice.append(&circle_path(cx, cy, radius));
                }
            }
            color
        }
    };
    ctx.fill_path(lattice, color);
}
