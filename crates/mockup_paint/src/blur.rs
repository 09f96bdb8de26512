//! Approximate gaussian blur for shadow layers.
//!
//! Three successive box blurs whose widths are chosen so their combined
//! variance matches the requested sigma. Pixels outside the pixmap count as
//! transparent, which is what a shadow layer wants at its edges.

use tiny_skia::Pixmap;

const PASSES: usize = 3;

/// Blur `pixmap` in place. `sigma <= 0` leaves it untouched.
pub fn gaussian_blur(pixmap: &mut Pixmap, sigma: f32) {
    if !(sigma > 0.0) {
        return;
    }
    let width = pixmap.width() as usize;
    let height = pixmap.height() as usize;
    if width == 0 || height == 0 {
        return;
    }

    let mut scratch = vec![0u8; width * height * 4];
    for size in box_sizes(sigma) {
        let radius = (size - 1) / 2;
        if radius == 0 {
            continue;
        }
        box_blur_horizontal(pixmap.data(), &mut scratch, width, height, radius);
        box_blur_vertical(&scratch, pixmap.data_mut(), width, height, radius);
    }
}

/// Odd box widths for [`PASSES`] passes approximating `sigma`.
fn box_sizes(sigma: f32) -> [usize; PASSES] {
    let n = PASSES as f32;
    let ideal = (12.0 * sigma * sigma / n + 1.0).sqrt();
    let mut lower = ideal.floor() as i64;
    if lower % 2 == 0 {
        lower -= 1;
    }
    let lower = lower.max(1);
    let upper = lower + 2;
    let lf = lower as f32;
    let m = ((12.0 * sigma * sigma - n * lf * lf - 4.0 * n * lf - 3.0 * n) / (-4.0 * lf - 4.0))
        .round()
        .max(0.0) as usize;

    let mut sizes = [upper as usize; PASSES];
    for (i, size) in sizes.iter_mut().enumerate() {
        if i < m {
            *size = lower as usize;
        }
    }
    sizes
}

fn box_blur_horizontal(src: &[u8], dst: &mut [u8], width: usize, height: usize, radius: usize) {
    let div = (2 * radius + 1) as u32;
    for y in 0..height {
        let row = y * width * 4;
        for c in 0..4 {
            let at = |x: usize| src[row + x * 4 + c] as u32;
            let mut sum: u32 = (0..=radius.min(width - 1)).map(at).sum();
            for x in 0..width {
                dst[row + x * 4 + c] = ((sum + div / 2) / div) as u8;
                let incoming = x + radius + 1;
                if incoming < width {
                    sum += at(incoming);
                }
                if x >= radius {
                    sum -= at(x - radius);
                }
            }
        }
    }
}

fn box_blur_vertical(src: &[u8], dst: &mut [u8], width: usize, height: usize, radius: usize) {
    let div = (2 * radius + 1) as u32;
    for x in 0..width {
        for c in 0..4 {
            let at = |y: usize| src[(y * width + x) * 4 + c] as u32;
            let mut sum: u32 = (0..=radius.min(height - 1)).map(at).sum();
            for y in 0..height {
                dst[(y * width + x) * 4 + c] = ((sum + div / 2) / div) as u8;
                let incoming = y + radius + 1;
                if incoming < height {
                    sum += at(incoming);
                }
                if y >= radius {
                    sum -= at(y - radius);
                }
            }
        }
    }
}
