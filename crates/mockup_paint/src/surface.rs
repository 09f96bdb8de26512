//! CPU raster surface

use tiny_skia::Pixmap;

use crate::color::Color;
use crate::error::{PaintError, Result};

/// An RGBA raster target owned by one render pass
///
/// Backed by a premultiplied tiny-skia pixmap; the accessors here hand out
/// straight-alpha RGBA8 so callers never see premultiplied values.
#[derive(Clone)]
pub struct Surface {
    pixmap: Pixmap,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

impl Surface {
    /// Allocate a transparent surface
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap =
            Pixmap::new(width, height).ok_or(PaintError::SurfaceAllocation { width, height })?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fill every pixel with `color`
    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(color.to_skia());
    }

    /// Straight-alpha RGBA at `(x, y)`, or `None` outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Copy out the whole surface as straight-alpha RGBA8 rows
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixmap.data().len());
        for px in self.pixmap.pixels() {
            let c = px.demultiply();
            out.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        out
    }

    /// True when no pixel has any transparency
    pub fn is_opaque(&self) -> bool {
        self.pixmap.pixels().iter().all(|p| p.alpha() == u8::MAX)
    }

    pub(crate) fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_surface_is_transparent() {
        let surface = Surface::new(4, 3).unwrap();
        assert_eq!((surface.width(), surface.height()), (4, 3));
        assert_eq!(surface.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(surface.pixel(4, 0), None);
        assert_eq!(surface.pixel(0, 3), None);
        assert!(!surface.is_opaque());
    }

    #[test]
    fn zero_sized_surface_fails() {
        assert!(matches!(
            Surface::new(0, 10),
            Err(PaintError::SurfaceAllocation {
                width: 0,
                height: 10
            })
        ));
    }

    #[test]
    fn rgba_export_is_straight_alpha() {
        let mut surface = Surface::new(2, 2).unwrap();
        surface.clear(Color::from_rgba8(200, 100, 50, 128));
        let data = surface.to_rgba8();
        assert_eq!(data.len(), 16);
        let [r, g, b, a] = [data[0], data[1], data[2], data[3]];
        assert_eq!(a, 128);
        assert!((r as i32 - 200).abs() <= 2);
        assert!((g as i32 - 100).abs() <= 2);
        assert!((b as i32 - 50).abs() <= 2);
    }
}
