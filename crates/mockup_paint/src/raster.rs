//! CPU rasterizer
//!
//! Executes a recorded command list onto a [`Surface`] with tiny-skia. Keeps a
//! save/restore stack of graphics states (transform + clip mask); every
//! `PushClip` / `PushTransform` saves, every `PopClip` / `PopTransform`
//! restores, so a balanced command list leaves no state behind.

use tiny_skia::{
    FillRule, FilterQuality, LinearGradient, Mask, Paint, Pixmap, PixmapPaint, RadialGradient,
    Shader, SpreadMode, Stroke, Transform,
};

use crate::blur::gaussian_blur;
use crate::context::{FillStyle, PaintCommand, ShadowInk, StrokeStyle};
use crate::gradient::Gradient;
use crate::image::Image;
use crate::path::Point;
use crate::primitives::{Rect, Shadow, Shape};
use crate::surface::Surface;

/// Graphics state saved and restored around clips and transforms
#[derive(Clone)]
struct RasterState {
    transform: Transform,
    clip: Option<Mask>,
}

impl RasterState {
    fn new() -> Self {
        Self {
            transform: Transform::identity(),
            clip: None,
        }
    }
}

/// Executes paint commands against a surface
pub struct Rasterizer<'s> {
    surface: &'s mut Surface,
    state: RasterState,
    saved: Vec<RasterState>,
}

impl<'s> Rasterizer<'s> {
    pub fn new(surface: &'s mut Surface) -> Self {
        Self {
            surface,
            state: RasterState::new(),
            saved: Vec::new(),
        }
    }

    /// Number of saved states still open
    pub fn state_depth(&self) -> usize {
        self.saved.len()
    }

    pub fn execute(&mut self, commands: &[PaintCommand]) {
        tracing::trace!(count = commands.len(), "rasterizing paint commands");
        for command in commands {
            self.execute_one(command);
        }
        if !self.saved.is_empty() {
            tracing::warn!(
                depth = self.saved.len(),
                "command list left clip/transform states open"
            );
        }
    }

    fn execute_one(&mut self, command: &PaintCommand) {
        match command {
            PaintCommand::Clear(color) => self.surface.clear(*color),
            PaintCommand::Fill { shape, style } => self.fill(shape, style),
            PaintCommand::Stroke { shape, style } => self.stroke(shape, style),
            PaintCommand::DrawShadow { shape, shadow, ink } => self.shadow(shape, shadow, *ink),
            PaintCommand::DrawImage { image, dest } => self.image(image, *dest),
            PaintCommand::PushClip { shape } => self.push_clip(shape),
            PaintCommand::PushTransform { transform } => {
                self.save();
                self.state.transform = self.state.transform.pre_concat(transform.to_skia());
            }
            PaintCommand::PopClip | PaintCommand::PopTransform => self.restore(),
        }
    }

    fn save(&mut self) {
        self.saved.push(self.state.clone());
    }

    fn restore(&mut self) {
        match self.saved.pop() {
            Some(state) => self.state = state,
            None => tracing::warn!("pop without matching push ignored"),
        }
    }

    fn fill(&mut self, shape: &Shape, style: &FillStyle) {
        let Some(path) = shape.to_path().to_skia() else {
            tracing::warn!(?shape, "skipping fill of degenerate shape");
            return;
        };
        let paint = fill_paint(style);
        let transform = self.state.transform;
        self.surface.pixmap_mut().fill_path(
            &path,
            &paint,
            FillRule::Winding,
            transform,
            self.state.clip.as_ref(),
        );
    }

    fn stroke(&mut self, shape: &Shape, style: &StrokeStyle) {
        let Some(path) = shape.to_path().to_skia() else {
            tracing::warn!(?shape, "skipping stroke of degenerate shape");
            return;
        };
        let paint = solid_paint(style.color);
        let stroke = Stroke {
            width: style.width,
            ..Stroke::default()
        };
        let transform = self.state.transform;
        self.surface.pixmap_mut().stroke_path(
            &path,
            &paint,
            &stroke,
            transform,
            self.state.clip.as_ref(),
        );
    }

    /// Render the shape's coverage in the shadow colour on a scratch layer,
    /// blur it, then composite it under the device-space offset.
    fn shadow(&mut self, shape: &Shape, shadow: &Shadow, ink: ShadowInk) {
        if !shadow.is_visible() {
            return;
        }
        let Some(path) = shape.to_path().to_skia() else {
            tracing::warn!(?shape, "skipping shadow of degenerate shape");
            return;
        };
        let (width, height) = (self.surface.width(), self.surface.height());
        let Some(mut layer) = Pixmap::new(width, height) else {
            return;
        };

        let paint = solid_paint(shadow.color);
        let transform = self.state.transform;
        match ink {
            ShadowInk::Fill => {
                layer.fill_path(&path, &paint, FillRule::Winding, transform, None);
            }
            ShadowInk::Stroke { width } => {
                let stroke = Stroke {
                    width,
                    ..Stroke::default()
                };
                layer.stroke_path(&path, &paint, &stroke, transform, None);
            }
        }

        gaussian_blur(&mut layer, shadow.blur_radius / 2.0);

        self.surface.pixmap_mut().draw_pixmap(
            0,
            0,
            layer.as_ref(),
            &PixmapPaint::default(),
            Transform::from_translate(shadow.offset_x, shadow.offset_y),
            self.state.clip.as_ref(),
        );
    }

    fn image(&mut self, image: &Image, dest: Rect) {
        if dest.is_empty() {
            tracing::warn!(?dest, "skipping image with empty destination");
            return;
        }
        let Some(pixmap) = image_to_pixmap(image) else {
            return;
        };
        let placement = Transform::from_row(
            dest.width / image.width() as f32,
            0.0,
            0.0,
            dest.height / image.height() as f32,
            dest.x,
            dest.y,
        );
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        let transform = self.state.transform.pre_concat(placement);
        self.surface.pixmap_mut().draw_pixmap(
            0,
            0,
            pixmap.as_ref(),
            &paint,
            transform,
            self.state.clip.as_ref(),
        );
    }

    fn push_clip(&mut self, shape: &Shape) {
        self.save();
        let Some(path) = shape.to_path().to_skia() else {
            // An empty clip region hides everything until it is popped.
            tracing::warn!(?shape, "degenerate clip shape, clipping everything");
            self.state.clip = Mask::new(self.surface.width(), self.surface.height());
            return;
        };
        let transform = self.state.transform;
        match self.state.clip.as_mut() {
            Some(mask) => mask.intersect_path(&path, FillRule::Winding, true, transform),
            None => {
                if let Some(mut mask) = Mask::new(self.surface.width(), self.surface.height()) {
                    mask.fill_path(&path, FillRule::Winding, true, transform);
                    self.state.clip = Some(mask);
                }
            }
        }
    }
}

/// Execute `commands` onto `surface` from a fresh graphics state
pub fn rasterize(surface: &mut Surface, commands: &[PaintCommand]) {
    Rasterizer::new(surface).execute(commands);
}

fn solid_paint(color: crate::Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.to_skia());
    paint.anti_alias = true;
    paint
}

fn fill_paint(style: &FillStyle) -> Paint<'static> {
    match style {
        FillStyle::Color(color) => solid_paint(*color),
        FillStyle::Gradient(gradient) => {
            let mut paint = Paint::default();
            paint.anti_alias = true;
            paint.shader = gradient_shader(gradient);
            paint
        }
    }
}

/// Build the shader for `gradient`; degenerate gradients fall back to their
/// first stop as a solid colour so a fill never silently paints nothing.
fn gradient_shader(gradient: &Gradient) -> Shader<'static> {
    let stops: Vec<tiny_skia::GradientStop> = gradient
        .stops()
        .iter()
        .map(|s| tiny_skia::GradientStop::new(s.offset, s.color.to_skia()))
        .collect();
    let fallback = gradient
        .stops()
        .first()
        .map(|s| Shader::SolidColor(s.color.to_skia()))
        .unwrap_or(Shader::SolidColor(tiny_skia::Color::TRANSPARENT));

    let shader = match gradient {
        Gradient::Linear { start, end, .. } => LinearGradient::new(
            skia_point(*start),
            skia_point(*end),
            stops,
            SpreadMode::Pad,
            Transform::identity(),
        ),
        Gradient::Radial { center, radius, .. } => RadialGradient::new(
            skia_point(*center),
            skia_point(*center),
            *radius,
            stops,
            SpreadMode::Pad,
            Transform::identity(),
        ),
    };
    shader.unwrap_or(fallback)
}

fn skia_point(p: Point) -> tiny_skia::Point {
    tiny_skia::Point::from_xy(p.x, p.y)
}

/// Premultiply straight RGBA8 into a pixmap tiny-skia can sample
fn image_to_pixmap(image: &Image) -> Option<Pixmap> {
    let mut data = Vec::with_capacity(image.pixels().len());
    for chunk in image.pixels().chunks_exact(4) {
        let a = chunk[3] as f32 / 255.0;
        data.push((chunk[0] as f32 * a).round() as u8);
        data.push((chunk[1] as f32 * a).round() as u8);
        data.push((chunk[2] as f32 * a).round() as u8);
        data.push(chunk[3]);
    }
    let size = tiny_skia::IntSize::from_wh(image.width(), image.height())?;
    Pixmap::from_vec(data, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{PaintContext, Transform2D};
    use crate::primitives::Circle;
    use crate::Color;

    fn render(width: u32, height: u32, build: impl FnOnce(&mut PaintContext)) -> Surface {
        let mut ctx = PaintContext::new();
        build(&mut ctx);
        let mut surface = Surface::new(width, height).unwrap();
        rasterize(&mut surface, ctx.commands());
        surface
    }

    #[test]
    fn fills_rect_with_solid_color() {
        let surface = render(20, 20, |ctx| {
            ctx.fill_rect(5.0, 5.0, 10.0, 10.0, Color::from_rgba8(255, 0, 0, 255));
        });
        assert_eq!(surface.pixel(10, 10), Some([255, 0, 0, 255]));
        assert_eq!(surface.pixel(2, 2), Some([0, 0, 0, 0]));
    }

    #[test]
    fn clip_limits_drawing_until_popped() {
        let surface = render(20, 20, |ctx| {
            ctx.push_clip(Rect::new(0.0, 0.0, 10.0, 20.0));
            ctx.fill_rect(0.0, 0.0, 20.0, 10.0, Color::WHITE);
            ctx.pop_clip();
            ctx.fill_rect(0.0, 10.0, 20.0, 10.0, Color::BLACK);
        });
        assert_eq!(surface.pixel(5, 5), Some([255, 255, 255, 255]));
        assert_eq!(surface.pixel(15, 5).map(|p| p[3]), Some(0));
        assert_eq!(surface.pixel(15, 15), Some([0, 0, 0, 255]));
    }

    #[test]
    fn nested_clips_intersect() {
        let surface = render(20, 20, |ctx| {
            ctx.push_clip(Rect::new(0.0, 0.0, 10.0, 20.0));
            ctx.push_clip(Rect::new(0.0, 0.0, 20.0, 10.0));
            ctx.fill_rect(0.0, 0.0, 20.0, 20.0, Color::WHITE);
            ctx.pop_clip();
            ctx.pop_clip();
        });
        assert_eq!(surface.pixel(5, 5).map(|p| p[3]), Some(255));
        assert_eq!(surface.pixel(5, 15).map(|p| p[3]), Some(0));
        assert_eq!(surface.pixel(15, 5).map(|p| p[3]), Some(0));
    }

    #[test]
    fn transform_moves_geometry() {
        let surface = render(20, 20, |ctx| {
            ctx.push_transform(Transform2D::translate(10.0, 10.0));
            ctx.fill_rect(0.0, 0.0, 5.0, 5.0, Color::WHITE);
            ctx.pop_transform();
        });
        assert_eq!(surface.pixel(12, 12).map(|p| p[3]), Some(255));
        assert_eq!(surface.pixel(2, 2).map(|p| p[3]), Some(0));
    }

    #[test]
    fn unbalanced_pop_is_ignored() {
        let mut surface = Surface::new(4, 4).unwrap();
        let mut rasterizer = Rasterizer::new(&mut surface);
        rasterizer.execute(&[PaintCommand::PopClip, PaintCommand::PopTransform]);
        assert_eq!(rasterizer.state_depth(), 0);
    }

    #[test]
    fn linear_gradient_runs_between_endpoints() {
        let surface = render(100, 10, |ctx| {
            let gradient = Gradient::linear_simple(
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Color::BLACK,
                Color::WHITE,
            );
            ctx.fill_rect(0.0, 0.0, 100.0, 10.0, gradient);
        });
        let left = surface.pixel(1, 5).unwrap()[0];
        let right = surface.pixel(98, 5).unwrap()[0];
        assert!(left < 20, "left was {left}");
        assert!(right > 235, "right was {right}");
    }

    #[test]
    fn radial_gradient_fades_from_center() {
        let surface = render(40, 40, |ctx| {
            let gradient = Gradient::radial_simple(
                Point::new(20.0, 20.0),
                20.0,
                Color::WHITE,
                Color::TRANSPARENT,
            );
            ctx.fill_rect(0.0, 0.0, 40.0, 40.0, gradient);
        });
        assert!(surface.pixel(20, 20).unwrap()[3] > 240);
        assert_eq!(surface.pixel(0, 0).unwrap()[3], 0);
    }

    #[test]
    fn image_is_scaled_into_destination() {
        // 2x1 image: red then blue
        let image = Image::from_rgba8(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 255]).unwrap();
        let surface = render(40, 20, |ctx| {
            ctx.draw_image(&image, Rect::new(0.0, 0.0, 40.0, 20.0));
        });
        let left = surface.pixel(2, 10).unwrap();
        let right = surface.pixel(37, 10).unwrap();
        assert!(left[0] > 200 && left[2] < 60, "left was {left:?}");
        assert!(right[2] > 200 && right[0] < 60, "right was {right:?}");
    }

    #[test]
    fn shadow_is_blurred_and_offset_in_surface_space() {
        let surface = render(60, 60, |ctx| {
            let shadow = Shadow::new(0.0, 10.0, 6.0, Color::BLACK);
            ctx.draw_shadow(
                Circle::new(Point::new(30.0, 20.0), 8.0),
                shadow,
                ShadowInk::Fill,
            );
        });
        // Centre of the shadow sits 10px below the circle centre.
        assert!(surface.pixel(30, 30).unwrap()[3] > 150);
        // The blur softens the rim beyond the circle's radius.
        let rim = surface.pixel(30, 40).unwrap()[3];
        assert!(rim > 0 && rim < 255, "rim alpha was {rim}");
        assert_eq!(surface.pixel(30, 5).unwrap()[3], 0);
    }
}
