//! Paint context - the main drawing API
//!
//! Drawing calls are recorded as [`PaintCommand`]s; [`crate::raster`] executes
//! the list onto a [`crate::Surface`].

use crate::color::Color;
use crate::gradient::Gradient;
use crate::image::Image;
use crate::path::{line_path, Path, Point};
use crate::primitives::*;

/// Fill style for shapes
#[derive(Clone, Debug, PartialEq)]
pub enum FillStyle {
    Color(Color),
    Gradient(Gradient),
}

impl From<Color> for FillStyle {
    fn from(color: Color) -> Self {
        FillStyle::Color(color)
    }
}

impl From<Gradient> for FillStyle {
    fn from(gradient: Gradient) -> Self {
        FillStyle::Gradient(gradient)
    }
}

/// Stroke style
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
}

/// What a shadow's silhouette is taken from
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShadowInk {
    /// The filled interior of the shape
    Fill,
    /// An outline of the given width
    Stroke { width: f32 },
}

/// A paint command for the renderer
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    /// Replace every pixel, ignoring transform and clip
    Clear(Color),
    Fill {
        shape: Shape,
        style: FillStyle,
    },
    Stroke {
        shape: Shape,
        style: StrokeStyle,
    },
    DrawShadow {
        shape: Shape,
        shadow: Shadow,
        ink: ShadowInk,
    },
    DrawImage {
        image: Image,
        dest: Rect,
    },
    PushClip {
        shape: Shape,
    },
    PopClip,
    PushTransform {
        transform: Transform2D,
    },
    PopTransform,
}

/// 2D affine transform
///
/// Maps `(x, y)` to `(a*x + c*y + e, b*x + d*y + f)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    pub const fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: x,
            f: y,
        }
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self {
            a: sx,
            b: 0.0,
            c: 0.0,
            d: sy,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Rotation by `angle` radians (clockwise on screen, y pointing down)
    pub fn rotate(angle: f32) -> Self {
        let cos = angle.cos();
        let sin = angle.sin();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Compose with `other` applied first, then `self`.
    ///
    /// This is canvas `ctx.transform` order: `t.then(rotate)` rotates in the
    /// coordinate system already set up by `t`.
    pub fn then(self, other: Transform2D) -> Self {
        Self {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    pub fn map_point(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    pub(crate) fn to_skia(self) -> tiny_skia::Transform {
        tiny_skia::Transform::from_row(self.a, self.b, self.c, self.d, self.e, self.f)
    }
}

/// The paint context used for custom drawing
pub struct PaintContext {
    commands: Vec<PaintCommand>,
    transform_depth: usize,
    clip_depth: usize,
}

impl PaintContext {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            transform_depth: 0,
            clip_depth: 0,
        }
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    /// True when every pushed clip and transform has been popped
    pub fn is_balanced(&self) -> bool {
        self.transform_depth == 0 && self.clip_depth == 0
    }

    pub fn clear(&mut self, color: Color) {
        self.commands.push(PaintCommand::Clear(color));
    }

    // === Shape drawing ===

    pub fn fill_shape(&mut self, shape: impl Into<Shape>, style: impl Into<FillStyle>) {
        self.commands.push(PaintCommand::Fill {
            shape: shape.into(),
            style: style.into(),
        });
    }

    pub fn fill_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        style: impl Into<FillStyle>,
    ) {
        self.fill_shape(Rect::new(x, y, width, height), style);
    }

    pub fn fill_rounded_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
        style: impl Into<FillStyle>,
    ) {
        self.fill_shape(
            RoundedRect::new(Rect::new(x, y, width, height), radius),
            style,
        );
    }

    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, style: impl Into<FillStyle>) {
        self.fill_shape(Circle::new(Point::new(cx, cy), radius), style);
    }

    pub fn stroke_shape(&mut self, shape: impl Into<Shape>, color: Color, width: f32) {
        self.commands.push(PaintCommand::Stroke {
            shape: shape.into(),
            style: StrokeStyle { color, width },
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn stroke_rounded_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
        color: Color,
        line_width: f32,
    ) {
        self.stroke_shape(
            RoundedRect::new(Rect::new(x, y, width, height), radius),
            color,
            line_width,
        );
    }

    pub fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color, width: f32) {
        self.stroke_shape(Circle::new(Point::new(cx, cy), radius), color, width);
    }

    pub fn stroke_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.stroke_shape(line_path(from, to), color, width);
    }

    // === Path drawing ===

    pub fn fill_path(&mut self, path: Path, style: impl Into<FillStyle>) {
        self.fill_shape(path, style);
    }

    // === Images ===

    /// Draw `image` scaled into `dest` (in current user space)
    pub fn draw_image(&mut self, image: &Image, dest: Rect) {
        self.commands.push(PaintCommand::DrawImage {
            image: image.clone(),
            dest,
        });
    }

    // === Shadows ===

    pub fn draw_shadow(&mut self, shape: impl Into<Shape>, shadow: Shadow, ink: ShadowInk) {
        self.commands.push(PaintCommand::DrawShadow {
            shape: shape.into(),
            shadow,
            ink,
        });
    }

    // === Clipping ===

    /// Intersect the clip with `shape`; undone by [`PaintContext::pop_clip`]
    pub fn push_clip(&mut self, shape: impl Into<Shape>) {
        self.clip_depth += 1;
        self.commands.push(PaintCommand::PushClip {
            shape: shape.into(),
        });
    }

    pub fn pop_clip(&mut self) {
        self.clip_depth = self.clip_depth.saturating_sub(1);
        self.commands.push(PaintCommand::PopClip);
    }

    // === Transforms ===

    pub fn push_transform(&mut self, transform: Transform2D) {
        self.transform_depth += 1;
        self.commands.push(PaintCommand::PushTransform { transform });
    }

    pub fn pop_transform(&mut self) {
        self.transform_depth = self.transform_depth.saturating_sub(1);
        self.commands.push(PaintCommand::PopTransform);
    }
}

impl Default for PaintContext {
    fn default() -> Self {
        Self::new()
    }
}
