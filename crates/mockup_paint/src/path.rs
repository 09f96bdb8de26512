//! Path building and representation

use smallvec::SmallVec;

/// Cubic bezier control distance for a quarter circle: 4/3 * tan(π/8)
const KAPPA: f32 = 0.552_284_8;

/// A 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Path command
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo {
        control: Point,
        end: Point,
    },
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    Close,
}

/// A 2D path composed of commands
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: SmallVec<[PathCommand; 16]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Add `other`'s subpaths after this path's, so both fill in one pass.
    pub fn append(&mut self, other: &Path) {
        self.commands.extend_from_slice(&other.commands);
    }

    /// Every point the path touches, control points included.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().flat_map(|command| {
            let points: SmallVec<[Point; 3]> = match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => smallvec::smallvec![p],
                PathCommand::QuadTo { control, end } => smallvec::smallvec![control, end],
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => smallvec::smallvec![control1, control2, end],
                PathCommand::Close => SmallVec::new(),
            };
            points
        })
    }

    pub(crate) fn to_skia(&self) -> Option<tiny_skia::Path> {
        let mut builder = tiny_skia::PathBuilder::new();
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => builder.move_to(p.x, p.y),
                PathCommand::LineTo(p) => builder.line_to(p.x, p.y),
                PathCommand::QuadTo { control, end } => {
                    builder.quad_to(control.x, control.y, end.x, end.y)
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => builder.cubic_to(
                    control1.x, control1.y, control2.x, control2.y, end.x, end.y,
                ),
                PathCommand::Close => builder.close(),
            }
        }
        builder.finish()
    }
}

/// Builder for constructing paths
pub struct PathBuilder {
    path: Path,
    current: Point,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            path: Path::new(),
            current: Point::ZERO,
        }
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        let point = Point::new(x, y);
        self.path.commands.push(PathCommand::MoveTo(point));
        self.current = point;
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        let point = Point::new(x, y);
        self.path.commands.push(PathCommand::LineTo(point));
        self.current = point;
        self
    }

    pub fn quad_to(mut self, cx: f32, cy: f32, x: f32, y: f32) -> Self {
        let end = Point::new(x, y);
        self.path.commands.push(PathCommand::QuadTo {
            control: Point::new(cx, cy),
            end,
        });
        self.current = end;
        self
    }

    pub fn cubic_to(mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) -> Self {
        let end = Point::new(x, y);
        self.path.commands.push(PathCommand::CubicTo {
            control1: Point::new(c1x, c1y),
            control2: Point::new(c2x, c2y),
            end,
        });
        self.current = end;
        self
    }

    /// The point the next segment starts from.
    pub fn current(&self) -> Point {
        self.current
    }

    pub fn close(mut self) -> Self {
        self.path.commands.push(PathCommand::Close);
        self
    }

    pub fn build(self) -> Path {
        self.path
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp a corner radius so the four corners of a `w`×`h` box never overlap.
pub fn clamp_corner_radius(w: f32, h: f32, r: f32) -> f32 {
    let max_radius = (w.min(h) / 2.0).max(0.0);
    r.clamp(0.0, max_radius)
}

/// Closed rounded rectangle with quadratic quarter-corners.
///
/// `r` is clamped to `[0, min(w, h) / 2]`, so an over-large radius degrades to
/// a pill or circle instead of a self-intersecting outline.
pub fn rounded_rect_path(x: f32, y: f32, w: f32, h: f32, r: f32) -> Path {
    let r = clamp_corner_radius(w, h, r);
    PathBuilder::new()
        .move_to(x + r, y)
        .line_to(x + w - r, y)
        .quad_to(x + w, y, x + w, y + r)
        .line_to(x + w, y + h - r)
        .quad_to(x + w, y + h, x + w - r, y + h)
        .line_to(x + r, y + h)
        .quad_to(x, y + h, x, y + h - r)
        .line_to(x, y + r)
        .quad_to(x, y, x + r, y)
        .close()
        .build()
}

/// Full circle built from four cubic quadrants, starting at the top.
pub fn circle_path(cx: f32, cy: f32, r: f32) -> Path {
    let r = r.max(0.0);
    let k = r * KAPPA;
    PathBuilder::new()
        .move_to(cx, cy - r)
        .cubic_to(cx + k, cy - r, cx + r, cy - k, cx + r, cy)
        .cubic_to(cx + r, cy + k, cx + k, cy + r, cx, cy + r)
        .cubic_to(cx - k, cy + r, cx - r, cy + k, cx - r, cy)
        .cubic_to(cx - r, cy - k, cx - k, cy - r, cx, cy - r)
        .close()
        .build()
}

/// Open two-point segment, used for stroked lines.
pub fn line_path(from: Point, to: Point) -> Path {
    PathBuilder::new()
        .move_to(from.x, from.y)
        .line_to(to.x, to.y)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(path: &Path) -> (f32, f32, f32, f32) {
        path.points().fold(
            (f32::MAX, f32::MAX, f32::MIN, f32::MIN),
            |(x0, y0, x1, y1), p| (x0.min(p.x), y0.min(p.y), x1.max(p.x), y1.max(p.y)),
        )
    }

    #[test]
    fn rounded_rect_is_closed_and_bounded() {
        let path = rounded_rect_path(10.0, 20.0, 100.0, 50.0, 8.0);
        assert_eq!(path.commands().last(), Some(&PathCommand::Close));
        assert_eq!(bounds(&path), (10.0, 20.0, 110.0, 70.0));
    }

    #[test]
    fn oversized_radius_is_clamped_to_half_short_side() {
        let path = rounded_rect_path(0.0, 0.0, 100.0, 40.0, 500.0);
        // With r clamped to 20 the top edge runs from x=20 to x=80.
        assert_eq!(path.commands()[0], PathCommand::MoveTo(Point::new(20.0, 0.0)));
        assert_eq!(path.commands()[1], PathCommand::LineTo(Point::new(80.0, 0.0)));
        for p in path.points() {
            assert!(p.x >= 0.0 && p.x <= 100.0 && p.y >= 0.0 && p.y <= 40.0);
        }
    }

    #[test]
    fn negative_radius_becomes_square_corners() {
        let path = rounded_rect_path(0.0, 0.0, 10.0, 10.0, -3.0);
        assert_eq!(path.commands()[0], PathCommand::MoveTo(Point::new(0.0, 0.0)));
    }

    #[test]
    fn circle_touches_its_extremes() {
        let path = circle_path(50.0, 40.0, 10.0);
        assert_eq!(bounds(&path), (40.0, 30.0, 60.0, 50.0));
        let cubics = path
            .commands()
            .iter()
            .filter(|c| matches!(c, PathCommand::CubicTo { .. }))
            .count();
        assert_eq!(cubics, 4);
    }

    #[test]
    fn builder_tracks_current_point() {
        let builder = PathBuilder::new().move_to(1.0, 2.0).quad_to(3.0, 4.0, 5.0, 6.0);
        assert_eq!(builder.current(), Point::new(5.0, 6.0));
    }

    #[test]
    fn append_keeps_both_subpaths() {
        let mut path = circle_path(0.0, 0.0, 1.0);
        let before = path.commands().len();
        path.append(&rounded_rect_path(5.0, 5.0, 2.0, 2.0, 0.0));
        assert!(path.commands().len() > before);
        let moves = path
            .commands()
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo(_)))
            .count();
        assert_eq!(moves, 2);
    }
}
