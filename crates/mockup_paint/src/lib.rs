//! Mockup Paint API
//!
//! A small 2D drawing API modelled on HTML Canvas: drawing calls are recorded
//! into a display list by [`PaintContext`] and executed on the CPU by
//! [`raster::rasterize`] onto a [`Surface`].
//!
//! # Features
//!
//! - Path drawing (lines, quadratic and cubic curves)
//! - Shape primitives (rect, circle, rounded rect)
//! - Fills and strokes with colors, linear and radial gradients
//! - Blurred, offset drop shadows
//! - Scaled image drawing
//! - Nested clipping and transforms

pub mod blur;
pub mod color;
pub mod context;
pub mod error;
pub mod gradient;
pub mod image;
pub mod path;
pub mod primitives;
pub mod raster;
pub mod surface;

pub use color::Color;
pub use context::{FillStyle, PaintCommand, PaintContext, ShadowInk, StrokeStyle, Transform2D};
pub use error::{PaintError, Result};
pub use gradient::{Gradient, GradientStop};
pub use image::Image;
pub use path::{Path, PathBuilder, Point};
pub use primitives::*;
pub use raster::{rasterize, Rasterizer};
pub use surface::Surface;
