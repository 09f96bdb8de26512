//! Device and background descriptors
//!
//! Immutable records describing catalog entries. All per-device variability
//! lives in the optional decoration fields so the renderers never branch on a
//! device's identity.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use mockup_paint::{Color, Rect};
use serde::{Deserialize, Serialize};

use crate::error::ParseCategoryError;

/// Device family shown as a catalog tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceCategory {
    Phone,
    Tablet,
    Laptop,
    Desktop,
    Watch,
    Console,
}

impl DeviceCategory {
    /// Stable id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Tablet => "tablet",
            Self::Laptop => "laptop",
            Self::Desktop => "desktop",
            Self::Watch => "watch",
            Self::Console => "console",
        }
    }

    pub fn all() -> &'static [DeviceCategory] {
        const CATEGORIES: [DeviceCategory; 6] = [
            DeviceCategory::Phone,
            DeviceCategory::Tablet,
            DeviceCategory::Laptop,
            DeviceCategory::Desktop,
            DeviceCategory::Watch,
            DeviceCategory::Console,
        ];
        &CATEGORIES
    }
}

impl Display for DeviceCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.id())
    }
}

impl FromStr for DeviceCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Background family shown as a catalog tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundCategory {
    Gradient,
    Studio,
    Abstract,
    Texture,
}

impl BackgroundCategory {
    /// Stable id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Gradient => "gradient",
            Self::Studio => "studio",
            Self::Abstract => "abstract",
            Self::Texture => "texture",
        }
    }

    pub fn all() -> &'static [BackgroundCategory] {
        const CATEGORIES: [BackgroundCategory; 4] = [
            BackgroundCategory::Gradient,
            BackgroundCategory::Studio,
            BackgroundCategory::Abstract,
            BackgroundCategory::Texture,
        ];
        &CATEGORIES
    }
}

impl Display for BackgroundCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.id())
    }
}

impl FromStr for BackgroundCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Phone-style cutout at the top edge of the body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Notch {
    pub width: f32,
    pub height: f32,
}

/// Front camera hole, in device-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PunchHole {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// A device silhouette and its screen area, in device-local units.
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub category: DeviceCategory,

    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    /// Round body; the screen is a circle of diameter `screen_width`
    pub circular: bool,
    pub frame_color: Color,

    pub screen_x: f32,
    pub screen_y: f32,
    pub screen_width: f32,
    pub screen_height: f32,
    pub bezel_width: f32,

    pub keyboard: bool,
    pub stand: bool,
    /// Height of the bar below the screen; `0` for none
    pub chin_height: f32,
    pub crown: bool,
    pub joycons: bool,
    pub rgb_glow: bool,
    pub notch: Option<Notch>,
    /// Drawn in place of `notch` when both are set
    pub dynamic_island: bool,
    /// Laptop-style camera notch; only drawn together with `keyboard`
    pub has_notch: bool,
    pub punch_hole: Option<PunchHole>,
    pub fold_line: bool,
}

impl DeviceDescriptor {
    /// A plain rounded body with its screen filling the whole body
    pub fn new(
        id: &'static str,
        name: &'static str,
        category: DeviceCategory,
        width: f32,
        height: f32,
    ) -> Self {
        Self {
            id,
            name,
            icon: "",
            category,
            width,
            height,
            corner_radius: 0.0,
            circular: false,
            frame_color: Color::BLACK,
            screen_x: 0.0,
            screen_y: 0.0,
            screen_width: width,
            screen_height: height,
            bezel_width: 0.0,
            keyboard: false,
            stand: false,
            chin_height: 0.0,
            crown: false,
            joycons: false,
            rgb_glow: false,
            notch: None,
            dynamic_island: false,
            has_notch: false,
            punch_hole: None,
            fold_line: false,
        }
    }

    // === Builder methods ===

    pub fn icon(mut self, icon: &'static str) -> Self {
        self.icon = icon;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn circular(mut self) -> Self {
        self.circular = true;
        self
    }

    pub fn frame_color(mut self, color: Color) -> Self {
        self.frame_color = color;
        self
    }

    pub fn screen(mut self, x: f32, y: f32, width: f32, height: f32, bezel: f32) -> Self {
        self.screen_x = x;
        self.screen_y = y;
        self.screen_width = width;
        self.screen_height = height;
        self.bezel_width = bezel;
        self
    }

    pub fn keyboard(mut self) -> Self {
        self.keyboard = true;
        self
    }

    pub fn stand(mut self) -> Self {
        self.stand = true;
        self
    }

    pub fn chin(mut self, height: f32) -> Self {
        self.chin_height = height;
        self
    }

    pub fn crown(mut self) -> Self {
        self.crown = true;
        self
    }

    pub fn joycons(mut self) -> Self {
        self.joycons = true;
        self
    }

    pub fn rgb_glow(mut self) -> Self {
        self.rgb_glow = true;
        self
    }

    pub fn notch(mut self, width: f32, height: f32) -> Self {
        self.notch = Some(Notch { width, height });
        self
    }

    pub fn dynamic_island(mut self) -> Self {
        self.dynamic_island = true;
        self
    }

    pub fn laptop_notch(mut self) -> Self {
        self.has_notch = true;
        self
    }

    pub fn punch_hole(mut self, x: f32, y: f32, radius: f32) -> Self {
        self.punch_hole = Some(PunchHole { x, y, radius });
        self
    }

    pub fn fold_line(mut self) -> Self {
        self.fold_line = true;
        self
    }

    // === Derived geometry ===

    /// Screen corner radius: the body radius minus the bezel, never negative.
    pub fn inner_radius(&self) -> f32 {
        (self.corner_radius - self.bezel_width).max(0.0)
    }

    /// The screen rectangle clamped into `[0, width] x [0, height]`.
    pub fn screen_rect(&self) -> Rect {
        let x = self.screen_x.clamp(0.0, self.width);
        let y = self.screen_y.clamp(0.0, self.height);
        let width = self.screen_width.clamp(0.0, self.width - x);
        let height = self.screen_height.clamp(0.0, self.height - y);
        let rect = Rect::new(x, y, width, height);
        let declared = Rect::new(
            self.screen_x,
            self.screen_y,
            self.screen_width,
            self.screen_height,
        );
        if rect != declared {
            tracing::warn!(
                device = self.id,
                ?declared,
                clamped = ?rect,
                "screen rect exceeds device bounds, clamping"
            );
        }
        rect
    }
}

/// One colour blob of a mesh background, positioned in percent of the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshBlob {
    pub x_percent: f32,
    pub y_percent: f32,
    pub color: Color,
}

impl MeshBlob {
    pub const fn new(x_percent: f32, y_percent: f32, color: Color) -> Self {
        Self {
            x_percent,
            y_percent,
            color,
        }
    }
}

/// How a background covers the surface.
#[derive(Clone, Debug, PartialEq)]
pub enum FillSpec {
    Solid(Color),
    /// Diagonal gradient through evenly spaced stops. `angle_degrees` is
    /// catalog metadata; rendering always runs corner to corner.
    Linear { stops: Vec<Color>, angle_degrees: f32 },
    /// Opaque base overlaid with soft radial blobs.
    RadialMesh { base: Color, blobs: Vec<MeshBlob> },
}

/// A repeating pattern painted over a background fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
    /// Pitch in surface pixels
    pub size: f32,
    pub pattern: TilePattern,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TilePattern {
    /// A line along the top and left edge of every tile
    Grid { color: Color, line_width: f32 },
    /// A dot centred in every tile
    Dots { color: Color, radius: f32 },
}

/// A selectable background.
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub category: BackgroundCategory,
    pub fill: FillSpec,
    pub tile: Option<Tile>,
}

impl BackgroundDescriptor {
    pub fn new(
        id: &'static str,
        name: &'static str,
        category: BackgroundCategory,
        fill: FillSpec,
    ) -> Self {
        Self {
            id,
            name,
            category,
            fill,
            tile: None,
        }
    }

    pub fn solid(
        id: &'static str,
        name: &'static str,
        category: BackgroundCategory,
        color: Color,
    ) -> Self {
        Self::new(id, name, category, FillSpec::Solid(color))
    }

    pub fn tiled(mut self, tile: Tile) -> Self {
        self.tile = Some(tile);
        self
    }
}
