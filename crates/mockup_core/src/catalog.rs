//! Built-in device and background catalogs
//!
//! Both registries are built once on first access and handed out as
//! `&'static` slices in declaration order.

use std::str::FromStr;
use std::sync::OnceLock;

use mockup_paint::Color;

use crate::descriptor::{
    BackgroundCategory as Bg, BackgroundDescriptor, DeviceCategory as Dev, DeviceDescriptor,
    FillSpec, MeshBlob, Tile, TilePattern,
};
use crate::error::ParseCategoryError;

/// Catalog tab selection: everything, or one category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CategoryFilter<C> {
    #[default]
    All,
    Only(C),
}

impl<C: PartialEq + Copy> CategoryFilter<C> {
    pub fn matches(&self, category: C) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => *c == category,
        }
    }
}

impl<C> FromStr for CategoryFilter<C>
where
    C: FromStr<Err = ParseCategoryError>,
{
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// Every device, in catalog order.
pub fn all_devices() -> &'static [DeviceDescriptor] {
    static DEVICES: OnceLock<Vec<DeviceDescriptor>> = OnceLock::new();
    DEVICES.get_or_init(build_devices)
}

/// Every background, in catalog order.
pub fn all_backgrounds() -> &'static [BackgroundDescriptor] {
    static BACKGROUNDS: OnceLock<Vec<BackgroundDescriptor>> = OnceLock::new();
    BACKGROUNDS.get_or_init(build_backgrounds)
}

pub fn list_devices(filter: CategoryFilter<Dev>) -> Vec<&'static DeviceDescriptor> {
    all_devices()
        .iter()
        .filter(|d| filter.matches(d.category))
        .collect()
}

pub fn list_backgrounds(filter: CategoryFilter<Bg>) -> Vec<&'static BackgroundDescriptor> {
    all_backgrounds()
        .iter()
        .filter(|b| filter.matches(b.category))
        .collect()
}

pub fn find_device_by_id(id: &str) -> Option<&'static DeviceDescriptor> {
    all_devices().iter().find(|d| d.id == id)
}

pub fn find_background_by_id(id: &str) -> Option<&'static BackgroundDescriptor> {
    all_backgrounds().iter().find(|b| b.id == id)
}

/// Background selected before the user picks one: the first gradient.
pub fn default_background() -> &'static BackgroundDescriptor {
    &all_backgrounds()[0]
}

fn hex(value: u32) -> Color {
    Color::from_hex(value)
}

fn build_devices() -> Vec<DeviceDescriptor> {
    vec![
        // Phones
        DeviceDescriptor::new("iphone-15-pro", "iPhone 15 Pro", Dev::Phone, 300.0, 620.0)
            .icon("📱")
            .corner_radius(50.0)
            .frame_color(hex(0x1c1c1e))
            .screen(12.0, 12.0, 276.0, 596.0, 12.0)
            .dynamic_island(),
        DeviceDescriptor::new("iphone-14", "iPhone 14", Dev::Phone, 300.0, 620.0)
            .icon("📱")
            .corner_radius(48.0)
            .frame_color(hex(0x2c2c2e))
            .screen(14.0, 14.0, 272.0, 592.0, 14.0)
            .notch(150.0, 30.0),
        DeviceDescriptor::new("pixel-8", "Pixel 8", Dev::Phone, 290.0, 610.0)
            .icon("📱")
            .corner_radius(40.0)
            .frame_color(hex(0x202124))
            .screen(12.0, 12.0, 266.0, 586.0, 12.0)
            .punch_hole(145.0, 30.0, 8.0),
        DeviceDescriptor::new("galaxy-s24", "Galaxy S24", Dev::Phone, 290.0, 615.0)
            .icon("📱")
            .corner_radius(36.0)
            .frame_color(hex(0x0f0f10))
            .screen(10.0, 10.0, 270.0, 595.0, 10.0)
            .punch_hole(145.0, 26.0, 7.0),
        DeviceDescriptor::new("galaxy-z-fold", "Galaxy Z Fold", Dev::Phone, 520.0, 620.0)
            .icon("📱")
            .corner_radius(30.0)
            .frame_color(hex(0x1a1a1a))
            .screen(14.0, 14.0, 492.0, 592.0, 14.0)
            .fold_line(),
        // Tablets
        DeviceDescriptor::new("ipad-pro", "iPad Pro", Dev::Tablet, 560.0, 760.0)
            .icon("📲")
            .corner_radius(36.0)
            .frame_color(hex(0x1c1c1e))
            .screen(24.0, 24.0, 512.0, 712.0, 24.0),
        DeviceDescriptor::new("ipad-mini", "iPad Mini", Dev::Tablet, 420.0, 620.0)
            .icon("📲")
            .corner_radius(30.0)
            .frame_color(hex(0x2c2c2e))
            .screen(22.0, 22.0, 376.0, 576.0, 22.0),
        // Laptops
        DeviceDescriptor::new("macbook-pro", "MacBook Pro", Dev::Laptop, 760.0, 500.0)
            .icon("💻")
            .corner_radius(18.0)
            .frame_color(hex(0x1d1d1f))
            .screen(22.0, 18.0, 716.0, 402.0, 16.0)
            .keyboard()
            .laptop_notch(),
        DeviceDescriptor::new("laptop", "Laptop", Dev::Laptop, 740.0, 480.0)
            .icon("💻")
            .corner_radius(14.0)
            .frame_color(hex(0x2b2b2b))
            .screen(24.0, 22.0, 692.0, 388.0, 14.0)
            .keyboard(),
        // Desktops
        DeviceDescriptor::new("imac", "iMac", Dev::Desktop, 760.0, 560.0)
            .icon("🖥️")
            .corner_radius(20.0)
            .frame_color(hex(0xe3e4e6))
            .screen(20.0, 20.0, 720.0, 420.0, 12.0)
            .stand()
            .chin(100.0),
        DeviceDescriptor::new("studio-display", "Studio Display", Dev::Desktop, 760.0, 460.0)
            .icon("🖥️")
            .corner_radius(12.0)
            .frame_color(hex(0xc7c8ca))
            .screen(18.0, 18.0, 724.0, 424.0, 10.0)
            .stand(),
        DeviceDescriptor::new("gaming-monitor", "Gaming Monitor", Dev::Desktop, 780.0, 450.0)
            .icon("🖥️")
            .corner_radius(8.0)
            .frame_color(hex(0x111111))
            .screen(10.0, 10.0, 760.0, 420.0, 6.0)
            .stand()
            .rgb_glow(),
        // Watches
        DeviceDescriptor::new("apple-watch", "Apple Watch", Dev::Watch, 200.0, 240.0)
            .icon("⌚")
            .corner_radius(48.0)
            .frame_color(hex(0x1c1c1e))
            .screen(16.0, 16.0, 168.0, 208.0, 14.0)
            .crown(),
        DeviceDescriptor::new("galaxy-watch", "Galaxy Watch", Dev::Watch, 240.0, 240.0)
            .icon("⌚")
            .corner_radius(120.0)
            .circular()
            .frame_color(hex(0x222222))
            .screen(20.0, 20.0, 200.0, 200.0, 20.0),
        // Consoles
        DeviceDescriptor::new("nintendo-switch", "Nintendo Switch", Dev::Console, 820.0, 360.0)
            .icon("🎮")
            .corner_radius(24.0)
            .frame_color(hex(0x2d2d2d))
            .screen(120.0, 30.0, 580.0, 300.0, 12.0)
            .joycons(),
    ]
}

fn linear(stops: &[u32], angle_degrees: f32) -> FillSpec {
    FillSpec::Linear {
        stops: stops.iter().copied().map(hex).collect(),
        angle_degrees,
    }
}

fn mesh(base: u32, blobs: &[(f32, f32, u32)]) -> FillSpec {
    FillSpec::RadialMesh {
        base: hex(base),
        blobs: blobs
            .iter()
            .map(|&(x, y, color)| MeshBlob::new(x, y, hex(color)))
            .collect(),
    }
}

fn build_backgrounds() -> Vec<BackgroundDescriptor> {
    let gradient = |id, name, stops: &[u32]| {
        BackgroundDescriptor::new(id, name, Bg::Gradient, linear(stops, 135.0))
    };
    let studio = |id, name, stops: &[u32]| {
        BackgroundDescriptor::new(id, name, Bg::Studio, linear(stops, 180.0))
    };
    let texture_base = hex(0x1a1a1a);

    vec![
        gradient("gradient1", "Purple Pink", &[0x667eea, 0x764ba2, 0xf093fb]),
        gradient("gradient2", "Blue Cyan", &[0x0093e9, 0x80d0c7]),
        gradient("gradient3", "Orange Red", &[0xfa709a, 0xfee140]),
        gradient("gradient4", "Green Teal", &[0x11998e, 0x38ef7d]),
        gradient("gradient5", "Dark Purple", &[0x1a1a2e, 0x16213e, 0x0f3460]),
        gradient("gradient6", "Sunset", &[0xff6b6b, 0xfeca57, 0xff9ff3]),
        gradient("gradient7", "Ocean", &[0x2e3192, 0x1bffff]),
        gradient("gradient8", "Neon", &[0xf5af19, 0xf12711, 0xc471ed]),
        studio("studio1", "Pure White", &[0xffffff, 0xf0f0f0]),
        studio("studio2", "Light Gray", &[0xe8e8e8, 0xd0d0d0]),
        studio("studio3", "Dark Studio", &[0x2d2d2d, 0x1a1a1a]),
        studio("studio4", "Pure Black", &[0x0a0a0a, 0x000000]),
        studio("studio5", "Warm Beige", &[0xf5f0e8, 0xe8ddd0]),
        studio("studio6", "Cool Blue", &[0xe8f4fc, 0xd0e8f5]),
        BackgroundDescriptor::new(
            "abstract1",
            "Mesh Purple",
            Bg::Abstract,
            mesh(
                0x0f0f23,
                &[
                    (40.0, 20.0, 0x6366f1),
                    (80.0, 0.0, 0xec4899),
                    (0.0, 50.0, 0x8b5cf6),
                    (80.0, 50.0, 0x14b8a6),
                    (0.0, 100.0, 0xf97316),
                    (80.0, 100.0, 0x6366f1),
                ],
            ),
        ),
        BackgroundDescriptor::new(
            "abstract2",
            "Mesh Blue",
            Bg::Abstract,
            mesh(
                0x0a0a1a,
                &[
                    (20.0, 30.0, 0x0ea5e9),
                    (80.0, 20.0, 0x06b6d4),
                    (40.0, 80.0, 0x3b82f6),
                    (90.0, 70.0, 0x8b5cf6),
                ],
            ),
        ),
        BackgroundDescriptor::new(
            "abstract3",
            "Mesh Warm",
            Bg::Abstract,
            mesh(
                0x1a0a0a,
                &[
                    (10.0, 20.0, 0xf97316),
                    (90.0, 30.0, 0xef4444),
                    (30.0, 70.0, 0xf59e0b),
                    (70.0, 90.0, 0xec4899),
                ],
            ),
        ),
        BackgroundDescriptor::new(
            "abstract4",
            "Aurora",
            Bg::Abstract,
            linear(&[0x0c0c1d, 0x1a1a3e, 0x0f2027], 180.0),
        ),
        BackgroundDescriptor::solid("texture1", "Noise Dark", Bg::Texture, texture_base),
        BackgroundDescriptor::solid("texture2", "Noise Light", Bg::Texture, hex(0xe5e5e5)),
        BackgroundDescriptor::solid("texture3", "Grid Dark", Bg::Texture, texture_base).tiled(
            Tile {
                size: 20.0,
                pattern: TilePattern::Grid {
                    color: hex(0x2a2a2a),
                    line_width: 1.0,
                },
            },
        ),
        BackgroundDescriptor::solid("texture4", "Dots", Bg::Texture, texture_base).tiled(Tile {
            size: 20.0,
            pattern: TilePattern::Dots {
                color: hex(0x3a3a3a),
                radius: 1.0,
            },
        }),
    ]
}
