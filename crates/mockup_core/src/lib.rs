//! Mockup Core
//!
//! The compositing engine: renders a screen image inside a device silhouette
//! over a background, with rotation, zoom and a drop shadow.
//!
//! # Features
//!
//! - Static device and background catalogs looked up by id
//! - Solid, diagonal gradient, radial mesh and tiled backgrounds
//! - Procedural device bodies with bezel, keyboard, stand, chin, crown,
//!   joycons, RGB glow, notch, dynamic island, punch hole and fold line
//! - Cover-fit screen content clipped to the screen shape
//! - PNG / JPEG export of the composed frame
//!
//! # Example
//!
//! ```ignore
//! use mockup_core::{catalog, compose, RenderOptions, RenderRequest};
//!
//! let device = catalog::find_device_by_id("iphone-15-pro").unwrap();
//! let request = RenderRequest::new()
//!     .device(device)
//!     .background(catalog::default_background())
//!     .options(RenderOptions::default().with_rotation(-8.0));
//! let composition = compose(&request)?;
//! ```

pub mod background;
pub mod catalog;
pub mod descriptor;
pub mod details;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod request;
pub mod screen;
pub mod shadow;
pub mod silhouette;

pub use catalog::{
    default_background, find_background_by_id, find_device_by_id, list_backgrounds, list_devices,
    CategoryFilter,
};
pub use descriptor::{
    BackgroundCategory, BackgroundDescriptor, DeviceCategory, DeviceDescriptor, FillSpec,
    MeshBlob, Notch, PunchHole, Tile, TilePattern,
};
pub use error::{ParseCategoryError, RenderError, Result};
pub use mockup_image::{ExportFormat, ExportOptions, ImageSource, SourceImage};
pub use options::RenderOptions;
pub use pipeline::{compose, record, Composition, DisplayList, ExportedImage, Frame};
pub use request::RenderRequest;
