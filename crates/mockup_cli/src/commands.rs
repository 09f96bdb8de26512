//! Subcommand implementations

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Args;
use mockup_core::catalog::{find_background_by_id, find_device_by_id};
use mockup_core::{
    compose, list_backgrounds, list_devices, BackgroundCategory, BackgroundDescriptor,
    CategoryFilter, Composition, DeviceCategory, DeviceDescriptor, ExportOptions, FillSpec,
    ImageSource, RenderOptions, RenderRequest, SourceImage,
};
use serde::Serialize;

use crate::config::MockupConfig;

/// Shown instead of a frame when no device or background is selected
pub const EMPTY_STATE_MESSAGE: &str =
    "No device selected. Pick one with --device (see `mockup devices`).";

#[derive(Serialize, Debug, PartialEq)]
struct DeviceSummary {
    id: &'static str,
    name: &'static str,
    icon: &'static str,
    category: DeviceCategory,
    width: f32,
    height: f32,
}

impl From<&DeviceDescriptor> for DeviceSummary {
    fn from(device: &DeviceDescriptor) -> Self {
        Self {
            id: device.id,
            name: device.name,
            icon: device.icon,
            category: device.category,
            width: device.width,
            height: device.height,
        }
    }
}

#[derive(Serialize, Debug, PartialEq)]
struct BackgroundSummary {
    id: &'static str,
    name: &'static str,
    category: BackgroundCategory,
    fill: &'static str,
    tiled: bool,
}

impl From<&BackgroundDescriptor> for BackgroundSummary {
    fn from(background: &BackgroundDescriptor) -> Self {
        let fill = match background.fill {
            FillSpec::Solid(_) => "solid",
            FillSpec::Linear { .. } => "linear",
            FillSpec::RadialMesh { .. } => "mesh",
        };
        Self {
            id: background.id,
            name: background.name,
            category: background.category,
            fill,
            tiled: background.tile.is_some(),
        }
    }
}

pub fn devices(category: CategoryFilter<DeviceCategory>, json: bool) -> Result<()> {
    let summaries: Vec<DeviceSummary> = list_devices(category)
        .into_iter()
        .map(DeviceSummary::from)
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }
    for d in &summaries {
        println!("{:<18} {:<24} {:<8} {}x{}", d.id, d.name, d.category, d.width, d.height);
    }
    Ok(())
}

pub fn backgrounds(category: CategoryFilter<BackgroundCategory>, json: bool) -> Result<()> {
    let summaries: Vec<BackgroundSummary> = list_backgrounds(category)
        .into_iter()
        .map(BackgroundSummary::from)
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }
    for b in &summaries {
        let tiled = if b.tiled { " (tiled)" } else { "" };
        println!("{:<12} {:<16} {:<9} {}{}", b.id, b.name, b.category, b.fill, tiled);
    }
    Ok(())
}

/// Flags for `mockup render`; each one overrides the config file
#[derive(Args, Debug, Default, Clone, PartialEq)]
pub struct RenderArgs {
    /// Device id (see `mockup devices`)
    #[arg(long)]
    pub device: Option<String>,
    /// Background id (see `mockup backgrounds`)
    #[arg(long)]
    pub background: Option<String>,
    /// Screen image: a file path, file:// URI or data:image/...;base64 URI
    #[arg(long)]
    pub image: Option<String>,
    /// Clockwise rotation in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub rotation: Option<f32>,
    /// Zoom in percent
    #[arg(long)]
    pub zoom: Option<f32>,
    /// Disable the drop shadow
    #[arg(long)]
    pub no_shadow: bool,
    /// Export quality; 1.0 writes PNG, lower values write JPEG
    #[arg(long)]
    pub quality: Option<f32>,
    /// Output directory
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Config file (defaults to ./mockup.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Config and flags merged into one render job
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub device: Option<String>,
    pub background: Option<String>,
    pub image: Option<String>,
    pub options: RenderOptions,
    pub export: ExportOptions,
    pub output_dir: PathBuf,
}

impl RenderArgs {
    pub fn plan(&self, config: &MockupConfig) -> RenderPlan {
        let mut options = config.render.options;
        if let Some(rotation) = self.rotation {
            options = options.with_rotation(rotation);
        }
        if let Some(zoom) = self.zoom {
            options = options.with_zoom(zoom);
        }
        if self.no_shadow {
            options = options.with_shadow(false);
        }

        RenderPlan {
            device: self.device.clone().or_else(|| config.render.device.clone()),
            background: self
                .background
                .clone()
                .or_else(|| config.render.background.clone()),
            image: self.image.clone(),
            options,
            export: self
                .quality
                .map(ExportOptions::with_quality)
                .unwrap_or_else(|| config.export.options()),
            output_dir: self
                .out
                .clone()
                .unwrap_or_else(|| config.export.output_dir.clone()),
        }
    }
}

pub fn render(args: &RenderArgs) -> Result<ExitCode> {
    let config = MockupConfig::load(args.config.as_deref())?;
    let plan = args.plan(&config);
    tracing::debug!(?plan, "render plan");

    let device = plan
        .device
        .as_deref()
        .map(|id| {
            find_device_by_id(id).with_context(|| {
                format!("Unknown device `{id}`. Run `mockup devices` to list them.")
            })
        })
        .transpose()?;
    let background = plan
        .background
        .as_deref()
        .map(|id| {
            find_background_by_id(id).with_context(|| {
                format!("Unknown background `{id}`. Run `mockup backgrounds` to list them.")
            })
        })
        .transpose()?;
    let image = plan
        .image
        .as_deref()
        .map(|uri| {
            SourceImage::load(ImageSource::from_uri(uri))
                .with_context(|| format!("Failed to load image {}", abbreviate(uri)))
        })
        .transpose()?;

    let mut request = RenderRequest::new().options(plan.options);
    request.device = device;
    request.background = background;
    request.image = image.as_ref();

    let frame = match compose(&request)? {
        Composition::Composed(frame) => frame,
        Composition::Empty => {
            eprintln!("{EMPTY_STATE_MESSAGE}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let exported = frame.export(&plan.export, timestamp_millis())?;
    fs::create_dir_all(&plan.output_dir)
        .with_context(|| format!("Failed to create {}", plan.output_dir.display()))?;
    let path = plan.output_dir.join(&exported.file_name);
    fs::write(&path, &exported.bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        width = frame.width(),
        height = frame.height(),
        format = exported.format.mime_type(),
        "mockup written"
    );
    println!("{}", path.display());
    Ok(ExitCode::SUCCESS)
}

fn timestamp_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Keep pasted data URIs out of error messages
fn abbreviate(uri: &str) -> &str {
    match uri.find(',') {
        Some(comma) if uri.starts_with("data:") => &uri[..comma],
        _ => uri,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let mut config = MockupConfig::default();
        config.render.device = Some("pixel-8".to_string());
        config.render.options = RenderOptions::default().with_rotation(10.0).with_zoom(80.0);
        config.export.quality = 0.7;

        let args = RenderArgs {
            device: Some("ipad-mini".to_string()),
            rotation: Some(-20.0),
            no_shadow: true,
            out: Some(PathBuf::from("shots")),
            ..Default::default()
        };
        let plan = args.plan(&config);

        assert_eq!(plan.device.as_deref(), Some("ipad-mini"));
        assert_eq!(plan.background.as_deref(), Some("gradient1"));
        assert_eq!(
            plan.options,
            RenderOptions::default()
                .with_rotation(-20.0)
                .with_zoom(80.0)
                .with_shadow(false)
        );
        assert_eq!(plan.export, ExportOptions::with_quality(0.7));
        assert_eq!(plan.output_dir, PathBuf::from("shots"));
    }

    #[test]
    fn config_fills_missing_flags() {
        let plan = RenderArgs::default().plan(&MockupConfig::default());
        assert_eq!(plan.device, None);
        assert_eq!(plan.image, None);
        assert_eq!(plan.options, RenderOptions::default());
        assert_eq!(plan.export, ExportOptions::default());
        assert_eq!(plan.output_dir, PathBuf::from("."));
    }

    #[test]
    fn summaries_serialize_lowercase_categories() {
        let device = find_device_by_id("iphone-15-pro").unwrap();
        let json = serde_json::to_value(DeviceSummary::from(device)).unwrap();
        assert_eq!(json["id"], "iphone-15-pro");
        assert_eq!(json["category"], "phone");

        let background = find_background_by_id("texture3").unwrap();
        let summary = BackgroundSummary::from(background);
        assert!(summary.tiled);
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["category"], "texture");
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("mockup-cli-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn render_writes_jpeg() {
        let out = scratch_dir("jpeg");
        let args = RenderArgs {
            device: Some("apple-watch".to_string()),
            zoom: Some(50.0),
            quality: Some(0.5),
            out: Some(out.clone()),
            ..Default::default()
        };
        render(&args).unwrap();

        let written: Vec<PathBuf> = fs::read_dir(&out)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        assert_eq!(written.len(), 1);
        let name = written[0].file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("mockup-apple-watch-"), "{name}");
        assert!(name.ends_with(".jpeg"), "{name}");
        fs::remove_dir_all(&out).unwrap();
    }

    #[test]
    fn render_without_device_writes_nothing() {
        let out = scratch_dir("empty");
        let args = RenderArgs {
            out: Some(out.clone()),
            ..Default::default()
        };
        render(&args).unwrap();
        assert!(!out.exists());
    }

    #[test]
    fn unknown_device_is_an_error() {
        let args = RenderArgs {
            device: Some("toaster".to_string()),
            ..Default::default()
        };
        let err = render(&args).unwrap_err();
        assert!(err.to_string().contains("Unknown device `toaster`"));
    }

    #[test]
    fn data_uris_are_abbreviated() {
        assert_eq!(abbreviate("data:image/png;base64,AAAA"), "data:image/png;base64");
        assert_eq!(abbreviate("shots/a,b.png"), "shots/a,b.png");
    }
}
