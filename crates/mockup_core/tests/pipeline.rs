//! End-to-end render pass properties

use mockup_core::catalog::{all_backgrounds, find_device_by_id};
use mockup_core::{
    compose, record, BackgroundCategory, BackgroundDescriptor, Composition, DeviceCategory,
    DeviceDescriptor, ExportFormat, ExportOptions, FillSpec, Frame, ImageSource, MeshBlob,
    RenderOptions, RenderRequest, SourceImage,
};
use mockup_paint::{Color, PaintCommand, Rect, RoundedRect, Shape};

fn reference_device() -> DeviceDescriptor {
    DeviceDescriptor::new("reference", "Reference", DeviceCategory::Phone, 300.0, 600.0)
        .corner_radius(40.0)
        .frame_color(Color::from_hex(0x111111))
        .screen(10.0, 10.0, 280.0, 580.0, 10.0)
}

fn white() -> BackgroundDescriptor {
    BackgroundDescriptor::solid("white", "White", BackgroundCategory::Studio, Color::WHITE)
}

fn no_shadow() -> RenderOptions {
    RenderOptions::default().with_shadow(false)
}

fn frame(request: &RenderRequest<'_>) -> Frame {
    match compose(request).unwrap() {
        Composition::Composed(frame) => frame,
        Composition::Empty => panic!("expected a composed frame"),
    }
}

fn solid_image(width: u32, height: u32, rgba: [u8; 4]) -> SourceImage {
    let pixels: Vec<u8> = rgba
        .iter()
        .copied()
        .cycle()
        .take((width * height * 4) as usize)
        .collect();
    SourceImage::from_rgba8(width, height, pixels).unwrap()
}

#[test]
fn reference_device_on_white() {
    let device = reference_device();
    let background = white();
    let request = RenderRequest::new()
        .device(&device)
        .background(&background)
        .options(no_shadow());
    let frame = frame(&request);

    assert_eq!((frame.width(), frame.height()), (500, 800));
    assert!(frame.surface().is_opaque());

    // Margin stays white.
    assert_eq!(frame.pixel(50, 50), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(450, 750), Some([255, 255, 255, 255]));
    // Outside the rounded corner of the body.
    assert_eq!(frame.pixel(101, 101), Some([255, 255, 255, 255]));
    // Dark body, no screen content.
    assert_eq!(frame.pixel(250, 400), Some([17, 17, 17, 255]));
    assert_eq!(frame.pixel(250, 110), Some([17, 17, 17, 255]));
    // Bezel highlight lifts the body colour along the inset edge.
    let bezel = frame.pixel(250, 101).unwrap()[0].max(frame.pixel(250, 102).unwrap()[0]);
    assert!(bezel > 20, "bezel pixel was {bezel}");
}

#[test]
fn pixels_outside_the_frame_are_none() {
    let device = reference_device();
    let background = white();
    let request = RenderRequest::new()
        .device(&device)
        .background(&background)
        .options(no_shadow());
    let frame = frame(&request);

    assert!(frame.pixel(499, 799).is_some());
    assert_eq!(frame.pixel(500, 0), None);
    assert_eq!(frame.pixel(750, 100), None);
    assert_eq!(frame.pixel(0, 800), None);
}

#[test]
fn mesh_blob_edges_fade_into_the_base() {
    let device = reference_device();
    let background = BackgroundDescriptor::new(
        "white-mesh",
        "White Mesh",
        BackgroundCategory::Abstract,
        FillSpec::RadialMesh {
            base: Color::WHITE,
            blobs: vec![MeshBlob::new(0.0, 0.0, Color::WHITE)],
        },
    );
    let request = RenderRequest::new()
        .device(&device)
        .background(&background)
        .options(no_shadow());
    let frame = frame(&request);

    // Inside the blob's fade, where a dark outer stop would grey the base.
    for (x, y) in [(90, 0), (60, 60), (0, 200), (240, 30)] {
        let px = frame.pixel(x, y).unwrap();
        assert!(px.iter().all(|&c| c >= 254), "pixel ({x}, {y}) was {px:?}");
    }
}

#[test]
fn degenerate_geometry_still_composes() {
    // Radius beyond half the short side, screen running off the body.
    let device = DeviceDescriptor::new("odd", "Odd", DeviceCategory::Phone, 300.0, 600.0)
        .corner_radius(900.0)
        .frame_color(Color::from_hex(0x111111))
        .screen(-40.0, 500.0, 420.0, 300.0, 60.0)
        .notch(400.0, 30.0)
        .punch_hole(350.0, -10.0, 8.0);
    let background = white();
    let image = solid_image(8, 8, [0, 0, 255, 255]);
    let request = RenderRequest::new()
        .device(&device)
        .background(&background)
        .image(&image)
        .options(RenderOptions::default().with_rotation(45.0));
    let frame = frame(&request);

    assert_eq!((frame.width(), frame.height()), (500, 800));
    assert!(frame.surface().is_opaque());
}

#[test]
fn surface_size_follows_zoom() {
    let device = reference_device();
    let background = white();
    for (zoom, expected) in [(100.0, (500, 800)), (50.0, (350, 500)), (200.0, (800, 1400))] {
        let request = RenderRequest::new()
            .device(&device)
            .background(&background)
            .options(no_shadow().with_zoom(zoom));
        let frame = frame(&request);
        assert_eq!((frame.width(), frame.height()), expected, "zoom {zoom}");
    }
}

#[test]
fn equivalent_rotations_are_pixel_identical() {
    let device = find_device_by_id("iphone-15-pro").unwrap();
    let background = mockup_core::default_background();
    let render = |degrees: f32| {
        let request = RenderRequest::new()
            .device(device)
            .background(background)
            .options(RenderOptions::default().with_rotation(degrees));
        frame(&request).surface().to_rgba8()
    };
    let base = render(30.0);
    assert!(base == render(390.0));
    assert!(base == render(-330.0));
    assert!(base != render(0.0));
}

#[test]
fn every_background_is_opaque() {
    let device = find_device_by_id("apple-watch").unwrap();
    for background in all_backgrounds() {
        let request = RenderRequest::new()
            .device(device)
            .background(background)
            .options(no_shadow());
        let frame = frame(&request);
        let (w, h) = (frame.width(), frame.height());
        for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1), (w / 2, h / 2)] {
            let alpha = frame.pixel(x, y).unwrap()[3];
            assert_eq!(alpha, 255, "{} at ({x}, {y})", background.id);
        }
    }
}

#[test]
fn island_replaces_notch() {
    let device = reference_device().notch(150.0, 30.0).dynamic_island();
    let background = white();
    let request = RenderRequest::new()
        .device(&device)
        .background(&background)
        .options(no_shadow());
    let list = record(&request).unwrap().unwrap();

    let filled: Vec<&Shape> = list
        .commands
        .iter()
        .filter_map(|c| match c {
            PaintCommand::Fill { shape, .. } => Some(shape),
            _ => None,
        })
        .collect();
    let island: Shape = RoundedRect::new(Rect::new(95.0, 22.0, 110.0, 35.0), 17.5).into();
    let notch: Shape = RoundedRect::new(Rect::new(75.0, 0.0, 150.0, 30.0), 15.0).into();
    assert!(filled.contains(&&island));
    assert!(!filled.contains(&&notch));
}

#[test]
fn missing_selection_is_empty() {
    let device = reference_device();
    let background = white();
    let image = solid_image(2, 2, [255, 0, 0, 255]);

    let no_device = RenderRequest::new().background(&background).image(&image);
    let composition = compose(&no_device).unwrap();
    assert!(composition.is_empty());
    assert!(!composition.can_export());

    let no_background = RenderRequest::new().device(&device).image(&image);
    assert!(compose(&no_background).unwrap().is_empty());
}

#[test]
fn screen_is_covered_without_letterboxing() {
    let device = reference_device();
    let background = white();
    let red = [230, 20, 20, 255];

    // Both a wide and a tall image must reach every edge of the screen.
    for image in [solid_image(64, 16, red), solid_image(16, 64, red)] {
        let request = RenderRequest::new()
            .device(&device)
            .background(&background)
            .image(&image)
            .options(no_shadow());
        let frame = frame(&request);
        // Screen spans (110, 110)..(390, 690) on the surface.
        for (x, y) in [(250, 400), (120, 400), (380, 400), (250, 115), (250, 685)] {
            let px = frame.pixel(x, y).unwrap();
            assert!(
                px[0] > 200 && px[1] < 60,
                "pixel ({x}, {y}) was {px:?} for {}x{}",
                image.width(),
                image.height()
            );
        }
        // The clip keeps the image off the body frame and margin.
        assert_eq!(frame.pixel(250, 104), Some([17, 17, 17, 255]));
        assert_eq!(frame.pixel(50, 400), Some([255, 255, 255, 255]));
    }
}

#[test]
fn removing_the_image_leaves_an_empty_screen() {
    let device = reference_device();
    let background = white();
    let image = solid_image(4, 4, [0, 200, 0, 255]);
    let with_image = RenderRequest::new()
        .device(&device)
        .background(&background)
        .image(&image);
    let without_image = RenderRequest {
        image: None,
        ..with_image.clone()
    };

    let has_image = |request: &RenderRequest<'_>| {
        record(request)
            .unwrap()
            .unwrap()
            .commands
            .iter()
            .any(|c| matches!(c, PaintCommand::DrawImage { .. }))
    };
    assert!(has_image(&with_image));
    assert!(!has_image(&without_image));
}

#[test]
fn shadow_darkens_below_the_device() {
    let device = reference_device();
    let background = white();
    let with_shadow = RenderRequest::new().device(&device).background(&background);
    let without_shadow = with_shadow.clone().options(no_shadow());

    // Just below the body bottom edge (y = 700), inside the shadow's offset.
    let shaded = frame(&with_shadow).pixel(250, 710).unwrap()[0];
    let plain = frame(&without_shadow).pixel(250, 710).unwrap()[0];
    assert_eq!(plain, 255);
    assert!(shaded < 240, "shadow pixel was {shaded}");
}

#[test]
fn export_png_and_jpeg() {
    let device = reference_device();
    let background = white();
    let request = RenderRequest::new()
        .device(&device)
        .background(&background)
        .options(no_shadow().with_zoom(50.0));
    let frame = frame(&request);

    let png = frame.export(&ExportOptions::default(), 1_700_000_000_000).unwrap();
    assert_eq!(png.format, ExportFormat::Png);
    assert_eq!(png.file_name, "mockup-reference-1700000000000.png");
    let decoded = SourceImage::load(ImageSource::bytes(png.bytes)).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (frame.width(), frame.height()));

    let jpeg = frame.export(&ExportOptions::with_quality(0.8), 7).unwrap();
    assert_eq!(jpeg.format, ExportFormat::Jpeg { quality: 80 });
    assert_eq!(jpeg.file_name, "mockup-reference-7.jpeg");
    assert!(!jpeg.bytes.is_empty());
    let decoded = SourceImage::load(ImageSource::bytes(jpeg.bytes)).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (frame.width(), frame.height()));
}
