//! Benchmarks for a full render pass.
//!
//! Run with: cargo bench -p mockup_core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mockup_core::catalog::{find_background_by_id, find_device_by_id};
use mockup_core::{compose, record, RenderOptions, RenderRequest, SourceImage};

fn screenshot(width: u32, height: u32) -> SourceImage {
    let pixels: Vec<u8> = (0..width * height)
        .flat_map(|i| {
            let v = (i % 251) as u8;
            [v, 255 - v, 128, 255]
        })
        .collect();
    SourceImage::from_rgba8(width, height, pixels).expect("valid screenshot")
}

fn bench_compose(c: &mut Criterion) {
    let image = screenshot(390, 844);
    let mut group = c.benchmark_group("compose");
    group.sample_size(20);

    for (device_id, background_id) in [
        ("iphone-15-pro", "gradient1"),
        ("macbook-pro", "abstract1"),
        ("gaming-monitor", "texture4"),
    ] {
        let device = find_device_by_id(device_id).expect("catalog device");
        let background = find_background_by_id(background_id).expect("catalog background");
        let request = RenderRequest::new()
            .device(device)
            .background(background)
            .image(&image)
            .options(RenderOptions::default().with_rotation(-12.0));

        group.bench_with_input(BenchmarkId::new("full", device_id), &request, |b, request| {
            b.iter(|| compose(black_box(request)).expect("compose"))
        });
        group.bench_with_input(BenchmarkId::new("record", device_id), &request, |b, request| {
            b.iter(|| record(black_box(request)).expect("record"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compose);
criterion_main!(benches);
