//! Criterion micro-benchmarks for flood fill and painting.

use criterion::{criterion_group, criterion_main, Criterion};
use pixfill_bench::{maze_profile, open_profile, stack_profile};
use pixfill_core::ChannelVector;
use pixfill_paint::{FloodFiller, PaintSurface};
use pixfill_space::{AxisRoles, Connectivity, PlanePosition, RasterAddress};
use std::hint::black_box;

/// Benchmark: fill every cell of an open 256x256 plane, both connectivities.
fn bench_fill_open_256(c: &mut Criterion) {
    let template = open_profile(256);
    let roles = AxisRoles::xy(&template).unwrap();
    let seed = RasterAddress::new(&roles, 128, 128, &PlanePosition::origin(2)).unwrap();
    let target = ChannelVector::scalar(255.0, true);

    for conn in [Connectivity::Four, Connectivity::Eight] {
        let mut filler = FloodFiller::new();
        c.bench_function(&format!("fill_open_256_{conn}"), |b| {
            b.iter(|| {
                let mut raster = template.clone();
                let mut surface = PaintSurface::new(&mut raster);
                let out = filler.fill(&seed, conn, &mut surface, &target).unwrap();
                black_box(out);
            });
        });
    }
}

/// Benchmark: fill the open region of a 256x256 plane with 30% walls.
fn bench_fill_maze_256(c: &mut Criterion) {
    let template = maze_profile(256, 30, 7);
    let roles = AxisRoles::xy(&template).unwrap();
    let seed = RasterAddress::new(&roles, 0, 0, &PlanePosition::origin(2)).unwrap();
    let target = ChannelVector::scalar(200.0, true);
    let mut filler = FloodFiller::new();

    c.bench_function("fill_maze_256", |b| {
        b.iter(|| {
            let mut raster = template.clone();
            let mut surface = PaintSurface::new(&mut raster);
            let out = filler
                .fill(&seed, Connectivity::Eight, &mut surface, &target)
                .unwrap();
            black_box(out);
        });
    });
}

/// Benchmark: fill one Z slice of a 128x128x8 RGB stack.
fn bench_fill_rgb_slice(c: &mut Criterion) {
    let template = stack_profile(128, 8);
    let roles = AxisRoles::xy(&template).unwrap();
    let seed = RasterAddress::new(&roles, 0, 0, &PlanePosition::new([0, 0, 0, 4])).unwrap();
    let target = ChannelVector::new([255.0, 128.0, 0.0], true);
    let mut filler = FloodFiller::new();

    c.bench_function("fill_rgb_slice_128", |b| {
        b.iter(|| {
            let mut raster = template.clone();
            let mut surface = PaintSurface::new(&mut raster);
            let out = filler
                .fill(&seed, Connectivity::Four, &mut surface, &target)
                .unwrap();
            black_box(out);
        });
    });
}

/// Benchmark: degenerate fill (target equals seed) on a large plane.
fn bench_fill_degenerate(c: &mut Criterion) {
    let mut raster = open_profile(1024);
    let roles = AxisRoles::xy(&raster).unwrap();
    let seed = RasterAddress::new(&roles, 512, 512, &PlanePosition::origin(2)).unwrap();
    let target = ChannelVector::scalar(0.0, true);
    let mut filler = FloodFiller::new();
    let mut surface = PaintSurface::new(&mut raster);

    c.bench_function("fill_degenerate_1024", |b| {
        b.iter(|| {
            let out = filler
                .fill(&seed, Connectivity::Eight, &mut surface, &target)
                .unwrap();
            black_box(out);
        });
    });
}

/// Benchmark: a wide brush stroke across a 512x512 plane.
fn bench_brush_line(c: &mut Criterion) {
    let mut raster = open_profile(512);
    let roles = AxisRoles::xy(&raster).unwrap();
    let origin = PlanePosition::origin(2);
    let from = RasterAddress::new(&roles, 0, 0, &origin).unwrap();
    let to = RasterAddress::new(&roles, 511, 300, &origin).unwrap();
    let value = ChannelVector::scalar(255.0, true);
    let mut surface = PaintSurface::new(&mut raster);
    surface.set_line_width(9);

    c.bench_function("brush_line_512_w9", |b| {
        b.iter(|| {
            let n = surface.paint_line(&from, &to, &value).unwrap();
            black_box(n);
        });
    });
}

criterion_group!(
    benches,
    bench_fill_open_256,
    bench_fill_maze_256,
    bench_fill_rgb_slice,
    bench_fill_degenerate,
    bench_brush_line
);
criterion_main!(benches);
