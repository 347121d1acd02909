//! RGB grid to RGBA framebuffer copy, as done once per presented frame.
//!
//! Run with: cargo bench --bench presenter_copy

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mandelbrot_explorer::presenters::pixels::pixel_format::copy_grid_to_rgba;
use mandelbrot_explorer::{GridSize, PixelGrid};
use std::hint::black_box;

fn bench_copy_grid_to_rgba(c: &mut Criterion) {
    let mut group = c.benchmark_group("presenter/copy_grid_to_rgba");

    for side in [300, 600, 1200] {
        let size = GridSize::new(side, side).expect("valid size");
        let grid = PixelGrid::new(size);
        let mut frame = vec![0u8; size.pixel_count() * 4];
        group.throughput(Throughput::Elements(size.pixel_count() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{side}x{side}")),
            &grid,
            |b, grid| {
                b.iter(|| {
                    copy_grid_to_rgba(grid, &mut frame).expect("frame sized to grid");
                    black_box(&frame);
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_copy_grid_to_rgba);
criterion_main!(benches);
