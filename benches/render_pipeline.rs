//! Full-grid render cost for both parallel strategies.
//!
//! Run with: cargo bench --bench render_pipeline

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mandelbrot_explorer::{
    Complex, GridSize, MandelbrotAlgorithm, MandelbrotHueCycle, PixelGrid, RenderStrategy,
    TileScheduler, Viewport, escape_time,
};
use std::hint::black_box;
use std::num::NonZeroU32;

fn bench_escape_time(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape_time");

    for (name, sample) in [
        ("interior", Complex::new(-0.5, 0.0)),
        ("boundary", Complex::new(-0.7453, 0.1127)),
        ("exterior", Complex::new(1.0, 1.0)),
    ] {
        group.bench_with_input(BenchmarkId::new(name, 250), &sample, |b, sample| {
            b.iter(|| escape_time(black_box(*sample), 250))
        });
    }

    group.finish();
}

fn bench_render_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_grid");
    group.sample_size(20);

    let viewport = Viewport::new(Complex::new(-0.5, 0.0), 2.5, 250).expect("valid viewport");
    let algorithm = MandelbrotAlgorithm::for_viewport(&viewport);
    let colour_map = MandelbrotHueCycle::new(viewport.iteration_limit(), 0.8);

    for side in [150, 300, 600] {
        let size = GridSize::new(side, side).expect("valid size");
        group.throughput(Throughput::Elements(size.pixel_count() as u64));

        for (name, strategy) in [
            ("rayon", RenderStrategy::RayonPool),
            ("threads", RenderStrategy::ScopedThreads),
        ] {
            for workers in [1, 4, 8] {
                let scheduler =
                    TileScheduler::new(NonZeroU32::new(workers).expect("non-zero"), strategy);
                let mut grid = PixelGrid::new(size);

                group.bench_with_input(
                    BenchmarkId::new(format!("{name}/{workers}w"), format!("{side}x{side}")),
                    &(),
                    |b, _| {
                        b.iter(|| {
                            scheduler
                                .render(&viewport, &algorithm, &colour_map, &mut grid)
                                .expect("render succeeds");
                            black_box(&grid);
                        })
                    },
                );
            }
        }
    }

    group.finish();
}

criterion_group!(benches, bench_escape_time, bench_render_strategies);
criterion_main!(benches);
