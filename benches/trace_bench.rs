use criterion::{criterion_group, criterion_main, Criterion};
use grid_trace::{AnimationConfig, Coord, GridConfig, PathingGrid};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn random_walls(grid: &mut PathingGrid, density: f64, rng: &mut StdRng) {
    let (rows, cols) = grid.dimensions();
    for row in 0..rows {
        for col in 0..cols {
            let c = Coord::new(row, col);
            if c != grid.start() && c != grid.finish() {
                grid.set_wall(row, col, rng.gen_bool(density)).unwrap();
            }
        }
    }
    grid.update();
}

fn trace_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for (rows, cols) in [(20, 50), (100, 100)] {
        for density in [0.0, 0.3] {
            let config = GridConfig::new(rows, cols, Coord::new(0, 0), Coord::new(rows - 1, cols - 1));
            let mut grid = PathingGrid::new(&config).unwrap();
            random_walls(&mut grid, density, &mut rng);
            c.bench_function(format!("trace {rows}x{cols}, walls {density}").as_str(), |b| {
                b.iter(|| black_box(grid.trace().unwrap()))
            });
        }
    }
}

fn playback_bench(c: &mut Criterion) {
    let mut grid = PathingGrid::new(&GridConfig::default()).unwrap();
    let trace = grid.trace().unwrap();
    let config = AnimationConfig::default();
    c.bench_function("playback default grid", |b| {
        b.iter(|| black_box(trace.playback(&config).last()))
    });
}

criterion_group!(benches, trace_bench, playback_bench);
criterion_main!(benches);
