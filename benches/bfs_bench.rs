use criterion::{criterion_group, criterion_main, Criterion};
use grid_bfs::PathingGrid;
use grid_util::grid::Grid;
use grid_util::point::Point;
use rand::prelude::*;
use std::hint::black_box;

fn random_grid(w: usize, h: usize, rng: &mut StdRng) -> PathingGrid {
    let mut pathing_grid: PathingGrid = PathingGrid::new(w, h, false);
    for x in 0..pathing_grid.width() {
        for y in 0..pathing_grid.height() {
            pathing_grid.set(x, y, rng.gen_bool(0.4))
        }
    }
    pathing_grid.set(0, 0, false);
    pathing_grid.set(w - 1, h - 1, false);
    pathing_grid.generate_components();
    pathing_grid
}

fn bfs_bench(c: &mut Criterion) {
    const N: usize = 64;
    let mut rng = StdRng::seed_from_u64(0);
    let pathing_grid = random_grid(N, N, &mut rng);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    c.bench_function(format!("{N}x{N} random grid, 4-grid").as_str(), |b| {
        b.iter(|| black_box(pathing_grid.find_path(start, end).unwrap()))
    });
}

criterion_group!(benches, bfs_bench);
criterion_main!(benches);
