/// Fuzzes the pathfinding system by checking for many random grids that a
/// path is found if and only if the goal is reachable by being part of the
/// same connected component, and that found paths are valid shortest paths
/// according to an independent distance-only BFS.
use grid_bfs::{moves_to_path, PathingGrid};
use grid_util::grid::Grid;
use grid_util::point::Point;
use rand::prelude::*;
use std::collections::VecDeque;

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

fn visualize_grid(grid: &PathingGrid, start: &Point, end: &Point) {
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if grid.get(x as usize, y as usize) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

/// Plain distance-only BFS used as a reference for shortest-path lengths.
fn reference_distance(grid: &PathingGrid, start: Point, goal: Point) -> Option<usize> {
    let w = grid.width() as i32;
    let h = grid.height() as i32;
    let ix = |p: Point| (p.y * w + p.x) as usize;
    let mut dist: Vec<Option<usize>> = vec![None; (w * h) as usize];
    let mut queue = VecDeque::new();
    dist[ix(start)] = Some(0);
    queue.push_back(start);
    while let Some(p) = queue.pop_front() {
        if p == goal {
            return dist[ix(p)];
        }
        for (dx, dy) in [(0, -1), (0, 1), (1, 0), (-1, 0)] {
            let n = Point::new(p.x + dx, p.y + dy);
            if n.x >= 0
                && n.y >= 0
                && n.x < w
                && n.y < h
                && !grid.get(n.x as usize, n.y as usize)
                && dist[ix(n)].is_none()
            {
                dist[ix(n)] = dist[ix(p)].map(|d| d + 1);
                queue.push_back(n);
            }
        }
    }
    None
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng);
        let reachable = !grid.unreachable(&start, &end);
        let result = grid.find_path(start, end).unwrap();
        // Show the grid if a path is not found
        if result.is_some() != reachable {
            visualize_grid(&grid, &start, &end);
        }
        assert!(result.is_some() == reachable);
        if let Some(path) = result {
            assert_eq!(Some(path.distance()), reference_distance(&grid, start, end));
            assert_eq!(path.cells.first(), Some(&start));
            assert_eq!(path.cells.last(), Some(&end));
            assert_eq!(path.moves.len() + 1, path.cells.len());
            assert_eq!(moves_to_path(start, &path.moves), path.cells);
            for p in &path.cells {
                assert!(!grid.get(p.x as usize, p.y as usize));
            }
        }
    }
}

#[test]
fn fuzz_determinism() {
    const N: usize = 8;
    const N_GRIDS: usize = 200;
    let mut rng = StdRng::seed_from_u64(7);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng);
        let first = grid.find_path(start, end).unwrap();
        let second = grid.find_path(start, end).unwrap();
        assert_eq!(first, second);
    }
}
