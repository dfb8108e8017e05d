/// Fuzzes the search by checking the properties of its trace on many random grids. Reachability
/// is cross-checked against the connected components and distances against a plain BFS.
use grid_trace::{Coord, GridConfig, PathingGrid, Trace};
use rand::prelude::*;
use std::collections::VecDeque;

fn random_grid(rows: usize, cols: usize, rng: &mut StdRng) -> PathingGrid {
    let start = Coord::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
    let finish = Coord::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
    let mut grid = PathingGrid::new(&GridConfig::new(rows, cols, start, finish)).unwrap();
    for row in 0..rows {
        for col in 0..cols {
            let c = Coord::new(row, col);
            if c != start && c != finish {
                grid.set_wall(row, col, rng.gen_bool(0.35)).unwrap();
            }
        }
    }
    grid.update();
    grid
}

fn visualize_grid(grid: &PathingGrid, trace: &Trace) {
    println!("{grid}");
    println!("visited: {:?}", trace.visited);
    println!("path: {:?}", trace.path);
}

fn bfs_distances(grid: &PathingGrid, start: Coord) -> Vec<Option<u32>> {
    let (rows, cols) = grid.dimensions();
    let mut dist = vec![None; rows * cols];
    let mut queue = VecDeque::new();
    dist[start.row * cols + start.col] = Some(0);
    queue.push_back(start);
    while let Some(c) = queue.pop_front() {
        let d = dist[c.row * cols + c.col].unwrap();
        for n in grid.neighbors(c).unwrap() {
            let ix = n.row * cols + n.col;
            if grid.can_move_to(n) && dist[ix].is_none() {
                dist[ix] = Some(d + 1);
                queue.push_back(n);
            }
        }
    }
    dist
}

#[test]
fn fuzz() {
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let rows = rng.gen_range(1..=8);
        let cols = rng.gen_range(1..=8);
        let mut grid = random_grid(rows, cols, &mut rng);
        let (start, finish) = (grid.start(), grid.finish());
        let reachable = grid.reachable(&start, &finish);
        let trace = grid.trace().unwrap();
        // Show the grid if reachability disagrees
        if trace.found() != reachable {
            visualize_grid(&grid, &trace);
        }
        assert_eq!(trace.found(), reachable);

        let bfs = bfs_distances(&grid, start);
        let mut last = 0;
        for c in &trace.visited {
            let cell = grid.cell(*c).unwrap();
            assert!(!cell.is_wall);
            assert!(cell.is_visited);
            let d = cell.distance.unwrap();
            assert_eq!(Some(d), bfs[c.row * cols + c.col]);
            assert!(d >= last, "finalization order must not decrease");
            last = d;
        }

        assert!(trace.path.iter().all(|c| grid.can_move_to(*c)));
        assert_eq!(trace.path.last(), Some(&finish));
        if trace.found() {
            assert_eq!(trace.path[0], start);
            assert!(trace.path.iter().all(|c| trace.visited.contains(c)));
            assert_eq!(
                trace.path_cost(),
                grid.cell(finish).unwrap().distance.map(|d| d as usize)
            );
        } else {
            assert_eq!(trace.path, vec![finish]);
            assert_eq!(grid.cell(finish).unwrap().distance, None);
            // Exhausted every cell reachable from the start.
            let reached = bfs.iter().filter(|d| d.is_some()).count();
            assert_eq!(trace.visited.len(), reached);
        }
    }
}

#[test]
fn repeated_runs_are_identical() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let mut grid = random_grid(10, 10, &mut rng);
        let first = grid.trace().unwrap();
        let cells: Vec<_> = grid.cells().copied().collect();
        let second = grid.trace().unwrap();
        assert_eq!(first, second);
        assert!(grid.cells().copied().eq(cells));
    }
}

#[test]
fn open_grid_paths_are_manhattan() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..500 {
        let (rows, cols) = (rng.gen_range(1..=12), rng.gen_range(1..=12));
        let start = Coord::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
        let finish = Coord::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
        let mut grid = PathingGrid::new(&GridConfig::new(rows, cols, start, finish)).unwrap();
        let trace = grid.trace().unwrap();
        assert_eq!(trace.path_cost(), Some(start.manhattan_distance(&finish)));
        assert_eq!(trace.path.len(), start.manhattan_distance(&finish) + 1);
    }
}
