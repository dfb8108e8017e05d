use grid_trace::{AnimationConfig, GridConfig, PathingGrid, Phase};
use itertools::Itertools;
use std::thread;

// Animates a search on the default 20x50 grid in the terminal, redrawing the grid for every
// reveal event. Visited cells are drawn as `o`, the shortest path as `*`.

fn main() {
    env_logger::init();
    let mut grid = PathingGrid::new(&GridConfig::default()).unwrap();
    // A wall between start and finish with a gap at the top.
    for row in 2..18 {
        grid.set_wall(row, 25, true).unwrap();
    }
    let trace = grid.trace().unwrap();
    let (rows, cols) = grid.dimensions();
    let mut canvas: Vec<Vec<char>> = grid
        .to_string()
        .lines()
        .map(|line| line.chars().collect())
        .collect();

    let mut elapsed = std::time::Duration::ZERO;
    for event in trace.playback(&AnimationConfig::default()) {
        thread::sleep(event.offset.saturating_sub(elapsed));
        elapsed = event.offset;
        let mark = match event.phase {
            Phase::Visited => 'o',
            Phase::ShortestPath => '*',
        };
        let cell = &mut canvas[event.coord.row][event.coord.col];
        if !matches!(*cell, 'S' | 'F') {
            *cell = mark;
        }
        print!("\x1b[2J\x1b[H");
        println!("{}", canvas.iter().map(|r| r.iter().collect::<String>()).join("\n"));
    }
    println!(
        "{}x{} grid, {} cells visited, path of {} steps: {}",
        rows,
        cols,
        trace.visited.len(),
        trace.path_cost().unwrap_or(0),
        trace.path.iter().join(" -> ")
    );
}
