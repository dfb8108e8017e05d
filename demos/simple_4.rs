use grid_trace::{Coord, GridConfig, PathingGrid};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  F|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - F marks the finish
//
// Cells have a 4-neighborhood

fn main() {
    env_logger::init();
    let config = GridConfig::new(3, 3, Coord::new(0, 0), Coord::new(2, 2));
    let mut pathing_grid = PathingGrid::new(&config).unwrap();
    pathing_grid.toggle_wall(1, 1).unwrap();
    println!("{}", pathing_grid);
    let trace = pathing_grid.trace().unwrap();
    println!("Visited:");
    for c in &trace.visited {
        println!("{c}");
    }
    println!("Path:");
    for c in trace.path {
        println!("{c}");
    }
}
