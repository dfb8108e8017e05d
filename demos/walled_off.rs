use grid_trace::{Coord, GridConfig, PathingGrid};

// The finish is enclosed by walls, so the search floods every cell reachable from the start
// and the reconstructed path is just the finish.
//  _____
// |S    |
// |  ###|
// |  #F |
//  _____

fn main() {
    env_logger::init();
    let config = GridConfig::new(3, 5, Coord::new(0, 0), Coord::new(2, 3));
    let mut pathing_grid = PathingGrid::new(&config).unwrap();
    for (row, col) in [(1, 2), (1, 3), (1, 4), (2, 2)] {
        pathing_grid.set_wall(row, col, true).unwrap();
    }
    pathing_grid.update();
    println!("{}", pathing_grid);
    let (start, finish) = (pathing_grid.start(), pathing_grid.finish());
    println!("Reachable: {}", pathing_grid.reachable(&start, &finish));
    let trace = pathing_grid.trace().unwrap();
    println!(
        "Found: {}, visited {} cells, path {:?}",
        trace.found(),
        trace.visited.len(),
        trace.path
    );
}
