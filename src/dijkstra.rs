use itertools::Itertools;
use log::{debug, warn};
use std::iter;

use crate::{AnimationConfig, Coord, GridError, PathingGrid, Playback, Result};

/// Performs a uniform-cost search from `start` to `finish` and returns every cell in the order it
/// was finalized. Walls are treated as absent. Equal-distance cells are finalized in row-major
/// order, so the trace is reproducible for a given grid.
///
/// The search fields of all cells are reset first, even when the run is rejected, then overwritten
/// with the result of this run: afterwards each cell's `distance` and `previous` describe the best path found to it, which
/// [shortest_path_order] follows back from the finish. If the finish is walled off the search
/// exhausts every reachable cell and the finish keeps `distance == None`.
pub fn dijkstra(grid: &mut PathingGrid, start: Coord, finish: Coord) -> Result<Vec<Coord>> {
    grid.reset_search_state();
    for endpoint in [start, finish] {
        if grid.cell(endpoint)?.is_wall {
            warn!("Refusing to search from {start} to {finish}: {endpoint} is a wall");
            return Err(GridError::WallEndpoint {
                row: endpoint.row,
                col: endpoint.col,
            });
        }
    }

    let mut ct = std::mem::take(&mut grid.context);
    let visited = ct.uniform_cost_trace(
        &start,
        |node| grid.open_neighbours_and_cost(node),
        |node| *node == finish,
    );
    for (node, parent, discovered) in ct.discovered() {
        if let Ok(cell) = grid.cell_mut(*node) {
            cell.distance = Some(discovered.cost);
            cell.previous = parent.copied();
            cell.is_visited = discovered.settled;
        }
    }
    grid.context = ct;

    debug!(
        "Search from {start} to {finish} finalized {} cells, finish {}",
        visited.len(),
        if visited.last() == Some(&finish) {
            "reached"
        } else {
            "unreachable"
        }
    );
    Ok(visited)
}

/// Backtracks from `finish` along the `previous` links left by [dijkstra]. Yields the path from
/// the start to the finish inclusive, or just `[finish]` if the finish was never reached.
pub fn shortest_path_order(grid: &PathingGrid, finish: Coord) -> Result<Vec<Coord>> {
    grid.cell(finish)?;
    let mut path: Vec<Coord> = iter::successors(Some(finish), |current| {
        grid.cell(*current).ok().and_then(|cell| cell.previous)
    })
    .collect();
    path.reverse();
    Ok(path)
}

/// Number of unit steps along a path of adjacent cells.
pub fn path_cost(path: &[Coord]) -> usize {
    path.iter()
        .tuple_windows()
        .map(|(a, b)| a.manhattan_distance(b))
        .sum()
}

/// The outcome of one search run, ready to be replayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace {
    pub start: Coord,
    pub finish: Coord,
    /// Cells in the order they were finalized.
    pub visited: Vec<Coord>,
    /// Start to finish inclusive, or `[finish]` if no path exists.
    pub path: Vec<Coord>,
}

impl Trace {
    /// Runs [dijkstra] and reconstructs the path.
    pub fn compute(grid: &mut PathingGrid, start: Coord, finish: Coord) -> Result<Trace> {
        let visited = dijkstra(grid, start, finish)?;
        let path = shortest_path_order(grid, finish)?;
        Ok(Trace {
            start,
            finish,
            visited,
            path,
        })
    }

    /// Whether the finish was reached.
    pub fn found(&self) -> bool {
        self.visited.last() == Some(&self.finish)
    }

    /// Length of the shortest path in steps, if there is one.
    pub fn path_cost(&self) -> Option<usize> {
        self.found().then(|| path_cost(&self.path))
    }

    /// Reveal events for this trace; see [Playback].
    pub fn playback(&self, config: &AnimationConfig) -> Playback {
        Playback::new(self, config)
    }
}

impl PathingGrid {
    /// Searches between the grid's own start and finish markers.
    pub fn trace(&mut self) -> Result<Trace> {
        let (start, finish) = (self.start(), self.finish());
        Trace::compute(self, start, finish)
    }
}
