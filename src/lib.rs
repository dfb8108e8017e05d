//! # grid_trace
//!
//! Shortest paths on a 4-connected grid, computed with a uniform-cost search
//! ([Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) with unit edge
//! weights) that records the order in which cells are finalized. The resulting [Trace] can be
//! replayed as timed reveal events through [Playback], which makes the crate a backend for
//! pathfinding visualizers: a UI paints walls on a [PathingGrid], runs [PathingGrid::trace] and
//! animates what comes back.
//!
//! ```
//! use grid_trace::{Coord, GridConfig, PathingGrid};
//!
//! let config = GridConfig::new(3, 3, Coord::new(0, 0), Coord::new(2, 2));
//! let mut grid = PathingGrid::new(&config).unwrap();
//! grid.toggle_wall(1, 1).unwrap();
//! let trace = grid.trace().unwrap();
//! assert!(trace.found());
//! assert_eq!(trace.path.len(), 5);
//! ```
//!
//! Connected components of open cells are maintained alongside the grid, so
//! [PathingGrid::reachable] can tell whether a path exists without searching.
mod cell;
pub mod config;
pub mod dijkstra;
mod error;
pub mod pathing_grid;
pub mod playback;
pub mod search_context;

pub use cell::{Cell, Coord};
pub use config::{AnimationConfig, GridConfig};
pub use dijkstra::{dijkstra, path_cost, shortest_path_order, Trace};
pub use error::{GridError, Result};
pub use pathing_grid::PathingGrid;
pub use playback::{Phase, Playback, RevealEvent};
