//! Configuration for grid initialization and trace playback.
use std::time::Duration;

use crate::{Coord, GridError, Result};

pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLS: usize = 50;
pub const DEFAULT_START: Coord = Coord::new(10, 15);
pub const DEFAULT_FINISH: Coord = Coord::new(10, 35);
pub const DEFAULT_VISIT_DELAY: Duration = Duration::from_millis(10);
pub const DEFAULT_PATH_DELAY: Duration = Duration::from_millis(50);

/// Dimensions and endpoint placement of a new [PathingGrid](crate::PathingGrid).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub start: Coord,
    pub finish: Coord,
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            start: DEFAULT_START,
            finish: DEFAULT_FINISH,
        }
    }
}

impl GridConfig {
    pub fn new(rows: usize, cols: usize, start: Coord, finish: Coord) -> GridConfig {
        GridConfig {
            rows,
            cols,
            start,
            finish,
        }
    }

    /// Checks that the grid is non-empty and that both endpoints lie inside it.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GridError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.rows.checked_mul(self.cols).is_none() {
            return Err(GridError::TooLarge {
                rows: self.rows,
                cols: self.cols,
            });
        }
        for endpoint in [self.start, self.finish] {
            if endpoint.row >= self.rows || endpoint.col >= self.cols {
                return Err(GridError::OutOfBounds {
                    row: endpoint.row,
                    col: endpoint.col,
                    rows: self.rows,
                    cols: self.cols,
                });
            }
        }
        Ok(())
    }
}

/// Delays used by [Playback](crate::Playback). Each visited cell is revealed `visit_delay` after
/// the previous one; the path phase starts once all visits are shown and advances by
/// `path_delay` per cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationConfig {
    pub visit_delay: Duration,
    pub path_delay: Duration,
}

impl Default for AnimationConfig {
    fn default() -> AnimationConfig {
        AnimationConfig {
            visit_delay: DEFAULT_VISIT_DELAY,
            path_delay: DEFAULT_PATH_DELAY,
        }
    }
}
