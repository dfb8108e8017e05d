use core::fmt;

/// Position of a cell on the grid. Ordering is row-major, which is also the tie-break order of
/// the search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// Number of cardinal steps between two coordinates.
    pub fn manhattan_distance(&self, other: &Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Coord {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single grid position together with its wall flag, endpoint markers and the bookkeeping
/// written by the last search run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub is_wall: bool,
    pub is_start: bool,
    pub is_finish: bool,
    /// Best known cost from the start; [None] while the cell has not been reached.
    pub distance: Option<u32>,
    /// Set once the distance is final.
    pub is_visited: bool,
    /// Predecessor on the best known path.
    pub previous: Option<Coord>,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Cell {
        Cell {
            row,
            col,
            is_wall: false,
            is_start: false,
            is_finish: false,
            distance: None,
            is_visited: false,
            previous: None,
        }
    }

    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }

    pub fn is_reached(&self) -> bool {
        self.distance.is_some()
    }

    pub(crate) fn reset_search_state(&mut self) {
        self.distance = None;
        self.is_visited = false;
        self.previous = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords_order_row_major() {
        let mut coords = vec![Coord::new(1, 0), Coord::new(0, 2), Coord::new(0, 1)];
        coords.sort();
        assert_eq!(
            coords,
            vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 0)]
        );
    }

    #[test]
    fn reset_keeps_wall_and_markers() {
        let mut cell = Cell::new(2, 3);
        cell.is_wall = true;
        cell.is_finish = true;
        cell.distance = Some(4);
        cell.is_visited = true;
        cell.previous = Some(Coord::new(2, 2));
        cell.reset_search_state();
        assert!(cell.is_wall && cell.is_finish);
        assert!(!cell.is_reached());
        assert!(!cell.is_visited);
        assert_eq!(cell.previous, None);
    }
}
