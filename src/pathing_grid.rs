use core::fmt;
use log::{debug, info};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::search_context::SearchContext;
use crate::{Cell, Coord, GridConfig, GridError, Result};

/// [PathingGrid] owns the cells of a rectangular 4-connected grid in row-major order. Besides the
/// raw cell state it maintains the connected components of open cells in a [UnionFind] structure,
/// so reachability can be queried without running a search.
pub struct PathingGrid {
    rows: usize,
    cols: usize,
    start: Coord,
    finish: Coord,
    cells: Vec<Cell>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
    pub(crate) context: SearchContext<Coord, u32>,
}

impl PathingGrid {
    /// Creates a grid without walls, marking the configured start and finish cells.
    pub fn new(config: &GridConfig) -> Result<PathingGrid> {
        config.validate()?;
        let GridConfig {
            rows,
            cols,
            start,
            finish,
        } = *config;
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let mut cell = Cell::new(row, col);
                cell.is_start = cell.coord() == start;
                cell.is_finish = cell.coord() == finish;
                cells.push(cell);
            }
        }
        info!("Created {rows}x{cols} grid, start {start}, finish {finish}");
        let mut grid = PathingGrid {
            rows,
            cols,
            start,
            finish,
            cells,
            components: UnionFind::new(rows * cols),
            components_dirty: false,
            context: SearchContext::new(),
        };
        grid.generate_components();
        Ok(grid)
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn finish(&self) -> Coord {
        self.finish
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub(crate) fn check_bounds(&self, row: usize, col: usize) -> Result<usize> {
        if self.in_bounds(row, col) {
            Ok(self.compute_ix(row, col))
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    fn compute_ix(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Result<&Cell> {
        let ix = self.check_bounds(row, col)?;
        Ok(&self.cells[ix])
    }

    pub fn cell(&self, coord: Coord) -> Result<&Cell> {
        self.cell_at(coord.row, coord.col)
    }

    pub(crate) fn cell_mut(&mut self, coord: Coord) -> Result<&mut Cell> {
        let ix = self.check_bounds(coord.row, coord.col)?;
        Ok(&mut self.cells[ix])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The in-bounds cardinal neighbours of `coord`, in the order up, down, left, right.
    pub fn neighbors(&self, coord: Coord) -> Result<SmallVec<[Coord; 4]>> {
        self.check_bounds(coord.row, coord.col)?;
        Ok(self.neumann_neighborhood(coord))
    }

    /// Assumes `coord` is in bounds.
    fn neumann_neighborhood(&self, coord: Coord) -> SmallVec<[Coord; 4]> {
        let Coord { row, col } = coord;
        let mut neighbours = SmallVec::new();
        if row > 0 {
            neighbours.push(Coord::new(row - 1, col));
        }
        if row + 1 < self.rows {
            neighbours.push(Coord::new(row + 1, col));
        }
        if col > 0 {
            neighbours.push(Coord::new(row, col - 1));
        }
        if col + 1 < self.cols {
            neighbours.push(Coord::new(row, col + 1));
        }
        neighbours
    }

    /// Whether `coord` lies on the grid and is not a wall.
    pub fn can_move_to(&self, coord: Coord) -> bool {
        self.in_bounds(coord.row, coord.col)
            && !self.cells[self.compute_ix(coord.row, coord.col)].is_wall
    }

    /// Neighbours the search may relax from `coord`, each at unit cost.
    pub(crate) fn open_neighbours_and_cost(
        &self,
        coord: &Coord,
    ) -> SmallVec<[(Coord, u32); 4]> {
        self.neumann_neighborhood(*coord)
            .into_iter()
            .filter(|n| self.can_move_to(*n))
            .map(|n| (n, 1))
            .collect()
    }

    pub fn is_wall(&self, row: usize, col: usize) -> Result<bool> {
        Ok(self.cell_at(row, col)?.is_wall)
    }

    /// Flips the wall flag of a single cell and returns its new value.
    pub fn toggle_wall(&mut self, row: usize, col: usize) -> Result<bool> {
        let blocked = !self.is_wall(row, col)?;
        self.set_wall(row, col, blocked)?;
        Ok(blocked)
    }

    /// Updates a position on the grid. Joins newly connected components and flags the components
    /// as dirty if components are (potentially) broken apart into multiple.
    pub fn set_wall(&mut self, row: usize, col: usize, blocked: bool) -> Result<()> {
        let ix = self.check_bounds(row, col)?;
        if self.cells[ix].is_wall == blocked {
            return Ok(());
        }
        self.cells[ix].is_wall = blocked;
        if blocked {
            self.components_dirty = true;
        } else {
            for n in self.neumann_neighborhood(Coord::new(row, col)) {
                if self.can_move_to(n) {
                    let n_ix = self.compute_ix(n.row, n.col);
                    self.components.union(ix, n_ix);
                }
            }
        }
        Ok(())
    }

    /// Clears the per-run search fields of every cell. Walls and endpoint markers are kept.
    pub fn reset_search_state(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset_search_state);
    }

    /// Whether `start` and `goal` are open cells on the same connected component.
    pub fn reachable(&self, start: &Coord, goal: &Coord) -> bool {
        if self.can_move_to(*start) && self.can_move_to(*goal) {
            let start_ix = self.compute_ix(start.row, start.col);
            let goal_ix = self.compute_ix(goal.row, goal.col);
            self.components.equiv(start_ix, goal_ix)
        } else {
            false
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            debug!("Components are dirty, regenerating");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open grid neighbours to the same
    /// components. Only the down and right neighbours are linked, the others are covered from
    /// their side.
    pub fn generate_components(&mut self) {
        info!("Generating connected components");
        self.components = UnionFind::new(self.rows * self.cols);
        self.components_dirty = false;
        for row in 0..self.rows {
            for col in 0..self.cols {
                let point = Coord::new(row, col);
                if !self.can_move_to(point) {
                    continue;
                }
                let parent_ix = self.compute_ix(row, col);
                for n in [Coord::new(row + 1, col), Coord::new(row, col + 1)] {
                    if self.can_move_to(n) {
                        let ix = self.compute_ix(n.row, n.col);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line = row
                .iter()
                .map(|cell| {
                    if cell.is_start {
                        'S'
                    } else if cell.is_finish {
                        'F'
                    } else if cell.is_wall {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl Clone for PathingGrid {
    /// The clone starts with an empty search context.
    fn clone(&self) -> Self {
        PathingGrid {
            rows: self.rows,
            cols: self.cols,
            start: self.start,
            finish: self.finish,
            cells: self.cells.clone(),
            components: self.components.clone(),
            components_dirty: self.components_dirty,
            context: SearchContext::new(),
        }
    }
}

impl fmt::Debug for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PathingGrid")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("start", &self.start)
            .field("finish", &self.finish)
            .field("components_dirty", &self.components_dirty)
            .finish()
    }
}
