//! Error types for grid access and search validation.

use thiserror::Error;

/// Errors raised by [PathingGrid](crate::PathingGrid) access and by the search entry points.
///
/// An unreachable finish is not an error: it is reported through the finish cell's state and
/// [Trace::found](crate::Trace::found).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("endpoint ({row}, {col}) is a wall")]
    WallEndpoint { row: usize, col: usize },

    #[error("grid dimensions must be non-zero, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("a {rows}x{cols} grid has more cells than can be addressed")]
    TooLarge { rows: usize, cols: usize },
}

pub type Result<T> = std::result::Result<T, GridError>;
