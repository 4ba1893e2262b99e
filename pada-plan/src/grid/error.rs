//! Terrain grid error types.

use thiserror::Error;

use crate::core::GridCoord;

/// Errors raised while building or editing a terrain grid
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid block scale: {0}")]
    InvalidScale(f64),

    #[error("cell ({row}, {col}) is not a number")]
    NonFiniteValue { row: usize, col: usize },

    #[error("cell ({}, {}) is outside the grid", .0.x, .0.y)]
    OutOfBounds(GridCoord),
}
