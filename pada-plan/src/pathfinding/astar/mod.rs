//! A* pathfinding algorithm.
//!
//! Implements A* search over a [`SearchSpace`] with support for:
//! - Pluggable per-edge cost and heuristic
//! - Deterministic tie-breaking (f, then h, then coordinate)
//! - Node budget, wall-clock deadline and cooperative cancellation

mod planner;
mod space;
mod types;

pub use planner::AStarPlanner;
pub use space::SearchSpace;
pub use types::{AStarConfig, PathFailure, PathResult};

use crate::core::GridCoord;
use crate::grid::TerrainGrid;

/// Quick path finding with default configuration
pub fn find_path(grid: &TerrainGrid, start: GridCoord, goal: GridCoord) -> PathResult {
    AStarPlanner::with_defaults(grid).find_path(start, goal)
}

/// Check if a path exists
pub fn path_exists(grid: &TerrainGrid, start: GridCoord, goal: GridCoord) -> bool {
    find_path(grid, start, goal).success()
}
