//! A* pathfinding types.

use crate::core::GridCoord;
use std::cmp::Ordering;
use std::time::Duration;

/// A node in the A* search
#[derive(Clone, Debug)]
pub(super) struct AStarNode {
    pub coord: GridCoord,
    pub g_cost: f64, // Cost from start
    pub h_cost: f64, // Heuristic to goal
    pub f_cost: f64, // g_cost + h_cost
}

impl Eq for AStarNode {}

impl PartialEq for AStarNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for AStarNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior.
        // Ties: lower heuristic first, then lower (x, y).
        other
            .f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                other
                    .h_cost
                    .partial_cmp(&self.h_cost)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| other.coord.cmp(&self.coord))
    }
}

impl PartialOrd for AStarNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* pathfinding configuration
#[derive(Clone, Debug, PartialEq)]
pub struct AStarConfig {
    /// Maximum number of nodes to expand before giving up
    pub max_iterations: usize,
    /// Wall-clock budget for a single search
    pub deadline: Option<Duration>,
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1_000_000,
            deadline: None,
        }
    }
}

impl AStarConfig {
    /// Limit node expansions
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Limit wall-clock time per search
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Result of A* pathfinding
#[derive(Clone, Debug, PartialEq)]
pub struct PathResult {
    /// Path from start to goal inclusive (empty if no path found)
    pub path: Vec<GridCoord>,
    /// Total path cost
    pub cost: f64,
    /// Number of nodes expanded during search
    pub nodes_expanded: usize,
    /// Reason for failure (if any)
    pub failure: Option<PathFailure>,
}

impl PathResult {
    /// Create a failed result
    pub(crate) fn failed(reason: PathFailure, nodes_expanded: usize) -> Self {
        Self {
            path: Vec::new(),
            cost: f64::INFINITY,
            nodes_expanded,
            failure: Some(reason),
        }
    }

    /// Whether a path was found
    #[inline]
    pub fn success(&self) -> bool {
        self.failure.is_none() && !self.path.is_empty()
    }

    /// Path length in cells
    #[inline]
    pub fn length_cells(&self) -> usize {
        self.path.len()
    }
}

/// Reason for path failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathFailure {
    /// Start or goal is out of bounds
    OutOfBounds,
    /// No path exists between start and goal
    NoPath,
    /// Maximum iterations exceeded
    MaxIterationsExceeded,
    /// Search was cancelled through its token
    Cancelled,
    /// Wall-clock budget ran out
    DeadlineExceeded,
    /// Predecessor chain longer than the search space (inconsistent bookkeeping)
    BrokenPredecessorChain,
    /// Requested block scale is not positive and finite
    InvalidScale,
}
