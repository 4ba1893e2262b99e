//! Search space abstraction shared by fine and coarse searches.

use crate::core::GridCoord;
use crate::grid::TerrainGrid;

/// A 4-connected graph over grid coordinates with a pluggable cost model.
///
/// [`TerrainGrid`] is the fine-resolution space; the hierarchical search
/// supplies a coarse block space with steepness-gated edges.
pub trait SearchSpace {
    /// Whether a node exists in this space
    fn contains(&self, node: GridCoord) -> bool;

    /// Cost of moving `from -> to`, `None` if the edge is not allowed
    fn step_cost(&self, from: GridCoord, to: GridCoord) -> Option<f64>;

    /// Admissible estimate of the remaining cost to `goal`
    fn heuristic(&self, from: GridCoord, goal: GridCoord) -> f64;

    /// Number of nodes, bounds path reconstruction
    fn cell_count(&self) -> usize;

    /// Candidate successors, filtered later by `contains` and `step_cost`
    fn neighbors(&self, node: GridCoord) -> [GridCoord; 4] {
        node.neighbors_4()
    }
}

impl SearchSpace for TerrainGrid {
    #[inline]
    fn contains(&self, node: GridCoord) -> bool {
        TerrainGrid::contains(self, node)
    }

    #[inline]
    fn step_cost(&self, from: GridCoord, to: GridCoord) -> Option<f64> {
        if self.edge_allowed(to) {
            Some(self.cost(from, to))
        } else {
            None
        }
    }

    /// Manhattan distance
    #[inline]
    fn heuristic(&self, from: GridCoord, goal: GridCoord) -> f64 {
        from.manhattan_distance(&goal) as f64
    }

    #[inline]
    fn cell_count(&self) -> usize {
        TerrainGrid::cell_count(self)
    }
}
